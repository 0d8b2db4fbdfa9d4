//! Text and JSON presentation of a [`DestinyResult`].
//!
//! The text layout is a pyramid: combined characters with their stroke counts on top,
//! then one line per reduction row, each indented half a cell further, ending in the
//! two result digits and the percentage.

use std::fmt;
use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use gunghap_config::OutputFormat;
use gunghap_types::{DestinyResult, Percentage};

/// Combined length of a four-character and a three-character name.
pub const LONG_COMBINATION_LEN: usize = 7;

const NORMAL_CELL: usize = 6;
const COMPACT_CELL: usize = 4;

/// Rendered text, split so a caller can pause before each reduction row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReport {
    pub lines: Vec<String>,
    /// Index of the first line that belongs to the reduction.
    pub reveal_from: usize,
}

impl fmt::Display for TextReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Whether the narrow layout is used.
#[must_use]
pub fn is_compact(destiny: &DestinyResult) -> bool {
    destiny.combined().len() == LONG_COMBINATION_LEN
}

fn cell(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    let left = pad / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
}

fn row<T: fmt::Display>(items: impl IntoIterator<Item = T>, level: usize, width: usize) -> String {
    let mut line = " ".repeat(level * width / 2);
    for item in items {
        line.push_str(&cell(&item.to_string(), width));
    }
    line.trim_end().to_string()
}

#[must_use]
pub fn render_text(destiny: &DestinyResult) -> TextReport {
    let width = if is_compact(destiny) {
        COMPACT_CELL
    } else {
        NORMAL_CELL
    };

    let mut lines = vec![
        format!("{} ♥ {}", destiny.name1(), destiny.name2()),
        String::new(),
        row(destiny.combined().iter(), 0, width),
        row(destiny.stroke_totals().iter(), 0, width),
    ];
    let reveal_from = lines.len();

    for (i, digits) in destiny.trace().iter().enumerate() {
        lines.push(row(digits.iter(), i + 1, width));
    }
    lines.push(row(destiny.result(), destiny.trace().len() + 1, width));
    lines.push(String::new());
    lines.push(format!("Compatibility: {}", destiny.percentage()));

    TextReport { lines, reveal_from }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    destiny: &'a DestinyResult,
    percentage: Percentage,
    score: String,
}

pub fn render_json(destiny: &DestinyResult) -> Result<String> {
    let report = JsonReport {
        destiny,
        percentage: destiny.percentage(),
        score: destiny.score_text(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Write `destiny` to `out`, pausing `reveal_delay` before each reduction line.
pub fn write_report(
    out: &mut impl Write,
    destiny: &DestinyResult,
    format: OutputFormat,
    reveal_delay: Duration,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", render_json(destiny)?)?;
        }
        OutputFormat::Text => {
            let report = render_text(destiny);
            for (i, line) in report.lines.iter().enumerate() {
                if i >= report.reveal_from && !reveal_delay.is_zero() {
                    out.flush()?;
                    thread::sleep(reveal_delay);
                }
                writeln!(out, "{line}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
