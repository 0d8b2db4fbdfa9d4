//! Pairwise-sum reduction of two interleaved names.
//!
//! ```text
//! 철수 + 영희 -> 철 영 수 희          interleave
//!               11  5  4  5          raw strokes per character (display)
//!                 6  9  9            strokes of each adjacent pair, mod 10
//!                  5  8              adjacent digit sums, mod 10
//! ```
//!
//! Rows shrink by one per generation. Every row of length three or more is kept in the
//! trace; the first row of length two is the result.

use gunghap_types::{DestinyResult, Digit, DigitRow, InterleavedSequence};

use crate::decompose::{Decompose, HangulDecomposer};
use crate::interleave::interleave;
use crate::strokes::{STROKE_TABLE, StrokeMode, StrokeTable};

/// Runs the full pipeline with a chosen decomposer.
#[derive(Debug, Clone)]
pub struct DestinyReducer<D = HangulDecomposer> {
    decomposer: D,
    table: &'static StrokeTable,
}

impl Default for DestinyReducer<HangulDecomposer> {
    fn default() -> Self {
        Self::new(HangulDecomposer)
    }
}

impl<D: Decompose> DestinyReducer<D> {
    #[must_use]
    pub fn new(decomposer: D) -> Self {
        Self::with_table(decomposer, &STROKE_TABLE)
    }

    /// Reducer that scores units with `table` instead of [`STROKE_TABLE`].
    #[must_use]
    pub fn with_table(decomposer: D, table: &'static StrokeTable) -> Self {
        Self { decomposer, table }
    }

    /// Compute the compatibility of `name1` with `name2`.
    ///
    /// Argument order matters: swapping the names changes the interleaving and so,
    /// in general, the score. Input is not validated here; callers check it with
    /// [`gunghap_types::NamePair`] first.
    #[must_use]
    pub fn compute(&self, name1: &str, name2: &str) -> DestinyResult {
        let combined = interleave(name1, name2);
        let stroke_totals = self.stroke_totals(&combined);
        let first_row = self.first_row(&combined);
        let (trace, result) = cascade(first_row);

        let destiny = DestinyResult::new(name1, name2, combined, stroke_totals, trace, result);
        tracing::debug!(
            name1,
            name2,
            rows = destiny.trace().len(),
            score = %destiny.percentage(),
            "Computed destiny"
        );
        destiny
    }

    /// Raw stroke count of each character, for display.
    #[must_use]
    pub fn stroke_totals(&self, combined: &InterleavedSequence) -> Vec<u32> {
        let mut buf = [0u8; 4];
        combined
            .iter()
            .map(|c| {
                let units = self.decomposer.decompose(c.encode_utf8(&mut buf));
                self.table.stroke_value(&units, StrokeMode::Raw)
            })
            .collect()
    }

    /// Reduced stroke count of each adjacent character pair.
    #[must_use]
    pub fn first_row(&self, combined: &InterleavedSequence) -> DigitRow {
        combined
            .pairs()
            .map(|(left, right)| {
                let pair: String = [left, right].into_iter().collect();
                let units = self.decomposer.decompose(&pair);
                Digit::from_total(self.table.stroke_value(&units, StrokeMode::Digit))
            })
            .collect()
    }
}

/// Sum each adjacent pair of digits, dropping the tens place.
#[must_use]
pub fn reduce_row(row: &[Digit]) -> DigitRow {
    row.windows(2)
        .map(|pair| pair[0].wrapping_add(pair[1]))
        .collect()
}

/// Reduce `first` until two digits remain.
///
/// Returns the recorded rows (every row longer than two, `first` included) and the
/// final pair. A `first` row that is already two digits or shorter yields an empty
/// trace, and missing digits are filled with leading zeros.
#[must_use]
pub fn cascade(first: DigitRow) -> (Vec<DigitRow>, [Digit; 2]) {
    let mut trace = Vec::new();
    let mut current = first;

    while current.len() > 2 {
        let next = reduce_row(&current);
        trace.push(current);
        current = next;
    }

    let result = match *current.as_slice() {
        [tens, ones] => [tens, ones],
        [ones] => [Digit::ZERO, ones],
        _ => [Digit::ZERO, Digit::ZERO],
    };
    (trace, result)
}

/// Compute with the default decomposer and the reference stroke table.
#[must_use]
pub fn compute_destiny(name1: &str, name2: &str) -> DestinyResult {
    DestinyReducer::default().compute(name1, name2)
}
