//! Gunghap CLI - computes the stroke-count compatibility of two Hangul names.
//!
//! ```text
//! main() -> load_settings() -> flags override -> compute() -> write_report()
//! ```
//!
//! Exit codes: 0 on success, 2 when a name is rejected, 1 for anything else.

use std::{
    io::{self, IsTerminal},
    path::PathBuf,
    process::ExitCode,
    time::Duration,
};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use gunghap::{compute, exit_code, load_settings, write_report};
use gunghap_config::OutputFormat;
use gunghap_types::DecompositionKind;

#[derive(Parser)]
#[command(name = "gunghap", version)]
#[command(about = "Hangul name compatibility by traditional stroke count")]
struct Cli {
    /// First name; its characters lead each interleaved pair
    name1: String,
    /// Second name
    name2: String,
    /// Output format: text or json
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Pause between printed reduction rows, in milliseconds
    #[arg(long, value_name = "MS")]
    reveal_delay_ms: Option<u64>,
    /// Jamo decomposition: split or compound
    #[arg(long)]
    decomposition: Option<DecompositionKind>,
    /// Read settings from this file instead of ~/.gunghap/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .with(env_filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        settings.format = format;
    }
    if let Some(ms) = cli.reveal_delay_ms {
        settings.reveal_delay = Duration::from_millis(ms);
    }
    if let Some(kind) = cli.decomposition {
        settings.decomposition = kind;
    }
    tracing::debug!(?settings, "Resolved settings");

    let destiny = compute(&cli.name1, &cli.name2, &settings)?;
    let mut out = io::stdout().lock();
    write_report(&mut out, &destiny, settings.format, settings.reveal_delay)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}
