//! Presentation layer for the `gunghap` binary.
//!
//! Turns resolved settings and two validated names into printed output. The
//! computation itself lives in [`gunghap_core`]; nothing here affects the score.

pub mod render;

use std::path::Path;

use anyhow::{Context, Result, bail};

use gunghap_config::{GunghapConfig, Settings};
use gunghap_core::compute_destiny_with;
use gunghap_types::{DestinyResult, NameError, NamePair};

pub use render::{LONG_COMBINATION_LEN, TextReport, render_json, render_text, write_report};

/// Load settings from `explicit` or the default config location.
///
/// An explicit path must exist and parse. Problems with the default file are logged
/// and defaults are used instead.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let config = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} does not exist", path.display());
            }
            GunghapConfig::load_from(path)
                .with_context(|| format!("loading {}", path.display()))?
                .unwrap_or_default()
        }
        None => match GunghapConfig::load() {
            Ok(config) => config.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(path = %err.path().display(), "Using default settings: {err}");
                GunghapConfig::default()
            }
        },
    };
    Ok(config.settings())
}

/// Validate both names against `settings` and compute their compatibility.
pub fn compute(name1: &str, name2: &str, settings: &Settings) -> Result<DestinyResult> {
    let pair = NamePair::new(name1, name2, &settings.rules)?;
    Ok(compute_destiny_with(
        settings.decomposition,
        pair.first(),
        pair.second(),
    ))
}

/// Process exit status for a failed run: 2 when a name was rejected, 1 otherwise.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<NameError>().is_some() {
        2
    } else {
        1
    }
}
