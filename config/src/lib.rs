//! Configuration for Gunghap.
//!
//! Settings come from three layers, lowest precedence first:
//!
//! 1. `~/.gunghap/config.toml`
//! 2. `GUNGHAP_*` environment variables
//! 3. Command-line flags (applied by the binary)
//!
//! Values that fail to parse are logged and replaced by defaults; a broken config file
//! never prevents a computation.

use std::{
    env, fmt, fs, io,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;

use gunghap_types::{DecompositionKind, MIN_NAME_LENGTH, NameRules};

pub const ENV_FORMAT: &str = "GUNGHAP_FORMAT";
pub const ENV_REVEAL_DELAY_MS: &str = "GUNGHAP_REVEAL_DELAY_MS";
pub const ENV_DECOMPOSITION: &str = "GUNGHAP_DECOMPOSITION";

#[derive(Debug, Default, Deserialize)]
pub struct GunghapConfig {
    pub rules: Option<RulesConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RulesConfig {
    pub min_name_length: Option<usize>,
    pub max_name_diff: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DisplayConfig {
    /// `"text"` or `"json"`. `${VAR}` references are expanded.
    pub format: Option<String>,
    /// Pause between printed reduction rows.
    pub reveal_delay_ms: Option<u64>,
    /// `"split"` or `"compound"`. `${VAR}` references are expanded.
    pub decomposition: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path.as_path(),
        }
    }
}

/// How a result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format {0:?} (expected \"text\" or \"json\")")]
pub struct ParseFormatError(pub String);

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved settings with every default applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub rules: NameRules,
    pub format: OutputFormat,
    pub reveal_delay: Duration,
    pub decomposition: DecompositionKind,
}

/// Replace `${VAR}` with the value of environment variable `VAR` (empty if unset).
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(end_rel) = rest[start + 2..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let var = &rest[start + 2..start + 2 + end_rel];
        if var.is_empty() {
            out.push_str("${}");
        } else {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &rest[start + 2 + end_rel + 1..];
    }

    out.push_str(rest);
    out
}

/// Parse `raw`, logging and discarding it on failure so the next layer applies.
fn parse_logged<T>(source: &str, raw: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw.parse() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("Ignoring {source}: {err}");
            None
        }
    }
}

impl GunghapConfig {
    /// Load from the default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from `path`. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve against the process environment.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings_with_env(|key| env::var(key).ok())
    }

    /// Resolve, reading environment overrides through `lookup`.
    #[must_use]
    pub fn settings_with_env(&self, lookup: impl Fn(&str) -> Option<String>) -> Settings {
        let rules = self.rules.as_ref().map_or_else(NameRules::default, resolve_rules);
        let display = self.display.as_ref();

        let format = lookup(ENV_FORMAT)
            .and_then(|raw| parse_logged(ENV_FORMAT, &raw))
            .or_else(|| {
                display
                    .and_then(|d| d.format.as_deref())
                    .and_then(|raw| parse_logged("display.format", &expand_env_vars(raw)))
            })
            .unwrap_or_default();

        let decomposition = lookup(ENV_DECOMPOSITION)
            .and_then(|raw| parse_logged(ENV_DECOMPOSITION, &raw))
            .or_else(|| {
                display
                    .and_then(|d| d.decomposition.as_deref())
                    .and_then(|raw| parse_logged("display.decomposition", &expand_env_vars(raw)))
            })
            .unwrap_or_default();

        let delay_ms = lookup(ENV_REVEAL_DELAY_MS)
            .and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(ms) => Some(ms),
                Err(err) => {
                    tracing::warn!("Ignoring {ENV_REVEAL_DELAY_MS}={raw:?}: {err}");
                    None
                }
            })
            .or_else(|| display.and_then(|d| d.reveal_delay_ms))
            .unwrap_or(0);

        Settings {
            rules,
            format,
            reveal_delay: Duration::from_millis(delay_ms),
            decomposition,
        }
    }
}

fn resolve_rules(raw: &RulesConfig) -> NameRules {
    let defaults = NameRules::default();

    let min_length = match raw.min_name_length {
        Some(len) if len < MIN_NAME_LENGTH => {
            tracing::warn!(
                "Ignoring rules.min_name_length = {len}; names need at least {MIN_NAME_LENGTH} characters"
            );
            defaults.min_length
        }
        Some(len) => len,
        None => defaults.min_length,
    };

    let max_diff = match raw.max_name_diff {
        Some(0) => {
            tracing::warn!("Ignoring rules.max_name_diff = 0; it would reject every pair");
            defaults.max_diff
        }
        Some(diff) => diff,
        None => defaults.max_diff,
    };

    NameRules {
        min_length,
        max_diff,
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".gunghap").join("config.toml"))
}
