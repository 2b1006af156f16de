//! Logging configuration.
//!
//! Read from the process environment:
//!
//! - `RUST_LOG`: `EnvFilter` directives (default `info`)
//! - `COSTEXPLORER_LOG_FORMAT`: `json` (default), `pretty` or `compact`

/// Environment variable holding filter directives.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "COSTEXPLORER_LOG_FORMAT";

pub const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event, with timestamps.
    #[default]
    Json,
    /// Multi-line, human-oriented output.
    Pretty,
    /// Single-line, human-oriented output.
    Compact,
}

impl LogFormat {
    /// Case-insensitive; `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or blank values keep their
    /// defaults, as does an unrecognised format name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let filter = lookup(FILTER_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.filter);

        let format = lookup(LOG_FORMAT_ENV)
            .as_deref()
            .and_then(LogFormat::parse)
            .unwrap_or(defaults.format);

        Self { filter, format }
    }
}
