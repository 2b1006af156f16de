//! Tracing/logging initialization.
//!
//! Installs a `tracing-subscriber` fmt subscriber with an `EnvFilter` and the
//! configured output format.

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_FILTER, LogFormat, TracingConfig};

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). An unparsable
/// filter falls back to the default and is reported once the subscriber is up.
pub fn init_with(config: &TracingConfig) {
    let (filter, filter_rejected) = match EnvFilter::try_new(&config.filter) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new(DEFAULT_FILTER), true),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    if installed.is_ok() && filter_rejected {
        ::tracing::warn!(filter = %config.filter, fallback = DEFAULT_FILTER, "invalid log filter");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = TracingConfig::default();
        init_with(&config);
        init_with(&config);
        ::tracing::info!("still logging after repeated init");
    }

    #[test]
    fn invalid_filter_does_not_panic() {
        let config = TracingConfig {
            filter: "=[not a filter".to_string(),
            format: LogFormat::Compact,
        };
        init_with(&config);
    }
}
