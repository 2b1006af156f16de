//! Tracing and logging setup shared by binaries and tests that use the model crates.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&config::TracingConfig::from_env());
}

/// Logging configuration (filter, output format).
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{LogFormat, TracingConfig};
