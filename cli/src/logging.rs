//! # Structured Logging
//!
//! Installs the `tracing` subscriber for the shell. Output goes to stderr so
//! that stdout carries nothing but the operation's JSON result, which keeps
//! the binary pipeable (`aztec-privacy derive-keys | jq .viewingKey`).

use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines for an interactive terminal.
    Pretty,
    /// One JSON object per line, for log collectors.
    Json,
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides `default_level` when set, using `EnvFilter`
/// directive syntax:
///
/// ```text
/// RUST_LOG=aztec_privacy=debug,aztec_privacy_core=trace
/// ```
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(default_level: &str, format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(false),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr).with_target(true))
            .try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(?format, "logging initialized");
    }
}
