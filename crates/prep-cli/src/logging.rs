//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! All diagnostics go to stderr so stdout stays clean for tables and
//! JSON output. `RUST_LOG` overrides the defaults when no explicit
//! verbosity flag is given.

use std::io::{self, IsTerminal};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter from the CLI verbosity flags.
    pub level_filter: LevelFilter,
    /// Respect `RUST_LOG` when no explicit verbosity was given.
    pub use_env_filter: bool,
    /// Output format.
    pub format: LogFormat,
    /// Use ANSI colors.
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            format: LogFormat::default(),
            with_ansi: io::stderr().is_terminal(),
        }
    }
}

/// Initialize the global tracing subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) {
    let filter = if config.use_env_filter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level_filter.to_string()))
    } else {
        EnvFilter::new(config.level_filter.to_string())
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => {
            registry
                .with(fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        LogFormat::Compact => {
            registry
                .with(
                    fmt::layer()
                        .compact()
                        .without_time()
                        .with_target(false)
                        .with_ansi(config.with_ansi)
                        .with_writer(io::stderr),
                )
                .init();
        }
        LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .without_time()
                        .with_target(false)
                        .with_ansi(config.with_ansi)
                        .with_writer(io::stderr),
                )
                .init();
        }
    }
}
