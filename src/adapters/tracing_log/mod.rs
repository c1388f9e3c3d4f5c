// Tracing log adapter - Structured logging using tracing crate

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::domain::errors::*;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(DomainError::Config(format!(
                "unknown log format '{}', expected pretty or json",
                other
            ))),
        }
    }
}

/// Tracing log adapter
pub struct TracingLogAdapter;

impl TracingLogAdapter {
    /// Build the filter: `RUST_LOG` wins over `default_level`
    pub fn filter(default_level: &str) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    }

    /// Install the global subscriber. Later calls are no-ops.
    pub fn init(default_level: &str, format: LogFormat) {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(Self::filter(default_level))
            .with_writer(std::io::stderr)
            .with_target(false);

        // Already-initialised is fine (tests, repeated CLI entry).
        let _ = match format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
    }
}
