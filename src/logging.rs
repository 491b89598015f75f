//! Logging configuration and initialization for embedstub.
//!
//! Stderr-only tracing setup, sized for a library that runs inside test
//! binaries.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging subsystem based on configuration.
///
/// The `RUST_LOG` environment variable overrides the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| parse_level(&config.level));

    let registry = tracing_subscriber::registry();

    if config.stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);

        registry
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .context("Failed to initialize logging subscriber")?;
    } else {
        registry
            .with(filter)
            .try_init()
            .context("Failed to initialize logging subscriber")?;
    }

    Ok(())
}

/// Initialize logging for test binaries; repeated calls are no-ops.
pub fn init_test_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("embedstub=debug")),
        )
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn parse_level(level: &str) -> EnvFilter {
    let level_lower = level.to_lowercase();
    let level_str = match level_lower.as_str() {
        "trace" => "embedstub=trace",
        "debug" => "embedstub=debug",
        "info" => "embedstub=info",
        "warn" => "embedstub=warn",
        "error" => "embedstub=error",
        _ => {
            eprintln!(
                "Warning: Unknown log level '{}', defaulting to 'info'",
                level
            );
            "embedstub=info"
        }
    };
    EnvFilter::new(level_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        let filter = parse_level("debug");
        assert!(filter.to_string().contains("debug"));

        let filter = parse_level("TRACE");
        assert!(filter.to_string().contains("trace"));

        // Invalid level should default to info
        let filter = parse_level("invalid");
        assert!(filter.to_string().contains("info"));
    }

    #[test]
    fn test_repeated_test_init_is_harmless() {
        init_test_logging();
        init_test_logging();
    }
}
