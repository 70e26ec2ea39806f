//! Logging setup for plank.
//!
//! Log lines go to the console; when a log file is configured a second,
//! ANSI-free layer appends there as well. A `RUST_LOG` environment variable
//! takes precedence over the configured level.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::Result;

fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level))
}

/// Initialize logging from configuration.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let console = tracing_subscriber::fmt::layer().with_target(true);

    let file_layer = match &config.file {
        Some(file) => {
            let path = Path::new(file);
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let log_file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Arc::new(log_file))
                    .with_ansi(false)
                    .with_target(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(build_filter(&config.level))
        .with(console)
        .with(file_layer)
        .init();

    Ok(())
}

/// Console-only logging, used when file setup fails and in development.
pub fn init_console_only(level: &str) {
    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_passthrough() {
        assert_eq!(level_filter("debug").to_string(), "debug");
        assert_eq!(level_filter("warn").to_string(), "warn");
    }

    #[test]
    fn test_level_filter_directive_syntax() {
        let filter = level_filter("info,plank=trace");
        let rendered = filter.to_string();
        assert!(rendered.contains("plank=trace"));
    }

    #[test]
    fn test_level_filter_garbage_falls_back() {
        assert_eq!(level_filter("!!not a directive!!").to_string(), "info");
    }
}
