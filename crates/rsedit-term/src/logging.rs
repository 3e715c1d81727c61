//! Log setup
//!
//! The terminal belongs to the editor while it runs, so logs only ever go to
//! a file: a daily-rotated `rsedit.log` in the data directory, or the path
//! given with `--log-file`.
//!
//! Filtering comes from the `RSEDIT_LOG` env var (e.g. `RSEDIT_LOG=rsedit_core=debug`),
//! falling back to the configured `log_level`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::paths;

pub const LOG_ENV: &str = "RSEDIT_LOG";

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn appender(log_file: Option<&Path>) -> Result<RollingFileAppender> {
    match log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            Ok(rolling::never(dir, name))
        }
        None => Ok(rolling::daily(paths::log_dir()?, "rsedit.log")),
    }
}

/// Install the global subscriber.
pub fn init(log_file: Option<&Path>, default_level: &str) -> Result<()> {
    let file_layer = fmt::layer()
        .with_writer(appender(log_file)?)
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter(default_level));

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")
}
