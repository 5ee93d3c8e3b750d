//! Diagnostics for the `jirafmt` binary.
//!
//! Report rows go to stdout and are usually piped into other tools, so
//! diagnostics never share that stream. They are written to
//! `<local data dir>/jirafmt/logs/jirafmt.log.<date>` instead.
//!
//! What gets logged:
//! - `info`: how many issues a report covered
//! - `warn`: custom fields that could not be decoded (issue key, field ID, cause)
//! - `debug`: settings file resolution, each redacted comment ID
//! - `trace`: each custom-field lookup

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Filter used when neither `--log-level` nor `RUST_LOG` is given.
const DEFAULT_LOG_FILTER: &str = "jirafmt=info,warn";

/// Install the global subscriber.
///
/// `directives` comes from `--log-level` and takes precedence over
/// `RUST_LOG`.
pub fn init(directives: Option<&str>) -> anyhow::Result<()> {
    let filter = build_filter(directives)?;

    let log_dir = log_directory()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;
    let writer = RollingFileAppender::new(Rotation::DAILY, &log_dir, "jirafmt.log");

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
                .with_line_number(true),
        )
        .try_init()?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Logging to {}", log_dir.display());
    Ok(())
}

/// Resolve the level filter: explicit directives, then `RUST_LOG`, then the default.
fn build_filter(directives: Option<&str>) -> anyhow::Result<EnvFilter> {
    match directives {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log level '{}'", directives)),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))),
    }
}

fn log_directory() -> anyhow::Result<PathBuf> {
    let base_dir =
        dirs::data_local_dir().context("could not determine local data directory for logs")?;
    Ok(base_dir.join("jirafmt").join("logs"))
}
