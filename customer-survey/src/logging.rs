use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE: &str = "customer-survey.log";

/// Build the level filter. `RUST_LOG` wins over the verbosity flag.
fn env_filter(verbose: bool) -> anyhow::Result<EnvFilter> {
    let default_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("failed to create log filter")
}

/// Route logs to a daily rolling file under `log_dir`.
///
/// The terminal belongs to the kiosk UI, so nothing is written to stdout.
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init_logging(log_dir: &Path, verbose: bool) -> anyhow::Result<WorkerGuard> {
    let env_filter = env_filter(verbose)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE)
        .build(log_dir)
        .with_context(|| format!("failed to open log directory {}", log_dir.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_builds_for_both_levels() {
        assert!(env_filter(false).is_ok());
        assert!(env_filter(true).is_ok());
    }

    #[test]
    fn unusable_log_dir_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let log_dir = file.path().join("logs");

        let err = init_logging(&log_dir, false).unwrap_err();
        assert!(err.to_string().contains("failed to open log directory"));
    }
}
