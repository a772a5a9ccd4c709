//! Tracing subscriber setup.

use anyhow::{Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use donor_core::config::LoggingSettings;
use donor_infrastructure::DonorPaths;

const LOG_FILE_PREFIX: &str = "donor-shell.log";

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `settings.level`. Console output goes to stderr so it
/// does not interleave with rendered screens on stdout. The returned guard
/// flushes the file logger and must be held until exit.
pub fn init(settings: &LoggingSettings) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| anyhow!("Invalid log level '{}': {}", settings.level, e))?;

    let (file_layer, guard) = if settings.file {
        let logs_dir = DonorPaths::logs_dir()?;
        std::fs::create_dir_all(&logs_dir)?;
        let appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(guard)
}
