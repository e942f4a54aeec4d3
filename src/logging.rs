//! File-based logging setup
//!
//! The presenter layer runs inside UI applications that usually own the
//! terminal or have no console at all, so logs go to a file.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Resolve the log filter: `RUST_LOG` if set and valid, the configured
/// default otherwise
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.default_filter))
}

/// Initialize the global subscriber.
///
/// Logs are written to `<directory>/<file_prefix>.YYYY-MM-DD` with daily
/// rotation. Keep the returned guard alive for as long as logs should be
/// flushed; dropping it stops the background writer.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
    if !config.directory.exists() {
        std::fs::create_dir_all(&config.directory)?;
    }

    let file_appender =
        RollingFileAppender::new(Rotation::DAILY, &config.directory, &config.file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("Logging initialized - logs written to {}/", config.directory.display());

    Ok(guard)
}
