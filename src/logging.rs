//! Log setup for the binary
//!
//! Logs go to a file in the data directory so stdout carries only the report.

use std::path::Path;

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding filter directives
pub const LOG_ENV_VAR: &str = "VERSION_STATUS_LOG";

pub fn make_env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_env_var(LOG_ENV_VAR)
        .with_default_directive(level.into())
        .from_env_lossy()
        .add_directive("hyper_util=off".parse().expect("static directive"))
        .add_directive("reqwest=warn".parse().expect("static directive"))
}

/// Installs the global subscriber writing to `log_path`.
///
/// The returned guard flushes buffered lines when dropped and must be held
/// until the process exits.
pub fn init_logging(log_path: &Path) -> anyhow::Result<WorkerGuard> {
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = log_path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log path {:?} has no file name", log_path))?;

    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let output = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(make_env_filter(LevelFilter::INFO))
        .with(output)
        .try_init()?;

    Ok(guard)
}
