use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directory holding one log file per run
pub fn logs_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(anyhow::anyhow!("Could not find config directory"))?
        .join("esinais");

    Ok(config_dir.join("logs"))
}

/// `esinais-YYYY-MM-DD-HH-MM-SS.log`
pub fn log_file_name() -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    format!("esinais-{}.log", timestamp)
}

/// `RUST_LOG` when set, otherwise the configured level
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize tracing with file-based logging
/// Logs are written to ~/.config/esinais/logs/esinais-YYYY-MM-DD-HH-MM-SS.log
pub fn init_logging(default_level: &str) -> Result<PathBuf> {
    let logs_dir = logs_dir()?;
    init_logging_in(&logs_dir, default_level)
}

fn init_logging_in(logs_dir: &Path, default_level: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(logs_dir)?;

    let log_filename = log_file_name();
    let log_path = logs_dir.join(&log_filename);

    // Non-blocking so rendering never waits on disk
    let file_appender = tracing_appender::rolling::never(logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The terminal belongs to the TUI, so the file is the only sink
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(file_layer)
        .try_init()?;

    // Keep the guard alive for the lifetime of the program
    std::mem::forget(guard);

    Ok(log_path)
}
