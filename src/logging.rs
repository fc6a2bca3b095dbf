use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Names a log file; takes precedence over `log_file` in the config.
pub const LOG_ENV: &str = "TODO_TUI_LOG";

pub fn log_path(config: &Config) -> Option<PathBuf> {
    std::env::var_os(LOG_ENV)
        .map(PathBuf::from)
        .or_else(|| config.log_file.clone())
}

/// Logs go to a file since the terminal belongs to the UI. Without a
/// configured path nothing is installed.
pub fn init_tracing(config: &Config) {
    let Some(path) = log_path(config) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: failed to create log file {}: {}", path.display(), err);
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
