use std::{
    fs::{self, OpenOptions},
    path::Path,
    sync::Mutex,
};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_NAME: &str = "rps.log";

/// Installs the global tracing subscriber.
///
/// Logs go to a file so that they never interleave with the TUI. When no log
/// file can be opened the subscriber is installed without an output layer.
pub fn init(log_file: Option<&Path>) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let path = log_file
        .map(Path::to_path_buf)
        .or_else(|| crate::util::data_dir().ok().map(|dir| dir.join(LOG_FILE_NAME)));

    let (file, warning) = match path.as_deref().map(open_log_file) {
        Some(Ok(file)) => (Some(file), None),
        Some(Err(warning)) => (None, Some(warning)),
        None => (None, None),
    };

    if let (Some(file), Some(path)) = (file, path) {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!(path = %path.display(), "logging initialized");
        return;
    }

    tracing_subscriber::registry().with(env_filter).init();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
}

fn open_log_file(path: &Path) -> Result<fs::File, String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create log dir {}: {e}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("failed to open log file {}: {e}", path.display()))
}
