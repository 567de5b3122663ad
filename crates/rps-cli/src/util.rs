use std::path::PathBuf;

use anyhow::Context as _;

const APP_DIR_NAME: &str = "rps";

/// Directory holding the score store and the log file.
pub fn data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir().context("failed to locate the local data directory")?;
    Ok(base.join(APP_DIR_NAME))
}
