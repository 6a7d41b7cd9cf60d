use crate::api::BookApi;
use crate::config::BookConfig;
use crate::error::{BookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the OS config directory, mainly for tests.
pub const CONFIG_DIR_ENV: &str = "ADDRBOOK_CONFIG_DIR";

pub struct BookContext {
    pub api: BookApi<FileStore>,
}

/// Determine the config directory:
/// 1. `ADDRBOOK_CONFIG_DIR` if set
/// 2. Otherwise the OS config directory via the directories crate
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BookError::Config("Could not determine config dir".to_string()))
}

/// Loads config and the stored book.
///
/// `data_override` (the `--file` flag) wins over the configured data file.
/// Relative paths resolve against `cwd`.
pub fn initialize(
    cwd: &Path,
    config_dir: &Path,
    data_override: Option<PathBuf>,
) -> Result<BookContext> {
    let mut config = BookConfig::load(config_dir)?;
    if let Some(path) = data_override {
        config.data_file = path;
    }

    let data_path = config.data_path(cwd);
    debug!(config_dir = %config_dir.display(), data = %data_path.display(), "initializing");

    let api = BookApi::open(FileStore::new(data_path))?.with_upcoming_days(config.upcoming_days);
    Ok(BookContext { api })
}
