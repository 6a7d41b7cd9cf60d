use crate::book::DEFAULT_UPCOMING_DAYS;
use crate::error::{BookError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Configuration for addrbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Where the address book is persisted; relative paths resolve against the working directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// How many days after today `birthdays` looks ahead
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u64,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_upcoming_days() -> u64 {
    DEFAULT_UPCOMING_DAYS
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            upcoming_days: default_upcoming_days(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let config: BookConfig = serde_json::from_str(&content).map_err(|e| {
            BookError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// The data file, anchored at `cwd` when relative.
    pub fn data_path(&self, cwd: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            cwd.join(&self.data_file)
        }
    }
}
