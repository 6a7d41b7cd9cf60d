use super::BookStore;
use crate::book::AddressBook;
use crate::error::{BookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

pub const FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    FORMAT_VERSION
}

#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    contacts: AddressBook,
}

/// Stores the book as a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BookError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "addressbook".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file, starting empty");
            return Ok(AddressBook::new());
        }

        let content = fs::read_to_string(&self.path).map_err(BookError::Io)?;
        let file: BookFile = serde_json::from_str(&content).map_err(BookError::Serialization)?;
        if file.version > FORMAT_VERSION {
            return Err(BookError::Config(format!(
                "{} was written by a newer version (format {}, supported {})",
                self.path.display(),
                file.version,
                FORMAT_VERSION
            )));
        }

        info!(path = %self.path.display(), contacts = file.contacts.len(), "loaded address book");
        Ok(file.contacts)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;

        let file = BookFile {
            version: FORMAT_VERSION,
            contacts: book.clone(),
        };
        let content = serde_json::to_string_pretty(&file).map_err(BookError::Serialization)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        if let Err(e) = fs::write(&tmp_path, content)
            .and_then(|()| fs::rename(&tmp_path, &self.path))
        {
            let _ = fs::remove_file(&tmp_path);
            return Err(BookError::Io(e));
        }

        info!(path = %self.path.display(), contacts = book.len(), "saved address book");
        Ok(())
    }
}
