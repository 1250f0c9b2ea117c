//! JSON-file storage implementation for quickdo.

use quickdo_core::TaskList;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Error types for store operations.
pub mod error;

pub use error::JsonStoreError;

/// Storage based on a single JSON snapshot file.
///
/// Every save rewrites the whole list; reads fail soft, treating an absent
/// or unparseable file as an empty list.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store over the snapshot file at `path`.
    ///
    /// The file is not touched until the first load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot.
    ///
    /// An absent file, or one that does not parse as the expected layout,
    /// yields an empty list.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read.
    pub fn load_tasks(&self) -> Result<TaskList, JsonStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No snapshot yet; starting empty");
                return Ok(TaskList::new());
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&contents) {
            Ok(list) => Ok(list),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "Ignoring malformed snapshot");
                Ok(TaskList::new())
            }
        }
    }

    /// Overwrite the snapshot with `list` in full.
    ///
    /// # Errors
    /// Returns an error when the parent directory cannot be created, the
    /// list cannot be serialized, or the write fails.
    pub fn save_tasks(&self, list: &TaskList) -> Result<(), JsonStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let body = serde_json::to_string_pretty(list).map_err(JsonStoreError::Serialize)?;
        fs::write(&self.path, body)?;
        info!(path = %self.path.display(), tasks = list.len(), "Wrote snapshot");
        Ok(())
    }
}
