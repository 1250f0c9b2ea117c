//! Storage abstraction for the persisted task snapshot.

use anyhow::Error;
use quickdo_core::TaskList;
use quickdo_store_json::JsonStore;

/// Minimal storage abstraction required by
/// [`TaskService`](crate::service::TaskService).
pub trait TaskStore {
    /// Error type bubbled up from the backing store.
    type Error: Into<Error>;

    /// Read the persisted snapshot.
    ///
    /// Implementations fail soft on an absent or malformed snapshot and
    /// return an empty list; only genuine I/O failures surface as errors.
    ///
    /// # Errors
    /// Returns a store-specific error when the snapshot cannot be read.
    fn load(&self) -> Result<TaskList, Self::Error>;

    /// Overwrite the persisted snapshot with `list` in full.
    ///
    /// # Errors
    /// Returns a store-specific error when persisting the snapshot fails.
    fn save(&self, list: &TaskList) -> Result<(), Self::Error>;
}

impl TaskStore for JsonStore {
    type Error = quickdo_store_json::JsonStoreError;

    fn load(&self) -> Result<TaskList, Self::Error> {
        self.load_tasks()
    }

    fn save(&self, list: &TaskList) -> Result<(), Self::Error> {
        self.save_tasks(list)
    }
}
