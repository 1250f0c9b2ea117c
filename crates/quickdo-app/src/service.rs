//! Mutation service implementing the task-list contract.

use anyhow::{Context, Result};
use quickdo_core::TaskList;
use quickdo_core::id::TaskId;
use quickdo_core::task::Task;

use crate::store::TaskStore;

/// Severity of a transient user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation worth celebrating.
    Success,
    /// Destructive or failed operation.
    Error,
}

/// Transient user-facing notification produced by a mutation.
///
/// The service only states what happened; the presentation layer decides
/// how (and whether) to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Styling hint for the presentation layer.
    pub kind: NotificationKind,
    /// Human-readable message.
    pub message: String,
}

impl Notification {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Result of a store mutation: the new snapshot plus an optional notification.
#[derive(Debug, Clone)]
pub struct Mutation {
    /// The new list value; callers adopt it as the current snapshot.
    pub list: TaskList,
    /// Notification for the presentation layer, if the operation carries one.
    pub notification: Option<Notification>,
}

impl Mutation {
    const fn silent(list: TaskList) -> Self {
        Self {
            list,
            notification: None,
        }
    }
}

/// Service facade that owns every task-list side effect.
///
/// Each operation takes the current snapshot, returns a new one, and writes
/// the persisted copy in full whenever the operation is not a no-op.
pub struct TaskService<S> {
    store: S,
}

impl<S> TaskService<S> {
    /// Construct a service over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Expose a reference to the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S: TaskStore> TaskService<S> {
    /// Read the persisted snapshot.
    ///
    /// Absent or malformed data comes back as an empty list from the store;
    /// only genuine I/O failures surface here.
    ///
    /// # Errors
    /// Returns an error when the store cannot be read.
    pub fn load(&self) -> Result<TaskList> {
        self.store
            .load()
            .map_err(Into::into)
            .context("failed to load task snapshot")
    }

    /// Append a task built from `raw_text`.
    ///
    /// The input is trimmed first; an empty result is a complete no-op:
    /// the same list comes back, nothing is written, nothing is announced.
    ///
    /// # Errors
    /// Returns an error when persisting the new snapshot fails.
    pub fn add(&self, raw_text: &str, current: &TaskList) -> Result<Mutation> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Ok(Mutation::silent(current.clone()));
        }

        let task = Task::new(current.next_id(), text.to_owned());
        let list = current
            .appended(task)
            .context("fresh id collided with an existing task")?;
        self.persist(&list)?;
        Ok(Mutation {
            list,
            notification: Some(Notification::success("Task added!")),
        })
    }

    /// Invert the completion flag of `id`.
    ///
    /// The snapshot is rewritten even when `id` is unknown, keeping every
    /// mutation path uniform. Toggling never notifies.
    ///
    /// # Errors
    /// Returns an error when persisting the new snapshot fails.
    pub fn toggle(&self, id: TaskId, current: &TaskList) -> Result<Mutation> {
        let list = current.toggled(id);
        self.persist(&list)?;
        Ok(Mutation::silent(list))
    }

    /// Remove the task matching `id`.
    ///
    /// The deleted notification fires whether or not the id existed; the
    /// data model itself treats an unknown id as a no-op.
    ///
    /// # Errors
    /// Returns an error when persisting the new snapshot fails.
    pub fn delete(&self, id: TaskId, current: &TaskList) -> Result<Mutation> {
        let list = current.without(id);
        self.persist(&list)?;
        Ok(Mutation {
            list,
            notification: Some(Notification::error("Task deleted")),
        })
    }

    /// Drop every completed task.
    ///
    /// When no task is completed this is a complete no-op: nothing is
    /// written, nothing is announced.
    ///
    /// # Errors
    /// Returns an error when persisting the new snapshot fails.
    pub fn clear_completed(&self, current: &TaskList) -> Result<Mutation> {
        let list = current.without_completed();
        if list.len() == current.len() {
            return Ok(Mutation::silent(list));
        }

        self.persist(&list)?;
        Ok(Mutation {
            list,
            notification: Some(Notification::success("Cleared completed tasks!")),
        })
    }

    fn persist(&self, list: &TaskList) -> Result<()> {
        self.store
            .save(list)
            .map_err(Into::into)
            .context("failed to write task snapshot")
    }
}
