use crate::id::TaskId;
use serde::{Deserialize, Serialize};

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier, unique within the owning list.
    pub id: TaskId,
    /// Trimmed, non-empty description.
    pub text: String,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a fresh, uncompleted task.
    #[must_use]
    pub const fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Copy of this task with the completion flag inverted.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_uncompleted() {
        let task = Task::new(TaskId(1), "Buy milk".into());
        assert!(!task.completed);
        assert_eq!(task.text, "Buy milk");
    }

    #[test]
    fn toggled_inverts_only_the_flag() {
        let task = Task::new(TaskId(1), "Buy milk".into());
        let done = task.toggled();
        assert!(done.completed);
        assert_eq!(done.id, task.id);
        assert_eq!(done.text, task.text);
        assert_eq!(done.toggled(), task);
    }

    #[test]
    fn completed_field_defaults_to_false_when_absent() {
        let task: Task = serde_json::from_str(r#"{"id":3,"text":"Water plants"}"#)
            .expect("must deserialize task without completed field");
        assert!(!task.completed);
    }
}
