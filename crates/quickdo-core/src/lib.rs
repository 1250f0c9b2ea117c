//! Domain types for the quickdo task list.

/// Visibility filter.
pub mod filter;
/// Identifier types.
pub mod id;
/// Task entity.
pub mod task;

use crate::filter::Filter;
use crate::id::TaskId;
use crate::task::Task;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use thiserror::Error;

/// Raised when task records share an identifier.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("duplicate task id: {0}")]
pub struct DuplicateTaskId(pub TaskId);

/// Insertion-ordered task collection.
///
/// The list is the single source of truth; the persisted snapshot and any
/// filtered view are derived from it. Invariant: no two tasks share an id.
/// Mutations are value-level, taking `&self` and returning a new list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Build a list from raw records, validating the id uniqueness invariant.
    ///
    /// # Errors
    /// Returns [`DuplicateTaskId`] when two records share an identifier.
    pub fn from_vec(tasks: Vec<Task>) -> Result<Self, DuplicateTaskId> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id) {
                return Err(DuplicateTaskId(task.id));
            }
        }
        Ok(Self { tasks })
    }

    /// Identifier for the next appended task.
    ///
    /// Monotonic counter over the live list: one past the largest id in use,
    /// [`TaskId::FIRST`] for an empty list.
    #[must_use]
    pub fn next_id(&self) -> TaskId {
        self.tasks
            .iter()
            .map(|task| task.id)
            .max()
            .map_or(TaskId::FIRST, TaskId::next)
    }

    /// New list with `task` appended.
    ///
    /// # Errors
    /// Returns [`DuplicateTaskId`] when the id is already present.
    pub fn appended(&self, task: Task) -> Result<Self, DuplicateTaskId> {
        if self.contains(task.id) {
            return Err(DuplicateTaskId(task.id));
        }
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        Ok(Self { tasks })
    }

    /// New list with the completion flag of `id` inverted.
    ///
    /// Identity when `id` is unknown; every other task is carried over
    /// unchanged in its original position.
    #[must_use]
    pub fn toggled(&self, id: TaskId) -> Self {
        let tasks = self
            .tasks
            .iter()
            .map(|task| if task.id == id { task.toggled() } else { task.clone() })
            .collect();
        Self { tasks }
    }

    /// New list without the task matching `id`; identity when `id` is unknown.
    #[must_use]
    pub fn without(&self, id: TaskId) -> Self {
        let tasks = self
            .tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect();
        Self { tasks }
    }

    /// New list keeping only uncompleted tasks.
    #[must_use]
    pub fn without_completed(&self) -> Self {
        let tasks = self
            .tasks
            .iter()
            .filter(|task| !task.completed)
            .cloned()
            .collect();
        Self { tasks }
    }

    /// Whether a task with `id` exists.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    /// Task matching `id`, if any.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Tasks as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks belonging to `filter`, in insertion order.
    pub fn visible(&self, filter: Filter) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| filter.matches(task))
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether at least one task is completed.
    #[must_use]
    pub fn has_completed(&self) -> bool {
        self.tasks.iter().any(|task| task.completed)
    }

    /// Number of tasks matching `filter`.
    #[must_use]
    pub fn count(&self, filter: Filter) -> usize {
        self.visible(filter).count()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// The snapshot layout is a bare JSON array of task records.
impl Serialize for TaskList {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.tasks.serialize(s)
    }
}

impl<'de> Deserialize<'de> for TaskList {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tasks = Vec::<Task>::deserialize(d)?;
        Self::from_vec(tasks).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn list_of(specs: &[(u64, bool)]) -> TaskList {
        let tasks = specs
            .iter()
            .enumerate()
            .map(|(idx, &(id, completed))| Task {
                id: TaskId(id),
                text: format!("task {idx}"),
                completed,
            })
            .collect();
        TaskList::from_vec(tasks).expect("test fixture ids must be unique")
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(TaskList::new().next_id(), TaskId(1));
    }

    #[test]
    fn next_id_is_one_past_the_maximum() {
        let list = list_of(&[(3, false), (1, false), (9, true)]);
        assert_eq!(list.next_id(), TaskId(10));
    }

    #[test]
    fn appended_ids_stay_unique_over_many_adds() {
        let mut list = TaskList::new();
        for n in 0..50 {
            let task = Task::new(list.next_id(), format!("task {n}"));
            list = list.appended(task).expect("fresh id must be unique");
        }

        let ids: BTreeSet<TaskId> = list.iter().map(|task| task.id).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn appended_rejects_duplicate_id() {
        let list = list_of(&[(1, false)]);
        let clash = Task::new(TaskId(1), "clash".into());
        assert_eq!(list.appended(clash), Err(DuplicateTaskId(TaskId(1))));
    }

    #[test]
    fn from_vec_rejects_duplicate_ids() {
        let tasks = vec![
            Task::new(TaskId(1), "a".into()),
            Task::new(TaskId(1), "b".into()),
        ];
        assert_eq!(TaskList::from_vec(tasks), Err(DuplicateTaskId(TaskId(1))));
    }

    #[test]
    fn toggled_twice_restores_the_original_list() {
        let list = list_of(&[(1, false), (2, true), (3, false)]);
        let once = list.toggled(TaskId(2));
        assert!(!once.get(TaskId(2)).is_some_and(|task| task.completed));
        assert_eq!(once.toggled(TaskId(2)), list);
    }

    #[test]
    fn toggled_with_unknown_id_is_identity() {
        let list = list_of(&[(1, false), (2, true)]);
        assert_eq!(list.toggled(TaskId(99)), list);
    }

    #[test]
    fn without_removes_only_the_match_and_keeps_order() {
        let list = list_of(&[(1, false), (2, true), (3, false)]);
        let removed = list.without(TaskId(2));
        let ids: Vec<TaskId> = removed.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![TaskId(1), TaskId(3)]);

        assert_eq!(list.without(TaskId(99)), list);
    }

    #[test]
    fn without_completed_keeps_active_tasks_in_order() {
        let list = list_of(&[(1, true), (2, false), (3, true), (4, false)]);
        let remaining = list.without_completed();
        let ids: Vec<TaskId> = remaining.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![TaskId(2), TaskId(4)]);
        assert!(!remaining.has_completed());
    }

    #[test]
    fn visible_partitions_the_list() {
        let list = list_of(&[(1, false), (2, true), (3, false), (4, true), (5, false)]);

        let all: BTreeSet<TaskId> = list.visible(Filter::All).map(|task| task.id).collect();
        let active: BTreeSet<TaskId> = list.visible(Filter::Active).map(|task| task.id).collect();
        let completed: BTreeSet<TaskId> =
            list.visible(Filter::Completed).map(|task| task.id).collect();

        assert!(active.is_disjoint(&completed));
        let union: BTreeSet<TaskId> = active.union(&completed).copied().collect();
        assert_eq!(union, all);
        assert_eq!(all.len(), list.len());
    }

    #[test]
    fn visible_preserves_insertion_order() {
        let list = list_of(&[(5, false), (2, false), (9, true), (1, false)]);
        let active: Vec<TaskId> = list.visible(Filter::Active).map(|task| task.id).collect();
        assert_eq!(active, vec![TaskId(5), TaskId(2), TaskId(1)]);
    }

    #[test]
    fn snapshot_roundtrip_preserves_ids_text_flags_and_order() {
        let list = list_of(&[(2, true), (7, false), (3, true)]);
        let json = serde_json::to_string(&list).expect("must serialize list");
        let back: TaskList = serde_json::from_str(&json).expect("must deserialize list");
        assert_eq!(back, list);
    }

    #[test]
    fn snapshot_layout_is_a_bare_array_of_records() {
        let list = list_of(&[(1, false)]);
        let json = serde_json::to_value(&list).expect("must serialize list");
        assert_eq!(
            json,
            serde_json::json!([{ "id": 1, "text": "task 0", "completed": false }])
        );
    }

    #[test]
    fn deserializing_duplicate_ids_fails() {
        let raw = r#"[{"id":1,"text":"a","completed":false},{"id":1,"text":"b","completed":true}]"#;
        assert!(serde_json::from_str::<TaskList>(raw).is_err());
    }
}
