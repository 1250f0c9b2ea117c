use anyhow::Result;
use quickdo_app::{Mutation, Notification, TaskService, TaskStore};
use quickdo_core::TaskList;
use quickdo_core::filter::Filter;
use quickdo_core::id::TaskId;
use quickdo_core::task::Task;

/// Application state shared between the TUI event loop and rendering.
pub(super) struct App<S: TaskStore> {
    service: TaskService<S>,
    /// Current snapshot. フィルタ適用前の全体集合。
    pub tasks: TaskList,
    /// 表示対象タスクのインデックス（`tasks` への参照）。
    visible: Vec<usize>,
    /// 現在の選択位置（`visible` のインデックス）。
    pub selected: usize,
    filter: Filter,
}

impl<S: TaskStore> App<S> {
    /// Create an application instance and eagerly load the snapshot.
    pub(super) fn new(service: TaskService<S>) -> Result<Self> {
        let mut app = Self {
            service,
            tasks: TaskList::new(),
            visible: Vec::new(),
            selected: 0,
            filter: Filter::default(),
        };
        app.refresh()?;
        Ok(app)
    }

    pub(super) const fn filter(&self) -> Filter {
        self.filter
    }

    /// Switch the visibility filter, keeping the selection on the same task
    /// when it stays visible.
    pub(super) fn set_filter(&mut self, filter: Filter) {
        if self.filter == filter {
            return;
        }
        let keep_id = self.selected_task_id();
        self.filter = filter;
        self.rebuild_visibility();
        self.selected = self.resolve_selection(keep_id);
    }

    pub(super) const fn has_visible_tasks(&self) -> bool {
        !self.visible.is_empty()
    }

    pub(super) fn visible_tasks(&self) -> impl Iterator<Item = &Task> {
        self.visible
            .iter()
            .filter_map(|&idx| self.tasks.as_slice().get(idx))
    }

    /// Reload the snapshot from the store and keep the selection in bounds.
    pub(super) fn refresh(&mut self) -> Result<()> {
        let keep_id = self.selected_task_id();
        self.tasks = self.service.load()?;
        self.rebuild_visibility();
        self.selected = self.resolve_selection(keep_id);
        Ok(())
    }

    /// Append a task built from `raw`; a blank input is a complete no-op.
    pub(super) fn add_task(&mut self, raw: &str) -> Result<Option<Notification>> {
        let mutation = self.service.add(raw, &self.tasks)?;
        Ok(self.apply(mutation))
    }

    /// Invert the completion flag of the selected task.
    pub(super) fn toggle_selected(&mut self) -> Result<Option<Notification>> {
        let Some(id) = self.selected_task_id() else {
            return Ok(None);
        };
        let mutation = self.service.toggle(id, &self.tasks)?;
        Ok(self.apply(mutation))
    }

    /// Delete the selected task.
    pub(super) fn delete_selected(&mut self) -> Result<Option<Notification>> {
        let Some(id) = self.selected_task_id() else {
            return Ok(None);
        };
        let mutation = self.service.delete(id, &self.tasks)?;
        Ok(self.apply(mutation))
    }

    /// Drop every completed task; a list without any is a complete no-op.
    pub(super) fn clear_completed(&mut self) -> Result<Option<Notification>> {
        let mutation = self.service.clear_completed(&self.tasks)?;
        Ok(self.apply(mutation))
    }

    /// Adopt a mutation result as the current snapshot.
    fn apply(&mut self, mutation: Mutation) -> Option<Notification> {
        let keep_id = self.selected_task_id();
        self.tasks = mutation.list;
        self.rebuild_visibility();
        self.selected = self.resolve_selection(keep_id);
        mutation.notification
    }

    fn resolve_selection(&self, preferred: Option<TaskId>) -> usize {
        if self.visible.is_empty() {
            return 0;
        }
        if let Some(id) = preferred
            && let Some(index) = self.visible_index_of(id)
        {
            return index;
        }
        self.selected.min(self.visible.len() - 1)
    }

    fn visible_index_of(&self, id: TaskId) -> Option<usize> {
        self.visible_tasks().position(|task| task.id == id)
    }

    fn rebuild_visibility(&mut self) {
        self.visible.clear();
        for (idx, task) in self.tasks.iter().enumerate() {
            if self.filter.matches(task) {
                self.visible.push(idx);
            }
        }
    }

    /// Selected task (if any).
    pub(super) fn selected_task(&self) -> Option<&Task> {
        self.visible
            .get(self.selected)
            .and_then(|&idx| self.tasks.as_slice().get(idx))
    }

    /// Identifier of the selected task (if any).
    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|task| task.id)
    }

    /// Move selection to the next task.
    pub(super) fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    /// Move selection to the previous task.
    pub(super) fn select_prev(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected > 0 {
            self.selected -= 1;
        }
    }
}
