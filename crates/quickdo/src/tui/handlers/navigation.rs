use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};
use quickdo_app::TaskStore;
use quickdo_core::filter::Filter;

use super::super::view::{Focus, Ui};
use crate::config::keybindings::{Action, ViewType};

impl<S: TaskStore> Ui<S> {
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match self.focus {
            Focus::TaskList => self.handle_task_list_key(key),
            Focus::Input => self.handle_input_key(key),
        }
    }

    fn handle_task_list_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.keybindings.matches(ViewType::TaskList, Action::Quit, &key) {
            self.should_quit = true;
            return Ok(());
        }

        if self.keybindings.matches(ViewType::TaskList, Action::Down, &key) {
            self.app.select_next();
            return Ok(());
        }

        if self.keybindings.matches(ViewType::TaskList, Action::Up, &key) {
            self.app.select_prev();
            return Ok(());
        }

        if self
            .keybindings
            .matches(ViewType::TaskList, Action::CreateTask, &key)
        {
            self.focus = Focus::Input;
            return Ok(());
        }

        if self.keybindings.matches(ViewType::TaskList, Action::Toggle, &key) {
            if let Some(notification) = self.app.toggle_selected()? {
                self.notify(notification);
            }
            return Ok(());
        }

        if self.keybindings.matches(ViewType::TaskList, Action::Delete, &key) {
            if let Some(notification) = self.app.delete_selected()? {
                self.notify(notification);
            }
            return Ok(());
        }

        if self
            .keybindings
            .matches(ViewType::TaskList, Action::ClearCompleted, &key)
        {
            // The action is only offered while a completed task exists.
            if self.app.tasks.has_completed()
                && let Some(notification) = self.app.clear_completed()?
            {
                self.notify(notification);
            }
            return Ok(());
        }

        if self
            .keybindings
            .matches(ViewType::TaskList, Action::FilterAll, &key)
        {
            self.app.set_filter(Filter::All);
            return Ok(());
        }

        if self
            .keybindings
            .matches(ViewType::TaskList, Action::FilterActive, &key)
        {
            self.app.set_filter(Filter::Active);
            return Ok(());
        }

        if self
            .keybindings
            .matches(ViewType::TaskList, Action::FilterCompleted, &key)
        {
            self.app.set_filter(Filter::Completed);
            return Ok(());
        }

        if self
            .keybindings
            .matches(ViewType::TaskList, Action::CycleFilter, &key)
        {
            self.app.set_filter(self.app.filter().cycled());
            return Ok(());
        }

        if self.keybindings.matches(ViewType::TaskList, Action::Refresh, &key) {
            self.app.refresh()?;
            self.info("タスクを再読込しました");
            return Ok(());
        }

        Ok(())
    }
}
