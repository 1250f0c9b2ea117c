use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use quickdo_app::TaskStore;

use super::super::view::{Focus, Ui};
use crate::config::keybindings::{Action, ViewType};

impl<S: TaskStore> Ui<S> {
    pub(in crate::tui) fn handle_input_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.keybindings.matches(ViewType::Input, Action::Submit, &key) {
            let raw = self.input.take();
            self.focus = Focus::TaskList;
            if let Some(notification) = self.app.add_task(&raw)? {
                self.notify(notification);
            }
            return Ok(());
        }

        if self.keybindings.matches(ViewType::Input, Action::Cancel, &key) {
            self.input.take();
            self.focus = Focus::TaskList;
            return Ok(());
        }

        match key.code {
            KeyCode::Backspace => self.input.pop(),
            KeyCode::Char(ch) => self.input.push(ch),
            _ => {}
        }

        Ok(())
    }
}
