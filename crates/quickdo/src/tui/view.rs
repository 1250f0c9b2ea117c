use std::time::{Duration, Instant};

use quickdo_app::{Notification, NotificationKind, TaskStore};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
};

use super::app::App;
use super::constants::UI_MESSAGE_TTL_SECS;
use crate::config::KeyBindingsConfig;

/// Focus state: browsing the list or typing a new task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    /// Browsing the task list.
    TaskList,
    /// Typing into the new-task field.
    Input,
}

/// Text typed into the new-task field so far.
#[derive(Debug, Clone, Default)]
pub(super) struct InputState {
    pub(super) buffer: String,
}

impl InputState {
    pub(super) fn push(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    pub(super) fn pop(&mut self) {
        self.buffer.pop();
    }

    pub(super) fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    pub(super) fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

pub(super) struct Ui<S: TaskStore> {
    pub(super) app: App<S>,
    pub(super) focus: Focus,
    pub(super) input: InputState,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
    /// Keybindings configuration.
    pub(super) keybindings: KeyBindingsConfig,
}

impl<S: TaskStore> Ui<S> {
    pub(super) const INPUT_HEIGHT: u16 = 3;
    pub(super) const MAIN_MIN_HEIGHT: u16 = 5;
    pub(super) const INSTRUCTIONS_HEIGHT: u16 = 3;
    pub(super) const FILTER_HEIGHT: u16 = 3;
    pub(super) const STATUS_MESSAGE_MIN_HEIGHT: u16 = 3;
    pub(super) const STATUS_FOOTER_MIN_HEIGHT: u16 =
        Self::INSTRUCTIONS_HEIGHT + Self::FILTER_HEIGHT + Self::STATUS_MESSAGE_MIN_HEIGHT;

    pub(super) const fn new(app: App<S>, keybindings: KeyBindingsConfig) -> Self {
        Self {
            app,
            focus: Focus::TaskList,
            input: InputState {
                buffer: String::new(),
            },
            message: None,
            should_quit: false,
            keybindings,
        }
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let size = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::INPUT_HEIGHT),
                Constraint::Min(Self::MAIN_MIN_HEIGHT),
                Constraint::Length(Self::STATUS_FOOTER_MIN_HEIGHT),
            ])
            .split(size);

        self.draw_input_field(f, chunks[0]);
        self.draw_task_list(f, chunks[1]);
        self.draw_status(f, chunks[2]);
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
    }

    /// Render a service notification as a transient status message.
    pub(super) fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => self.info(notification.message),
            NotificationKind::Error => self.error(notification.message),
        }
    }

    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(UI_MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }
}

pub(super) struct Message {
    pub(super) text: String,
    pub(super) level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MessageLevel {
    Info,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
            created_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
            created_at: Instant::now(),
        }
    }

    pub(super) fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
