use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use quickdo_app::TaskStore;
use quickdo_core::filter::Filter;

use super::super::constants::{TASK_LIST_HIGHLIGHT_SYMBOL, TASK_TEXT_MAX_GRAPHEMES};
use super::super::view::{Focus, Ui};
use super::util::{completion_marker, truncate_with_ellipsis};

impl<S: TaskStore> Ui<S> {
    pub(in crate::tui) fn draw_task_list(&self, f: &mut Frame<'_>, area: Rect) {
        let items = if self.app.has_visible_tasks() {
            self.app
                .visible_tasks()
                .map(|task| {
                    let marker = Span::styled(
                        completion_marker(task.completed),
                        Style::default().fg(Color::DarkGray),
                    );
                    let text = truncate_with_ellipsis(&task.text, TASK_TEXT_MAX_GRAPHEMES).into_owned();
                    let text = if task.completed {
                        Span::styled(
                            text,
                            Style::default()
                                .fg(Color::DarkGray)
                                .add_modifier(Modifier::CROSSED_OUT),
                        )
                    } else {
                        Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
                    };
                    ListItem::new(Line::from(vec![marker, text]))
                })
                .collect()
        } else {
            vec![ListItem::new(Line::from(empty_message(self.app.filter())))]
        };

        let list = List::new(items)
            .block(Block::default().title("タスクリスト").borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(TASK_LIST_HIGHLIGHT_SYMBOL);
        let mut state = ListState::default();
        if self.app.has_visible_tasks() && self.focus == Focus::TaskList {
            state.select(Some(self.app.selected));
        }
        f.render_stateful_widget(list, area, &mut state);
    }
}

/// Empty-state message naming the active filter.
pub(in crate::tui) const fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "タスクがありません",
        Filter::Active => "アクティブなタスクがありません",
        Filter::Completed => "完了済みのタスクがありません",
    }
}
