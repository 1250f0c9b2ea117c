use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use quickdo_app::TaskStore;
use quickdo_core::filter::Filter;

use super::super::view::Ui;

impl<S: TaskStore> Ui<S> {
    /// One-line three-way selector with per-filter task counts.
    pub(in crate::tui) fn filter_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (idx, filter) in Filter::ALL.into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::raw("  "));
            }
            let label = format!("{} ({})", filter_label(filter), self.app.tasks.count(filter));
            let style = if filter == self.app.filter() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(label, style));
        }
        Line::from(spans)
    }
}

/// Display label of a filter.
pub(in crate::tui) const fn filter_label(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "すべて",
        Filter::Active => "アクティブ",
        Filter::Completed => "完了済み",
    }
}
