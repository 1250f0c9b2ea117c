use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use quickdo_app::TaskStore;

use super::super::constants::INPUT_PLACEHOLDER;
use super::super::view::{Focus, Ui};

impl<S: TaskStore> Ui<S> {
    pub(in crate::tui) fn draw_input_field(&self, f: &mut Frame<'_>, area: Rect) {
        let focused = self.focus == Focus::Input;

        let mut spans = Vec::new();
        if self.input.is_empty() {
            spans.push(Span::styled(
                INPUT_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(self.input.buffer.clone()));
        }
        if focused {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let field = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title("新規タスク")
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(field, area);
    }
}
