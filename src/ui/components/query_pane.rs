use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::panel_block;
use crate::app::focused_pane::FocusedPane;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct QueryPane;

impl QueryPane {
    pub const HEIGHT: u16 = 3;

    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let editing = state.ui.input_mode == InputMode::QueryInput;
        let focused = editing || state.ui.focused_pane == FocusedPane::Query;
        let title = if editing { " [3] Query (editing) " } else { " [3] Query " };
        let block = panel_block(title.to_string(), focused);
        let inner = block.inner(area);

        let input = &state.query.input;
        let line = if input.is_empty() && !editing {
            Line::from(Span::styled(
                "Press i to write a query",
                Style::default().fg(Theme::TEXT_MUTED),
            ))
        } else {
            Line::from(Span::styled(
                input.clone(),
                Style::default().fg(Theme::TEXT_PRIMARY),
            ))
        };

        // Keep the tail of long input visible.
        let input_width = input.chars().count() as u16;
        let scroll = input_width.saturating_sub(inner.width.saturating_sub(1));
        frame.render_widget(Paragraph::new(line).block(block).scroll((0, scroll)), area);

        if editing && inner.width > 0 && inner.height > 0 {
            let x = inner.x + input_width.saturating_sub(scroll);
            frame.set_cursor_position(Position::new(x.min(inner.right() - 1), inner.y));
        }
    }
}
