use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use super::molecules::hint_line;
use super::status_message::{MessageType, StatusMessage};
use crate::app::focused_pane::FocusedPane;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        if let Some(error) = &state.messages.last_error {
            let line = StatusMessage::render_line(error, MessageType::Error);
            frame.render_widget(Paragraph::new(line), area);
            return;
        }

        let mut line = hint_line(Self::hints(state));
        if let Some(success) = &state.messages.last_success {
            line.spans.push(Span::raw("  "));
            line.spans
                .extend(StatusMessage::render_line(success, MessageType::Success).spans);
        }
        frame.render_widget(Paragraph::new(line), area);
    }

    fn hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
        if state.ui.input_mode == InputMode::QueryInput {
            return &[("Enter", "Run"), ("Esc", "Back")];
        }
        match state.ui.focused_pane {
            FocusedPane::Databases => &[
                ("q", "Quit"),
                ("Tab", "Pane"),
                ("j/k", "Move"),
                ("Enter", "Select"),
                ("c", "Collapse"),
                ("r", "Reload"),
                ("i", "Query"),
            ],
            FocusedPane::Tables => &[
                ("q", "Quit"),
                ("Tab", "Pane"),
                ("j/k", "Move"),
                ("Enter", "Columns"),
                ("i", "Query"),
            ],
            FocusedPane::Query => &[
                ("q", "Quit"),
                ("Tab", "Pane"),
                ("i", "Edit"),
                ("j/k", "Scroll"),
                ("x", "Cancel"),
            ],
        }
    }
}
