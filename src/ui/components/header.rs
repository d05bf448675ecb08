use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::query_pane::QueryPhase;
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let database = state.databases.selected.as_deref().unwrap_or("-");
        let user = state.user.as_deref().unwrap_or("-");

        let (status_text, status_color) = match &state.query.phase {
            QueryPhase::Idle => ("idle", Theme::TEXT_MUTED),
            QueryPhase::Submitting | QueryPhase::Running(_) | QueryPhase::Fetching(_) => {
                ("running", Theme::TEXT_ACCENT)
            }
            QueryPhase::Done => ("done", Theme::STATUS_SUCCESS),
            QueryPhase::Failed(_) => ("failed", Theme::STATUS_ERROR),
        };

        let line = Line::from(vec![
            Span::styled(
                "lensql",
                Style::default()
                    .fg(Theme::FOCUS_BORDER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(state.server_label.as_str(), Style::default().fg(Theme::TEXT_ACCENT)),
            Span::raw(" | "),
            Span::raw(user),
            Span::raw(" | db:"),
            Span::raw(database),
            Span::raw(" | "),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
