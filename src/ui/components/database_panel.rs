use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use super::atoms::{panel_block, spinner_char};
use super::text_utils::truncate_to_width;
use crate::app::database_panel::{DatabasePanelView, NO_DATABASES_MESSAGE};
use crate::app::focused_pane::FocusedPane;
use crate::app::state::AppState;
use crate::theme::Theme;

pub struct DatabasePanel;

impl DatabasePanel {
    /// Height the panel needs when collapsed: borders plus one line.
    pub const COLLAPSED_HEIGHT: u16 = 3;

    pub fn render(frame: &mut Frame, area: Rect, state: &AppState, time_ms: u128) {
        let panel = &state.databases;
        let focused = state.ui.focused_pane == FocusedPane::Databases;
        let marker = if panel.collapsed { "▸" } else { "▾" };

        let title = match panel.view() {
            DatabasePanelView::Select => {
                format!(" {marker} [1] Databases [{}] ", panel.databases.len())
            }
            _ => format!(" {marker} [1] Databases "),
        };
        let block = panel_block(title, focused);
        let inner_width = block.inner(area).width as usize;

        match panel.view() {
            DatabasePanelView::Loading => {
                let line = Line::from(Span::styled(
                    format!("{} Loading databases...", spinner_char(time_ms)),
                    Style::default().fg(Theme::TEXT_ACCENT),
                ));
                frame.render_widget(Paragraph::new(line).block(block), area);
            }
            DatabasePanelView::Empty => {
                let line = Line::from(Span::styled(
                    NO_DATABASES_MESSAGE,
                    Style::default().fg(Theme::TEXT_SECONDARY),
                ));
                frame.render_widget(
                    Paragraph::new(line)
                        .block(block)
                        .wrap(Wrap { trim: true }),
                    area,
                );
            }
            DatabasePanelView::Select if panel.collapsed => {
                let selected = panel.selected.as_deref().unwrap_or("(none)");
                let line = Line::from(vec![
                    Span::styled("Selected: ", Style::default().fg(Theme::TEXT_MUTED)),
                    Span::raw(truncate_to_width(selected, inner_width.saturating_sub(10))),
                ]);
                frame.render_widget(Paragraph::new(line).block(block), area);
            }
            DatabasePanelView::Select => {
                let selected = panel.selected.as_deref();
                let items: Vec<ListItem> = panel
                    .entries()
                    .enumerate()
                    .map(|(i, name)| {
                        let is_selected = i > 0 && selected == Some(name);
                        let mark = if is_selected { "● " } else { "  " };
                        let style = if i == 0 {
                            Style::default().fg(Theme::TEXT_MUTED)
                        } else {
                            Style::default().fg(Theme::TEXT_PRIMARY)
                        };
                        ListItem::new(Line::from(vec![
                            Span::styled(mark, Style::default().fg(Theme::SELECTED_MARK)),
                            Span::styled(
                                truncate_to_width(name, inner_width.saturating_sub(4)),
                                style,
                            ),
                        ]))
                    })
                    .collect();

                let list = List::new(items)
                    .block(block)
                    .highlight_style(
                        Style::default()
                            .fg(Theme::SELECTION_FG)
                            .add_modifier(Modifier::BOLD),
                    )
                    .highlight_symbol("> ");
                let mut list_state = ListState::default().with_selected(Some(panel.cursor));
                frame.render_stateful_widget(list, area, &mut list_state);
            }
        }
    }
}
