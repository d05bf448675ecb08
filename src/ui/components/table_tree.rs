use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use super::atoms::{panel_block, spinner_char};
use crate::app::focused_pane::FocusedPane;
use crate::app::state::AppState;
use crate::app::table_tree::{TableDetail, TableTreeState};
use crate::domain::LoadState;
use crate::theme::Theme;

pub struct TableTree;

impl TableTree {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState, time_ms: u128) {
        let Some(tree) = state.table_tree.as_ref() else {
            return;
        };
        let focused = state.ui.focused_pane == FocusedPane::Tables;

        let title = match &tree.load {
            LoadState::Loaded => format!(" [2] Tables · {} [{}] ", tree.database, tree.tables.len()),
            _ => format!(" [2] Tables · {} ", tree.database),
        };
        let block = panel_block(title, focused);

        let placeholder = match &tree.load {
            LoadState::NotLoaded | LoadState::Loading => Some(Line::from(Span::styled(
                format!("{} Loading tables...", spinner_char(time_ms)),
                Style::default().fg(Theme::TEXT_ACCENT),
            ))),
            LoadState::Error(e) => Some(Line::from(Span::styled(
                format!("Error: {e}"),
                Style::default().fg(Theme::STATUS_ERROR),
            ))),
            LoadState::Loaded if tree.tables.is_empty() => Some(Line::from(Span::styled(
                format!("No tables found in {}", tree.database),
                Style::default().fg(Theme::TEXT_SECONDARY),
            ))),
            LoadState::Loaded => None,
        };
        if let Some(line) = placeholder {
            frame.render_widget(Paragraph::new(line).block(block), area);
            return;
        }

        let (items, cursor_row) = tree_rows(tree, time_ms);
        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Theme::SELECTION_FG)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(Some(cursor_row));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

/// Flattens the tree into list rows. Returns the rows and the row of the cursor.
fn tree_rows(tree: &TableTreeState, time_ms: u128) -> (Vec<ListItem<'static>>, usize) {
    let mut rows = Vec::new();
    let mut cursor_row = 0;

    for (i, table) in tree.tables.iter().enumerate() {
        if i == tree.cursor {
            cursor_row = rows.len();
        }
        let expanded = tree.is_expanded(table);
        let marker = if expanded { "▾ " } else { "▸ " };
        rows.push(ListItem::new(format!("{marker}{table}")));

        if !expanded {
            continue;
        }
        match tree.details.get(table) {
            Some(TableDetail::Loaded(detail)) if detail.columns.is_empty() => {
                rows.push(detail_row("    (no columns)".to_string(), Theme::TEXT_MUTED));
            }
            Some(TableDetail::Loaded(detail)) => {
                for column in &detail.columns {
                    rows.push(ListItem::new(Line::from(vec![
                        Span::raw(format!("    {}", column.name)),
                        Span::styled(
                            format!("  {}", column.data_type),
                            Style::default().fg(Theme::TEXT_MUTED),
                        ),
                    ])));
                }
            }
            Some(TableDetail::Failed(e)) => {
                rows.push(detail_row(format!("    Error: {e}"), Theme::STATUS_ERROR));
            }
            Some(TableDetail::Loading) | None => {
                rows.push(detail_row(
                    format!("    {} Loading columns...", spinner_char(time_ms)),
                    Theme::TEXT_ACCENT,
                ));
            }
        }
    }

    (rows, cursor_row)
}

fn detail_row(text: String, color: ratatui::style::Color) -> ListItem<'static> {
    ListItem::new(Span::styled(text, Style::default().fg(color)))
}
