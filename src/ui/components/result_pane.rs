use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, Wrap};

use super::atoms::{panel_block, spinner_char};
use super::text_utils::{column_widths, truncate_to_width};
use crate::app::query_pane::{QueryPaneState, QueryPhase};
use crate::app::state::AppState;
use crate::domain::{InMemoryResultSet, QueryResult, ResultSetMetadata};
use crate::theme::Theme;

pub struct ResultPane;

impl ResultPane {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState, time_ms: u128) {
        let query = &state.query;
        let block = panel_block(title(query), false);

        match &query.phase {
            QueryPhase::Idle => {
                let hint = Line::from(Span::styled(
                    "Submit a query to see results",
                    Style::default().fg(Theme::TEXT_MUTED),
                ));
                frame.render_widget(Paragraph::new(hint).block(block), area);
            }
            QueryPhase::Submitting => {
                let line = progress_line(time_ms, "Submitting query...".to_string());
                frame.render_widget(Paragraph::new(line).block(block), area);
            }
            QueryPhase::Running(handle) => {
                let mut lines = vec![progress_line(time_ms, format!("Running {handle}"))];
                if let Some(record) = &query.record {
                    let status = &record.status;
                    lines.push(Line::from(format!("State: {}", status.state)));
                    if status.progress > 0.0 {
                        lines.push(Line::from(format!(
                            "Progress: {:.0}%",
                            status.progress * 100.0
                        )));
                    }
                    if let Some(msg) = &status.progress_message {
                        lines.push(Line::from(Span::styled(
                            msg.clone(),
                            Style::default().fg(Theme::TEXT_SECONDARY),
                        )));
                    }
                }
                frame.render_widget(Paragraph::new(lines).block(block), area);
            }
            QueryPhase::Fetching(handle) => {
                let line = progress_line(time_ms, format!("Fetching results of {handle}"));
                frame.render_widget(Paragraph::new(line).block(block), area);
            }
            QueryPhase::Failed(error) => {
                let line = Line::from(Span::styled(
                    error.clone(),
                    Style::default().fg(Theme::STATUS_ERROR),
                ));
                frame.render_widget(
                    Paragraph::new(line)
                        .block(block)
                        .wrap(Wrap { trim: false }),
                    area,
                );
            }
            QueryPhase::Done => match &query.result {
                Some(QueryResult::InMemory {
                    result_set,
                    metadata,
                }) => render_rows(frame, area, block, result_set, metadata, query.result_scroll),
                Some(QueryResult::Persistent { download_url }) => {
                    let line = Line::from(vec![
                        Span::raw("Results available at "),
                        Span::styled(
                            download_url.clone(),
                            Style::default().fg(Theme::TEXT_ACCENT),
                        ),
                    ]);
                    frame.render_widget(
                        Paragraph::new(line)
                            .block(block)
                            .wrap(Wrap { trim: false }),
                        area,
                    );
                }
                None => frame.render_widget(block, area),
            },
        }
    }
}

fn title(query: &QueryPaneState) -> String {
    match (&query.phase, &query.result) {
        (QueryPhase::Done, Some(QueryResult::InMemory { result_set, .. })) => {
            let total = result_set.row_count();
            if total == 0 {
                " Result (0 rows) ".to_string()
            } else {
                format!(
                    " Result ({} rows) [{}/{}] ",
                    total,
                    query.result_scroll + 1,
                    total
                )
            }
        }
        _ => " Result ".to_string(),
    }
}

fn progress_line(time_ms: u128, text: String) -> Line<'static> {
    Line::from(Span::styled(
        format!("{} {text}", spinner_char(time_ms)),
        Style::default().fg(Theme::TEXT_ACCENT),
    ))
}

fn render_rows(
    frame: &mut Frame,
    area: Rect,
    block: ratatui::widgets::Block<'static>,
    result_set: &InMemoryResultSet,
    metadata: &ResultSetMetadata,
    scroll: usize,
) {
    let headers = metadata.column_names();
    let rows: Vec<Vec<String>> = result_set.rows.iter().map(|r| r.cells()).collect();

    if headers.is_empty() && rows.is_empty() {
        let line = Line::from(Span::styled(
            "No rows",
            Style::default().fg(Theme::TEXT_MUTED),
        ));
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let widths = column_widths(&headers, &rows);
    let header = Row::new(headers.iter().zip(&widths).map(|(name, w)| {
        Cell::from(truncate_to_width(name, *w as usize))
    }))
    .style(
        Style::default()
            .bg(Theme::TABLE_HEADER_BG)
            .add_modifier(Modifier::BOLD),
    );

    let body = rows.iter().skip(scroll).map(|cells| {
        Row::new(
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, w)| Cell::from(truncate_to_width(cell, *w as usize))),
        )
    });

    let constraints: Vec<Constraint> = widths.iter().map(|w| Constraint::Length(*w)).collect();
    let table = Table::new(body, constraints)
        .header(header)
        .block(block)
        .column_spacing(1);
    frame.render_widget(table, area);
}
