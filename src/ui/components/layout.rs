use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use super::database_panel::DatabasePanel;
use super::footer::Footer;
use super::header::Header;
use super::query_pane::QueryPane;
use super::result_pane::ResultPane;
use super::table_tree::TableTree;
use crate::app::state::AppState;

pub struct MainLayout;

impl MainLayout {
    /// `time_ms` drives spinner frames; `None` reads the wall clock.
    pub fn render(frame: &mut Frame, state: &AppState, time_ms: Option<u128>) {
        let time_ms = time_ms.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0)
        });

        let [header_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [left_area, right_area] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .areas(main_area);

        Header::render(frame, header_area, state);

        if state.tables_visible() {
            let [db_area, tree_area] =
                Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .areas(left_area);
            DatabasePanel::render(frame, db_area, state, time_ms);
            TableTree::render(frame, tree_area, state, time_ms);
        } else if state.databases.collapsed {
            let [db_area, _] = Layout::vertical([
                Constraint::Length(DatabasePanel::COLLAPSED_HEIGHT),
                Constraint::Min(0),
            ])
            .areas(left_area);
            DatabasePanel::render(frame, db_area, state, time_ms);
        } else {
            DatabasePanel::render(frame, left_area, state, time_ms);
        }

        let [query_area, result_area] =
            Layout::vertical([Constraint::Length(QueryPane::HEIGHT), Constraint::Min(3)])
                .areas(right_area);
        QueryPane::render(frame, query_area, state);
        ResultPane::render(frame, result_area, state, time_ms);

        Footer::render(frame, footer_area, state);
    }
}
