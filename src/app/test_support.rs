//! Fixture builders shared by the UI and integration tests.

use std::time::Instant;

use crate::action::Action;
use crate::domain::{
    InMemoryResultSet, LensQuery, QueryHandle, QueryResult, QueryState, QueryStatus, ResultColumn,
    ResultRow, ResultSetMetadata,
};
use crate::focused_pane::FocusedPane;
use crate::reducer::reduce;
use crate::state::AppState;

pub const BASE_URL: &str = "http://localhost:9999/lensapi/";

pub fn query_record(handle: &str, state: QueryState) -> LensQuery {
    LensQuery {
        query_handle: QueryHandle::new(handle),
        user_query: "select region, total from sales".to_string(),
        submitted_user: Some("alice@example.com".to_string()),
        query_name: None,
        is_persistent: false,
        status: QueryStatus {
            state,
            ..Default::default()
        },
        driver_query: None,
        result_set_path: None,
        submission_time: 1_000,
        finish_time: 3_000,
    }
}

pub fn region_totals() -> QueryResult {
    QueryResult::InMemory {
        result_set: InMemoryResultSet {
            rows: vec![
                ResultRow {
                    values: vec!["east".into(), 42.into()],
                },
                ResultRow {
                    values: vec!["west".into(), 7.into()],
                },
            ],
        },
        metadata: ResultSetMetadata {
            columns: vec![
                ResultColumn {
                    name: "region".to_string(),
                    data_type: "STRING".to_string(),
                },
                ResultColumn {
                    name: "total".to_string(),
                    data_type: "INT".to_string(),
                },
            ],
        },
    }
}

/// Fresh state as the TUI sees it right after start-up.
pub fn initial_state() -> AppState {
    AppState::new(BASE_URL)
}

/// State with `databases` loaded and nothing selected.
pub fn state_with_databases(databases: &[&str]) -> AppState {
    let mut state = initial_state();
    let now = Instant::now();
    reduce(&mut state, Action::LoadDatabases, now);
    reduce(
        &mut state,
        Action::DatabasesLoaded(databases.iter().map(|s| (*s).to_string()).collect()),
        now,
    );
    state
}

/// State with `database` selected and its `tables` loaded.
pub fn state_with_tables(database: &str, tables: &[&str]) -> AppState {
    let mut state = state_with_databases(&[database]);
    let now = Instant::now();
    reduce(&mut state, Action::SelectNext, now);
    reduce(&mut state, Action::ConfirmSelection, now);
    let mount = state.tree_mounts;
    reduce(
        &mut state,
        Action::TablesLoaded {
            database: database.to_string(),
            mount,
            tables: tables.iter().map(|s| (*s).to_string()).collect(),
        },
        now,
    );
    state.ui.focused_pane = FocusedPane::Tables;
    state
}
