mod harness;

use harness::fixtures;
use harness::{create_test_terminal, render_to_string};

use lensql::app::focused_pane::FocusedPane;
use lensql::app::input_mode::InputMode;
use lensql::app::query_pane::QueryPhase;
use lensql::app::test_support::{
    initial_state, region_totals, state_with_databases, state_with_tables,
};
use lensql::domain::{QueryHandle, QueryResult};

#[test]
fn initial_state_shows_loading_databases() {
    let state = initial_state();
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output);
}

#[test]
fn loaded_databases_start_with_placeholder() {
    let state = state_with_databases(&["default", "sales"]);
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output);
}

#[test]
fn empty_database_list_shows_apology() {
    let state = state_with_databases(&[]);
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output);
}

#[test]
fn failed_database_fetch_shows_footer_error() {
    let mut state = initial_state();
    state.databases.apply_failed("connection refused".to_string());
    state.messages.last_error = Some("Failed to load databases: connection refused".to_string());
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output);
}

#[test]
fn collapsed_panel_shows_selection_only() {
    let mut state = state_with_tables("sales", &["orders"]);
    state.databases.toggle_collapsed();
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output);
}

#[test]
fn table_tree_lists_tables_of_selected_database() {
    let state = state_with_tables("sales", &["orders", "items"]);
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output);
}

#[test]
fn expanded_table_shows_columns() {
    let mut state = state_with_tables("sales", &["orders", "items"]);
    if let Some(tree) = state.table_tree.as_mut() {
        tree.expanded.insert("orders".to_string());
        tree.details
            .insert("orders".to_string(), fixtures::loaded_orders());
    }
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output);
}

#[test]
fn empty_table_list_names_the_database() {
    let state = state_with_tables("sales", &[]);
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output);
}

#[test]
fn editing_query_switches_footer_hints() {
    let mut state = initial_state();
    state.ui.input_mode = InputMode::QueryInput;
    state.ui.focused_pane = FocusedPane::Query;
    state.query.input = "select 1".to_string();
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output);
}

#[test]
fn running_query_shows_handle() {
    let mut state = initial_state();
    state.query.phase = QueryPhase::Running(QueryHandle::new("h-42"));
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output);
}

#[test]
fn in_memory_result_renders_table() {
    let mut state = initial_state();
    state.query.phase = QueryPhase::Done;
    state.query.result = Some(region_totals());
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output);
}

#[test]
fn persistent_result_shows_download_url() {
    let mut state = initial_state();
    state.query.phase = QueryPhase::Done;
    state.query.result = Some(QueryResult::Persistent {
        download_url: "http://lens/h1".to_string(),
    });
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output);
}

#[test]
fn failed_query_shows_error() {
    let mut state = initial_state();
    state.query.phase = QueryPhase::Failed("Column total not found".to_string());
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output);
}

#[test]
fn success_message_follows_hints() {
    let mut state = initial_state();
    state.ui.focused_pane = FocusedPane::Query;
    state.messages.last_success = Some("2 rows fetched".to_string());
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    insta::assert_snapshot!(output);
}
