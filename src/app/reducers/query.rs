//! Query sub-reducer: editor input and the submit → poll → fetch lifecycle.

use std::time::{Duration, Instant};

use crate::action::Action;
use crate::domain::{LensQuery, QueryResult, QueryState};
use crate::effect::Effect;
use crate::focused_pane::FocusedPane;
use crate::input_mode::InputMode;
use crate::query_pane::QueryPhase;
use crate::state::AppState;

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_query(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::EnterQueryInput => {
            state.ui.input_mode = InputMode::QueryInput;
            state.ui.focused_pane = FocusedPane::Query;
            Some(vec![])
        }
        Action::ExitQueryInput => {
            state.ui.input_mode = InputMode::Normal;
            Some(vec![])
        }
        Action::QueryInput(c) => {
            if state.ui.input_mode == InputMode::QueryInput {
                state.query.input.push(*c);
            }
            Some(vec![])
        }
        Action::QueryBackspace => {
            if state.ui.input_mode == InputMode::QueryInput {
                state.query.input.pop();
            }
            Some(vec![])
        }
        Action::SubmitQuery => {
            let query = state.query.input.trim().to_string();
            if query.is_empty() {
                state.set_error("Query is empty".to_string(), now);
                return Some(vec![]);
            }
            if state.query.phase.is_busy() {
                state.set_error("A query is already running".to_string(), now);
                return Some(vec![]);
            }

            state.ui.input_mode = InputMode::Normal;
            state.query.phase = QueryPhase::Submitting;
            state.query.record = None;
            state.query.result = None;
            state.query.result_scroll = 0;
            Some(vec![Effect::ExecuteQuery { query }])
        }
        Action::CancelQuery => {
            if let QueryPhase::Running(handle) = &state.query.phase {
                Some(vec![Effect::CancelQuery {
                    handle: handle.clone(),
                }])
            } else {
                state.set_error("No running query to cancel".to_string(), now);
                Some(vec![])
            }
        }

        Action::QuerySubmitted(handle) => {
            if state.query.phase != QueryPhase::Submitting {
                return Some(vec![]);
            }
            state.query.phase = QueryPhase::Running(handle.clone());
            Some(vec![Effect::PollQuery {
                handle: handle.clone(),
                delay: Duration::ZERO,
            }])
        }
        Action::QuerySubmitFailed(error) => {
            state.query.phase = QueryPhase::Failed(error.clone());
            state.set_error(format!("Query submission failed: {error}"), now);
            Some(vec![])
        }
        Action::QueryPolled(query) => Some(apply_polled(state, query, now)),
        Action::QueryPollFailed { handle, error } | Action::QueryResultFailed { handle, error } => {
            if state.query.is_current(handle) {
                state.query.phase = QueryPhase::Failed(error.clone());
                state.set_error(error.clone(), now);
            }
            Some(vec![])
        }
        Action::QueryResultLoaded { handle, result } => {
            if state.query.phase != QueryPhase::Fetching(handle.clone()) {
                return Some(vec![]);
            }
            let message = match result.as_ref() {
                QueryResult::InMemory { result_set, .. } => {
                    format!("{} rows fetched", result_set.row_count())
                }
                QueryResult::Persistent { .. } => "Results ready for download".to_string(),
            };
            state.query.result = Some(*result.clone());
            state.query.phase = QueryPhase::Done;
            state.set_success(message, now);
            Some(vec![])
        }
        Action::QueryCancelled { handle, result } => {
            if result.is_success() {
                state.set_success(format!("Cancel requested for {handle}"), now);
            } else {
                let detail = result.message.as_deref().unwrap_or("no details");
                state.set_error(format!("Failed in killing {handle}: {detail}"), now);
            }
            Some(vec![])
        }
        Action::QueryCancelFailed { handle, error } => {
            state.set_error(format!("Failed in killing {handle}: {error}"), now);
            Some(vec![])
        }

        _ => None,
    }
}

fn apply_polled(state: &mut AppState, query: &LensQuery, now: Instant) -> Vec<Effect> {
    let handle = query.handle().clone();
    if !state.query.is_current(&handle) {
        return vec![];
    }
    state.query.record = Some(query.clone());

    match query.state() {
        QueryState::Successful => {
            state.query.phase = QueryPhase::Fetching(handle.clone());
            vec![Effect::FetchQueryResult {
                handle,
                mode: query.mode(),
            }]
        }
        QueryState::Failed => {
            let reason = query
                .status
                .error_message
                .clone()
                .or_else(|| query.status.status_message.clone())
                .unwrap_or_else(|| "Query failed".to_string());
            state.query.phase = QueryPhase::Failed(reason.clone());
            state.set_error(reason, now);
            vec![]
        }
        QueryState::Canceled => {
            state.query.phase = QueryPhase::Failed("Query was canceled".to_string());
            vec![]
        }
        QueryState::Closed => {
            state.query.phase = QueryPhase::Failed("Query was closed".to_string());
            vec![]
        }
        _ => vec![Effect::PollQuery {
            handle,
            delay: state.query.poll_interval,
        }],
    }
}
