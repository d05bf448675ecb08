//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` (time is passed as `now` parameter)
//! - Perform I/O operations
//! - Spawn async tasks
//!
//! This keeps the reducer testable without mocking time or I/O.

use std::time::Instant;

use crate::action::Action;
use crate::database_panel::SelectionChange;
use crate::effect::Effect;
use crate::focused_pane::FocusedPane;
use crate::input_mode::InputMode;
use crate::reducers::{reduce_explorer, reduce_query};
use crate::state::AppState;
use crate::table_tree::TableTreeState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    // Mark dirty for all state-changing actions (except None and Render)
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    if let Some(effects) = reduce_explorer(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_query(state, &action, now) {
        return effects;
    }

    match action {
        Action::None => vec![],
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Resize(_w, h) => {
            state.ui.terminal_height = h;
            vec![]
        }
        Action::Render => {
            state.clear_expired_timers(now);
            state.clear_dirty();
            vec![Effect::Render]
        }
        Action::ToggleFocus => {
            state.ui.focused_pane = state.ui.focused_pane.next(state.tables_visible());
            vec![]
        }
        Action::Escape => {
            if state.ui.input_mode == InputMode::QueryInput {
                state.ui.input_mode = InputMode::Normal;
            } else {
                state.messages.clear();
            }
            vec![]
        }

        Action::SelectNext => {
            match state.ui.focused_pane {
                FocusedPane::Databases => state.databases.cursor_next(),
                FocusedPane::Tables => with_tree(state, TableTreeState::cursor_next),
                FocusedPane::Query => state.query.scroll_down(),
            }
            vec![]
        }
        Action::SelectPrevious => {
            match state.ui.focused_pane {
                FocusedPane::Databases => state.databases.cursor_previous(),
                FocusedPane::Tables => with_tree(state, TableTreeState::cursor_previous),
                FocusedPane::Query => state.query.scroll_up(),
            }
            vec![]
        }
        Action::SelectFirst => {
            match state.ui.focused_pane {
                FocusedPane::Databases => state.databases.cursor_first(),
                FocusedPane::Tables => with_tree(state, TableTreeState::cursor_first),
                FocusedPane::Query => state.query.result_scroll = 0,
            }
            vec![]
        }
        Action::SelectLast => {
            match state.ui.focused_pane {
                FocusedPane::Databases => state.databases.cursor_last(),
                FocusedPane::Tables => with_tree(state, TableTreeState::cursor_last),
                FocusedPane::Query => {
                    state.query.result_scroll = state.query.result_row_count().saturating_sub(1);
                }
            }
            vec![]
        }

        Action::ConfirmSelection => match state.ui.focused_pane {
            FocusedPane::Databases => match state.databases.select_at_cursor() {
                SelectionChange::Selected(database) => {
                    state.tree_mounts += 1;
                    let mount = state.tree_mounts;
                    state.table_tree = Some(TableTreeState::new(database.clone(), mount));
                    vec![Effect::FetchTables { database, mount }]
                }
                SelectionChange::Cleared => {
                    state.table_tree = None;
                    vec![]
                }
                SelectionChange::Unchanged => vec![],
            },
            FocusedPane::Tables => {
                let Some(tree) = state.table_tree.as_mut() else {
                    return vec![];
                };
                match tree.toggle_at_cursor() {
                    Some(table) => vec![Effect::FetchTableDetail {
                        database: tree.database.clone(),
                        mount: tree.mount,
                        table,
                    }],
                    None => vec![],
                }
            }
            FocusedPane::Query => {
                state.ui.input_mode = InputMode::QueryInput;
                vec![]
            }
        },

        _ => vec![],
    }
}

fn with_tree(state: &mut AppState, f: impl FnOnce(&mut TableTreeState)) {
    if let Some(tree) = state.table_tree.as_mut() {
        f(tree);
    }
}
