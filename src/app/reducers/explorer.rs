//! Explorer sub-reducer: database list and the table tree under it.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::focused_pane::FocusedPane;
use crate::state::AppState;

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_explorer(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::LoadDatabases => {
            state.databases.begin_loading();
            Some(vec![Effect::FetchDatabases])
        }
        Action::ToggleDatabasePanel => {
            state.databases.toggle_collapsed();
            if state.databases.collapsed && state.ui.focused_pane == FocusedPane::Tables {
                state.ui.focused_pane = FocusedPane::Databases;
            }
            Some(vec![])
        }
        Action::DatabasesLoaded(databases) => {
            state.databases.apply_loaded(databases.clone());
            Some(vec![])
        }
        Action::DatabasesFailed(error) => {
            state.databases.apply_failed(error.clone());
            state.set_error(format!("Failed to load databases: {error}"), now);
            Some(vec![])
        }

        Action::TablesLoaded {
            database,
            mount,
            tables,
        } => {
            match state.table_tree.as_mut() {
                Some(tree) if tree.belongs_to(database, *mount) => {
                    tree.apply_tables(tables.clone());
                }
                _ => tracing::debug!(database = %database, mount, "dropping stale table list"),
            }
            Some(vec![])
        }
        Action::TablesFailed {
            database,
            mount,
            error,
        } => {
            if let Some(tree) = state.table_tree.as_mut()
                && tree.belongs_to(database, *mount)
            {
                tree.apply_failed(error.clone());
                state.set_error(format!("Failed to load tables of {database}: {error}"), now);
            }
            Some(vec![])
        }
        Action::TableDetailLoaded {
            database,
            mount,
            table,
            detail,
        } => {
            if let Some(tree) = state.table_tree.as_mut()
                && tree.belongs_to(database, *mount)
            {
                tree.apply_detail(table, *detail.clone());
            }
            Some(vec![])
        }
        Action::TableDetailFailed {
            database,
            mount,
            table,
            error,
        } => {
            if let Some(tree) = state.table_tree.as_mut()
                && tree.belongs_to(database, *mount)
            {
                tree.apply_detail_failed(table, error.clone());
                state.set_error(format!("Failed to describe {database}.{table}: {error}"), now);
            }
            Some(vec![])
        }

        _ => None,
    }
}
