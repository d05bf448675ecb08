use std::time::{Duration, Instant};

use super::database_panel::DatabasePanelState;
use super::focused_pane::FocusedPane;
use super::input_mode::InputMode;
use super::message_state::MessageState;
use super::query_pane::QueryPaneState;
use super::table_tree::TableTreeState;

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focused_pane: FocusedPane,
    pub input_mode: InputMode,
    pub terminal_height: u16,
}

/// The single source of truth for the TUI. Mutated only by the reducer.
#[derive(Debug, Clone)]
pub struct AppState {
    pub should_quit: bool,
    pub render_dirty: bool,
    /// Shown in the header; the service base URL.
    pub server_label: String,
    pub user: Option<String>,
    pub ui: UiState,
    pub databases: DatabasePanelState,
    pub table_tree: Option<TableTreeState>,
    /// Bumped on every table tree mount.
    pub tree_mounts: u64,
    pub query: QueryPaneState,
    pub messages: MessageState,
}

impl AppState {
    pub fn new(server_label: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            render_dirty: true,
            server_label: server_label.into(),
            user: None,
            ui: UiState::default(),
            databases: DatabasePanelState::default(),
            table_tree: None,
            tree_mounts: 0,
            query: QueryPaneState::default(),
            messages: MessageState::default(),
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.query.poll_interval = poll_interval;
        self
    }

    /// The table tree is only reachable while the database panel is expanded.
    pub fn tables_visible(&self) -> bool {
        self.table_tree.is_some() && !self.databases.collapsed
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }

    pub fn clear_expired_timers(&mut self, now: Instant) {
        self.messages.clear_expired_at(now);
    }

    pub fn set_error(&mut self, msg: String, now: Instant) {
        self.messages.set_error_at(msg, now);
    }

    pub fn set_success(&mut self, msg: String, now: Instant) {
        self.messages.set_success_at(msg, now);
    }
}
