//! Table browser mounted under the selected database.
//!
//! A tree belongs to exactly one mount of one database. Every selection builds
//! a fresh tree with a new mount number, and completions carrying a different
//! database or mount are ignored by the reducer. Re-selecting the same
//! database therefore drops replies requested for the earlier tree.

use std::collections::{HashMap, HashSet};

use crate::domain::{LoadState, NativeTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableDetail {
    Loading,
    Loaded(NativeTable),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct TableTreeState {
    pub database: String,
    pub mount: u64,
    pub tables: Vec<String>,
    pub load: LoadState,
    pub cursor: usize,
    pub expanded: HashSet<String>,
    pub details: HashMap<String, TableDetail>,
}

impl TableTreeState {
    /// A freshly mounted tree is already waiting for its table list.
    pub fn new(database: impl Into<String>, mount: u64) -> Self {
        Self {
            database: database.into(),
            mount,
            tables: Vec::new(),
            load: LoadState::Loading,
            cursor: 0,
            expanded: HashSet::new(),
            details: HashMap::new(),
        }
    }

    pub fn belongs_to(&self, database: &str, mount: u64) -> bool {
        self.mount == mount && self.database == database
    }

    pub fn apply_tables(&mut self, tables: Vec<String>) {
        self.tables = tables;
        self.load = LoadState::Loaded;
        self.cursor = self.cursor.min(self.tables.len().saturating_sub(1));
    }

    pub fn apply_failed(&mut self, error: String) {
        self.tables.clear();
        self.load = LoadState::Error(error);
        self.cursor = 0;
    }

    pub fn current_table(&self) -> Option<&str> {
        self.tables.get(self.cursor).map(String::as_str)
    }

    pub fn is_expanded(&self, table: &str) -> bool {
        self.expanded.contains(table)
    }

    /// Expands or collapses the table under the cursor. Returns the table name
    /// when its columns still have to be fetched.
    pub fn toggle_at_cursor(&mut self) -> Option<String> {
        let table = self.current_table()?.to_string();

        if self.expanded.remove(&table) {
            return None;
        }
        self.expanded.insert(table.clone());

        match self.details.get(&table) {
            Some(TableDetail::Loaded(_) | TableDetail::Loading) => None,
            Some(TableDetail::Failed(_)) | None => {
                self.details.insert(table.clone(), TableDetail::Loading);
                Some(table)
            }
        }
    }

    pub fn apply_detail(&mut self, table: &str, detail: NativeTable) {
        self.details
            .insert(table.to_string(), TableDetail::Loaded(detail));
    }

    pub fn apply_detail_failed(&mut self, table: &str, error: String) {
        self.details
            .insert(table.to_string(), TableDetail::Failed(error));
    }

    pub fn cursor_next(&mut self) {
        if self.cursor + 1 < self.tables.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_last(&mut self) {
        self.cursor = self.tables.len().saturating_sub(1);
    }
}
