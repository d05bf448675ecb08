//! State of the database list panel.
//!
//! The panel is a select control whose first entry is a placeholder. Picking
//! the placeholder clears the selection, which unmounts the table tree.

use crate::domain::LoadState;

pub const SELECT_PLACEHOLDER: &str = "Select";
pub const NO_DATABASES_MESSAGE: &str = "Sorry, we couldn't find any databases.";

/// What the panel body shows, derived from the load state and the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabasePanelView {
    Loading,
    Empty,
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Unchanged,
    Selected(String),
    Cleared,
}

#[derive(Debug, Clone, Default)]
pub struct DatabasePanelState {
    pub databases: Vec<String>,
    pub load: LoadState,
    pub collapsed: bool,
    /// Index into [`Self::entries`]; 0 is the placeholder.
    pub cursor: usize,
    pub selected: Option<String>,
}

impl DatabasePanelState {
    pub fn view(&self) -> DatabasePanelView {
        match self.load {
            LoadState::NotLoaded | LoadState::Loading => DatabasePanelView::Loading,
            _ if self.databases.is_empty() => DatabasePanelView::Empty,
            _ => DatabasePanelView::Select,
        }
    }

    pub fn begin_loading(&mut self) {
        self.load = LoadState::Loading;
    }

    pub fn apply_loaded(&mut self, databases: Vec<String>) {
        self.databases = databases;
        self.load = LoadState::Loaded;
        self.clamp_cursor();
    }

    /// A failed fetch leaves an empty list behind.
    pub fn apply_failed(&mut self, error: String) {
        self.databases.clear();
        self.load = LoadState::Error(error);
        self.cursor = 0;
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Placeholder first, then every database name.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        std::iter::once(SELECT_PLACEHOLDER).chain(self.databases.iter().map(String::as_str))
    }

    pub fn entry_count(&self) -> usize {
        self.databases.len() + 1
    }

    pub fn cursor_next(&mut self) {
        if self.cursor + 1 < self.entry_count() {
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
        self.cursor = self.entry_count() - 1;
    }

    /// Applies the entry under the cursor as the selection.
    pub fn select_at_cursor(&mut self) -> SelectionChange {
        if self.view() != DatabasePanelView::Select || self.collapsed {
            return SelectionChange::Unchanged;
        }

        let picked = match self.cursor {
            0 => None,
            i => self.databases.get(i - 1).cloned(),
        };

        if picked == self.selected {
            return SelectionChange::Unchanged;
        }

        self.selected = picked.clone();
        match picked {
            Some(database) => SelectionChange::Selected(database),
            None => SelectionChange::Cleared,
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.entry_count() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn loaded(names: &[&str]) -> DatabasePanelState {
        let mut state = DatabasePanelState::default();
        state.begin_loading();
        state.apply_loaded(names.iter().map(|s| s.to_string()).collect());
        state
    }

    #[rstest]
    #[case(LoadState::NotLoaded, &[], DatabasePanelView::Loading)]
    #[case(LoadState::Loading, &["default"], DatabasePanelView::Loading)]
    #[case(LoadState::Loaded, &[], DatabasePanelView::Empty)]
    #[case(LoadState::Error("boom".to_string()), &[], DatabasePanelView::Empty)]
    #[case(LoadState::Loaded, &["default"], DatabasePanelView::Select)]
    fn view_follows_load_state_and_list(
        #[case] load: LoadState,
        #[case] names: &[&str],
        #[case] expected: DatabasePanelView,
    ) {
        let state = DatabasePanelState {
            databases: names.iter().map(|s| s.to_string()).collect(),
            load,
            ..Default::default()
        };

        assert_eq!(state.view(), expected);
    }

    #[test]
    fn collapse_is_independent_of_load_state() {
        let mut state = loaded(&["default"]);

        state.toggle_collapsed();
        assert!(state.collapsed);
        assert_eq!(state.view(), DatabasePanelView::Select);

        state.toggle_collapsed();
        assert!(!state.collapsed);
    }

    #[test]
    fn entries_start_with_placeholder() {
        let state = loaded(&["default", "sales"]);

        let entries: Vec<&str> = state.entries().collect();

        assert_eq!(entries, vec![SELECT_PLACEHOLDER, "default", "sales"]);
    }

    #[test]
    fn cursor_is_bounded() {
        let mut state = loaded(&["default", "sales"]);

        state.cursor_previous();
        assert_eq!(state.cursor, 0);

        for _ in 0..5 {
            state.cursor_next();
        }
        assert_eq!(state.cursor, 2);

        state.cursor_first();
        assert_eq!(state.cursor, 0);
        state.cursor_last();
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn selecting_database_then_placeholder() {
        let mut state = loaded(&["default", "sales"]);

        state.cursor = 2;
        assert_eq!(
            state.select_at_cursor(),
            SelectionChange::Selected("sales".to_string())
        );
        assert_eq!(state.selected.as_deref(), Some("sales"));

        assert_eq!(state.select_at_cursor(), SelectionChange::Unchanged);

        state.cursor = 0;
        assert_eq!(state.select_at_cursor(), SelectionChange::Cleared);
        assert!(state.selected.is_none());
    }

    #[test]
    fn nothing_is_selectable_while_loading_or_collapsed() {
        let mut state = loaded(&["default"]);
        state.cursor = 1;
        state.toggle_collapsed();
        assert_eq!(state.select_at_cursor(), SelectionChange::Unchanged);

        state.toggle_collapsed();
        state.begin_loading();
        assert_eq!(state.select_at_cursor(), SelectionChange::Unchanged);
    }

    #[test]
    fn reload_with_fewer_databases_clamps_cursor() {
        let mut state = loaded(&["a", "b", "c"]);
        state.cursor = 3;

        state.apply_loaded(vec!["a".to_string()]);

        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn failure_empties_the_list() {
        let mut state = loaded(&["a"]);

        state.apply_failed("HTTP 500: oops".to_string());

        assert!(state.databases.is_empty());
        assert_eq!(state.view(), DatabasePanelView::Empty);
    }
}
