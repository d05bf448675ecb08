use std::time::Duration;

use crate::domain::{LensQuery, QueryHandle, QueryResult};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryPhase {
    #[default]
    Idle,
    Submitting,
    Running(QueryHandle),
    Fetching(QueryHandle),
    Done,
    Failed(String),
}

impl QueryPhase {
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Self::Submitting | Self::Running(_) | Self::Fetching(_)
        )
    }
}

#[derive(Debug, Clone)]
pub struct QueryPaneState {
    pub input: String,
    pub phase: QueryPhase,
    /// Latest record polled for the current query.
    pub record: Option<LensQuery>,
    pub result: Option<QueryResult>,
    pub result_scroll: usize,
    pub poll_interval: Duration,
}

impl Default for QueryPaneState {
    fn default() -> Self {
        Self {
            input: String::new(),
            phase: QueryPhase::Idle,
            record: None,
            result: None,
            result_scroll: 0,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl QueryPaneState {
    /// Handle of the query still being tracked, if any.
    pub fn active_handle(&self) -> Option<&QueryHandle> {
        match &self.phase {
            QueryPhase::Running(handle) | QueryPhase::Fetching(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn is_current(&self, handle: &QueryHandle) -> bool {
        self.active_handle() == Some(handle)
    }

    pub fn result_row_count(&self) -> usize {
        match &self.result {
            Some(QueryResult::InMemory { result_set, .. }) => result_set.row_count(),
            _ => 0,
        }
    }

    pub fn scroll_down(&mut self) {
        if self.result_scroll + 1 < self.result_row_count() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InMemoryResultSet, ResultRow, ResultSetMetadata};

    #[test]
    fn only_running_or_fetching_queries_are_tracked() {
        let handle = QueryHandle::new("h1");
        let mut pane = QueryPaneState::default();
        assert!(pane.active_handle().is_none());

        pane.phase = QueryPhase::Running(handle.clone());
        assert!(pane.is_current(&handle));
        assert!(!pane.is_current(&QueryHandle::new("h2")));

        pane.phase = QueryPhase::Done;
        assert!(!pane.is_current(&handle));
    }

    #[test]
    fn scroll_is_bounded_by_rows() {
        let mut pane = QueryPaneState {
            result: Some(QueryResult::InMemory {
                result_set: InMemoryResultSet {
                    rows: vec![ResultRow::default(), ResultRow::default()],
                },
                metadata: ResultSetMetadata::default(),
            }),
            ..Default::default()
        };

        pane.scroll_down();
        pane.scroll_down();
        assert_eq!(pane.result_scroll, 1);

        pane.scroll_up();
        pane.scroll_up();
        assert_eq!(pane.result_scroll, 0);
    }
}
