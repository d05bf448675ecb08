use std::fmt;

use serde::{Deserialize, Serialize};

use super::query_handle::QueryHandle;
use super::query_mode::QueryMode;

/// Lifecycle state reported by the query service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryState {
    New,
    Queued,
    Launched,
    Running,
    Executed,
    Successful,
    Failed,
    Canceled,
    Closed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl QueryState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Successful | Self::Failed | Self::Canceled | Self::Closed
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Queued => "QUEUED",
            Self::Launched => "LAUNCHED",
            Self::Running => "RUNNING",
            Self::Executed => "EXECUTED",
            Self::Successful => "SUCCESSFUL",
            Self::Failed => "FAILED",
            Self::Canceled => "CANCELED",
            Self::Closed => "CLOSED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for QueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryStatus {
    #[serde(rename = "status")]
    pub state: QueryState,
    pub progress: f64,
    pub status_message: Option<String>,
    pub progress_message: Option<String>,
    pub error_message: Option<String>,
    pub is_result_set_available: bool,
}

/// A query record as returned by `GET queryapi/queries/{handle}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LensQuery {
    pub query_handle: QueryHandle,
    #[serde(default)]
    pub user_query: String,
    #[serde(default)]
    pub submitted_user: Option<String>,
    #[serde(default)]
    pub query_name: Option<String>,
    #[serde(default)]
    pub is_persistent: bool,
    #[serde(default)]
    pub status: QueryStatus,
    #[serde(default)]
    pub driver_query: Option<String>,
    #[serde(default)]
    pub result_set_path: Option<String>,
    /// Epoch millis.
    #[serde(default)]
    pub submission_time: i64,
    /// Epoch millis, 0 while unfinished.
    #[serde(default)]
    pub finish_time: i64,
}

impl LensQuery {
    pub fn handle(&self) -> &QueryHandle {
        &self.query_handle
    }

    pub fn state(&self) -> QueryState {
        self.status.state
    }

    pub fn mode(&self) -> QueryMode {
        QueryMode::from_persistent(self.is_persistent)
    }

    /// Whole seconds between submission and finish; 0 while unfinished.
    pub fn elapsed_secs(&self) -> i64 {
        if self.finish_time > 0 {
            (self.finish_time - self.submission_time) / 1000
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const RECORD: &str = r#"{
        "queryHandle": {"handleId": "h1"},
        "userQuery": "select * from sales",
        "submittedUser": "alice@example.com",
        "isPersistent": true,
        "status": {
            "status": "RUNNING",
            "progress": 0.5,
            "statusMessage": "Query is running",
            "isResultSetAvailable": false
        },
        "submissionTime": 1000,
        "finishTime": 0,
        "priority": "NORMAL"
    }"#;

    #[test]
    fn deserializes_query_record() {
        let query: LensQuery = serde_json::from_str(RECORD).unwrap();

        assert_eq!(query.handle().as_str(), "h1");
        assert_eq!(query.state(), QueryState::Running);
        assert_eq!(query.mode(), QueryMode::Persistent);
        assert_eq!(query.status.status_message.as_deref(), Some("Query is running"));
        assert_eq!(query.elapsed_secs(), 0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let query: LensQuery =
            serde_json::from_str(r#"{"queryHandle": {"handleId": "h2"}}"#).unwrap();

        assert_eq!(query.state(), QueryState::Unknown);
        assert_eq!(query.mode(), QueryMode::InMemory);
        assert!(query.user_query.is_empty());
    }

    #[test]
    fn unknown_state_maps_to_unknown() {
        let status: QueryStatus = serde_json::from_str(r#"{"status": "SUSPENDED"}"#).unwrap();

        assert_eq!(status.state, QueryState::Unknown);
    }

    #[rstest]
    #[case(QueryState::Successful, true)]
    #[case(QueryState::Failed, true)]
    #[case(QueryState::Canceled, true)]
    #[case(QueryState::Closed, true)]
    #[case(QueryState::Queued, false)]
    #[case(QueryState::Running, false)]
    #[case(QueryState::Executed, false)]
    fn terminal_states(#[case] state: QueryState, #[case] terminal: bool) {
        assert_eq!(state.is_terminal(), terminal);
    }

    #[test]
    fn elapsed_secs_uses_finish_time() {
        let mut query: LensQuery = serde_json::from_str(RECORD).unwrap();
        query.finish_time = 6500;

        assert_eq!(query.elapsed_secs(), 5);
    }
}
