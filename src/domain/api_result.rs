use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiStatus {
    Succeeded,
    Partial,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Acknowledgement returned by mutating calls such as cancel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiResult {
    pub status: ApiStatus,
    pub message: Option<String>,
}

impl ApiResult {
    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Succeeded
    }
}
