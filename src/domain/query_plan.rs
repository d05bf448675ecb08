use serde::{Deserialize, Serialize};

/// Answer to an explain request. The service reports planning failures in the
/// body rather than through the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryPlan {
    pub plan_string: Option<String>,
    pub has_error: bool,
    pub error_msg: Option<String>,
}

impl QueryPlan {
    /// The text shown to the user: the error message when planning failed,
    /// the plan otherwise.
    pub fn display_text(&self) -> &str {
        let text = if self.has_error {
            self.error_msg.as_deref()
        } else {
            self.plan_string.as_deref()
        };
        text.unwrap_or_default()
    }
}
