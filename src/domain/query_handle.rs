use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryHandleError {
    #[error("Query handle cannot be empty")]
    Empty,
    #[error("Invalid query handle '{0}': expected a UUID")]
    NotUuid(String),
}

/// Backend-issued identifier of a submitted query.
///
/// On the wire it is `{"handleId": "..."}`; a bare string is accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryHandle {
    handle_id: String,
}

impl QueryHandle {
    pub fn new(handle_id: impl Into<String>) -> Self {
        Self {
            handle_id: handle_id.into(),
        }
    }

    /// Parses a user-typed handle. Handles minted by the service are UUIDs.
    pub fn parse(input: &str) -> Result<Self, QueryHandleError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(QueryHandleError::Empty);
        }
        uuid::Uuid::parse_str(trimmed)
            .map_err(|_| QueryHandleError::NotUuid(trimmed.to_string()))?;
        Ok(Self::new(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.handle_id
    }
}

impl fmt::Display for QueryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.handle_id)
    }
}

impl<'de> Deserialize<'de> for QueryHandle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Bare(String),
            Object {
                #[serde(rename = "handleId")]
                handle_id: String,
            },
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Bare(handle_id) | Wire::Object { handle_id } => Self { handle_id },
        })
    }
}
