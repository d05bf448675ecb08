use async_trait::async_trait;

use super::request::HttpRequest;
use crate::app::ports::QueryServiceError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<TransportError> for QueryServiceError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Request(message) => Self::Transport(message),
            TransportError::Status { status, body } => Self::Status { status, body },
        }
    }
}

/// Sends one request and yields the body of a successful response.
/// Non-success statuses are errors carrying the body untouched.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<String, TransportError>;
}
