use async_trait::async_trait;

use crate::domain::{
    ApiResult, Cube, InMemoryResultSet, LensQuery, NativeTable, QueryFilter, QueryHandle,
    QueryMode, QueryPlan, QueryResult, ResultSetMetadata, SessionToken,
};

/// Failures surfaced by a [`QueryService`]. Backend errors are passed through
/// untranslated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryServiceError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Unexpected response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Logical operations of the query service, one HTTP exchange (or a joined
/// fan-out of them) per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueryService: Send + Sync {
    async fn list_databases(&self, token: &SessionToken) -> Result<Vec<String>, QueryServiceError>;

    async fn list_cubes(&self, token: &SessionToken) -> Result<Vec<String>, QueryServiceError>;

    async fn get_cube_details(
        &self,
        token: &SessionToken,
        name: &str,
    ) -> Result<Cube, QueryServiceError>;

    async fn list_tables(
        &self,
        token: &SessionToken,
        database: &str,
    ) -> Result<Vec<String>, QueryServiceError>;

    async fn get_table_details(
        &self,
        token: &SessionToken,
        database: &str,
        table: &str,
    ) -> Result<NativeTable, QueryServiceError>;

    async fn execute_query(
        &self,
        token: &SessionToken,
        query: &str,
        name: Option<String>,
    ) -> Result<QueryHandle, QueryServiceError>;

    /// Plans `query` without running it. Planning errors come back inside the
    /// plan, not as `Err`.
    async fn explain_query(
        &self,
        token: &SessionToken,
        query: &str,
    ) -> Result<QueryPlan, QueryServiceError>;

    async fn get_query(
        &self,
        token: &SessionToken,
        handle: &QueryHandle,
    ) -> Result<LensQuery, QueryServiceError>;

    /// Fails as a whole if any per-handle fetch fails. Records keep the order
    /// of the handle listing.
    async fn list_queries(
        &self,
        token: &SessionToken,
        user: &str,
        filter: &QueryFilter,
    ) -> Result<Vec<LensQuery>, QueryServiceError>;

    /// With `mode == None` the query record is fetched first to learn the mode.
    async fn get_query_result(
        &self,
        token: &SessionToken,
        handle: &QueryHandle,
        mode: Option<QueryMode>,
    ) -> Result<QueryResult, QueryServiceError>;

    async fn get_in_memory_results(
        &self,
        token: &SessionToken,
        handle: &QueryHandle,
    ) -> Result<(InMemoryResultSet, ResultSetMetadata), QueryServiceError>;

    /// Built locally; no request is made.
    fn get_download_url(&self, token: &SessionToken, handle: &QueryHandle) -> String;

    async fn cancel_query(
        &self,
        token: &SessionToken,
        handle: &QueryHandle,
    ) -> Result<ApiResult, QueryServiceError>;
}
