//! Lens REST adapter: one method per logical operation of [`QueryService`].

use async_trait::async_trait;
use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::app::ports::{QueryService, QueryServiceError};
use crate::domain::{
    ApiResult, Cube, InMemoryResultSet, LensQuery, NativeTable, QueryFilter, QueryHandle,
    QueryMode, QueryPlan, QueryResult, ResultSetMetadata, SessionToken, list_from_value,
};
use crate::http::{HttpRequest, HttpTransport};

const DATABASES: &str = "metastore/databases";
const CUBES: &str = "metastore/cubes";
const NATIVE_TABLES: &str = "metastore/nativetables";
const QUERIES: &str = "queryapi/queries";

pub struct LensQueryAdapter<T> {
    transport: T,
    base_url: String,
}

impl<T: HttpTransport> LensQueryAdapter<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn query_url(&self, handle: &QueryHandle) -> String {
        format!("{}{QUERIES}/{handle}", self.base_url)
    }

    async fn fetch(&self, request: HttpRequest) -> Result<(String, Value), QueryServiceError> {
        let url = request.path().to_string();
        let body = self.transport.send(request).await?;
        if body.trim().is_empty() {
            return Ok((url, Value::Null));
        }
        let value = serde_json::from_str(&body).map_err(|e| decode_error(&url, &e))?;
        Ok((url, value))
    }

    async fn fetch_one<R: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<R, QueryServiceError> {
        let (url, value) = self.fetch(request).await?;
        serde_json::from_value(value).map_err(|e| decode_error(&url, &e))
    }

    async fn fetch_list<R: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<Vec<R>, QueryServiceError> {
        let (url, value) = self.fetch(request).await?;
        list_from_value(value).map_err(|e| decode_error(&url, &e))
    }

    /// Result payloads are sometimes wrapped in a single-key envelope.
    async fn fetch_wrapped<R: DeserializeOwned>(
        &self,
        request: HttpRequest,
        expected_key: &str,
    ) -> Result<R, QueryServiceError> {
        let (url, value) = self.fetch(request).await?;
        let value = unwrap_envelope(value, expected_key);
        serde_json::from_value(value).map_err(|e| decode_error(&url, &e))
    }

    async fn in_memory_result(
        &self,
        token: &SessionToken,
        handle: &QueryHandle,
    ) -> Result<QueryResult, QueryServiceError> {
        let (result_set, metadata) = self.get_in_memory_results(token, handle).await?;
        Ok(QueryResult::InMemory {
            result_set,
            metadata,
        })
    }
}

#[async_trait]
impl<T: HttpTransport> QueryService for LensQueryAdapter<T> {
    #[tracing::instrument(level = "debug", skip_all)]
    async fn list_databases(&self, token: &SessionToken) -> Result<Vec<String>, QueryServiceError> {
        let request = HttpRequest::get(self.url(DATABASES)).param("sessionid", token.as_str());
        self.fetch_list(request).await
    }

    #[tracing::instrument(level = "debug", skip_all)]
    async fn list_cubes(&self, token: &SessionToken) -> Result<Vec<String>, QueryServiceError> {
        let request = HttpRequest::get(self.url(CUBES)).param("sessionid", token.as_str());
        self.fetch_list(request).await
    }

    #[tracing::instrument(level = "debug", skip(self, token))]
    async fn get_cube_details(
        &self,
        token: &SessionToken,
        name: &str,
    ) -> Result<Cube, QueryServiceError> {
        let request = HttpRequest::get(self.url(&format!("{CUBES}/{name}")))
            .param("sessionid", token.as_str());
        self.fetch_wrapped(request, "name").await
    }

    #[tracing::instrument(level = "debug", skip(self, token))]
    async fn list_tables(
        &self,
        token: &SessionToken,
        database: &str,
    ) -> Result<Vec<String>, QueryServiceError> {
        let request = HttpRequest::get(self.url(NATIVE_TABLES))
            .param("sessionid", token.as_str())
            .param("dbName", database);
        self.fetch_list(request).await
    }

    #[tracing::instrument(level = "debug", skip(self, token))]
    async fn get_table_details(
        &self,
        token: &SessionToken,
        database: &str,
        table: &str,
    ) -> Result<NativeTable, QueryServiceError> {
        let request = HttpRequest::get(self.url(&format!("{NATIVE_TABLES}/{database}.{table}")))
            .param("sessionid", token.as_str());
        self.fetch_wrapped(request, "name").await
    }

    #[tracing::instrument(level = "debug", skip(self, token, query))]
    async fn execute_query(
        &self,
        token: &SessionToken,
        query: &str,
        name: Option<String>,
    ) -> Result<QueryHandle, QueryServiceError> {
        let mut request = HttpRequest::post(self.url(QUERIES))
            .field("sessionid", token.as_str())
            .field("query", query)
            .field("operation", "execute");
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            request = request.field("queryName", name);
        }
        self.fetch_wrapped(request, "handleId").await
    }

    #[tracing::instrument(level = "debug", skip(self, token, query))]
    async fn explain_query(
        &self,
        token: &SessionToken,
        query: &str,
    ) -> Result<QueryPlan, QueryServiceError> {
        let request = HttpRequest::post(self.url(QUERIES))
            .field("sessionid", token.as_str())
            .field("query", query)
            .field("operation", "explain");
        self.fetch_wrapped(request, "hasError").await
    }

    #[tracing::instrument(level = "debug", skip(self, token, handle), fields(handle = %handle))]
    async fn get_query(
        &self,
        token: &SessionToken,
        handle: &QueryHandle,
    ) -> Result<LensQuery, QueryServiceError> {
        let request = HttpRequest::get(self.query_url(handle)).param("sessionid", token.as_str());
        self.fetch_wrapped(request, "queryHandle").await
    }

    #[tracing::instrument(level = "debug", skip(self, token))]
    async fn list_queries(
        &self,
        token: &SessionToken,
        user: &str,
        filter: &QueryFilter,
    ) -> Result<Vec<LensQuery>, QueryServiceError> {
        let mut request = HttpRequest::get(self.url(QUERIES))
            .param("sessionid", token.as_str())
            .param("user", user);
        if let Some(state) = filter.state_param() {
            request = request.param("state", state);
        }
        let handles: Vec<QueryHandle> = self.fetch_list(request).await?;
        tracing::debug!(count = handles.len(), "fetching query records");

        let fetches = handles.iter().map(|handle| {
            let request = HttpRequest::get(self.query_url(handle))
                .param("sessionid", token.as_str())
                .param("queryHandle", handle.as_str());
            self.fetch_wrapped::<LensQuery>(request, "queryHandle")
        });
        try_join_all(fetches).await
    }

    #[tracing::instrument(level = "debug", skip(self, token, handle), fields(handle = %handle))]
    async fn get_query_result(
        &self,
        token: &SessionToken,
        handle: &QueryHandle,
        mode: Option<QueryMode>,
    ) -> Result<QueryResult, QueryServiceError> {
        let mode = match mode {
            Some(mode) => mode,
            None => self.get_query(token, handle).await?.mode(),
        };
        match mode {
            QueryMode::Persistent => Ok(QueryResult::Persistent {
                download_url: self.get_download_url(token, handle),
            }),
            QueryMode::InMemory => self.in_memory_result(token, handle).await,
        }
    }

    #[tracing::instrument(level = "debug", skip(self, token, handle), fields(handle = %handle))]
    async fn get_in_memory_results(
        &self,
        token: &SessionToken,
        handle: &QueryHandle,
    ) -> Result<(InMemoryResultSet, ResultSetMetadata), QueryServiceError> {
        let base = self.query_url(handle);
        let rows = HttpRequest::get(format!("{base}/resultset")).param("sessionid", token.as_str());
        let meta =
            HttpRequest::get(format!("{base}/resultsetmetadata")).param("sessionid", token.as_str());

        futures::try_join!(
            self.fetch_wrapped::<InMemoryResultSet>(rows, "rows"),
            self.fetch_wrapped::<ResultSetMetadata>(meta, "columns"),
        )
    }

    fn get_download_url(&self, token: &SessionToken, handle: &QueryHandle) -> String {
        format!(
            "{}/httpresultset?sessionid={}",
            self.query_url(handle),
            urlencoding::encode(token.as_str())
        )
    }

    #[tracing::instrument(level = "debug", skip(self, token, handle), fields(handle = %handle))]
    async fn cancel_query(
        &self,
        token: &SessionToken,
        handle: &QueryHandle,
    ) -> Result<ApiResult, QueryServiceError> {
        let url = format!(
            "{}?sessionid={}",
            self.query_url(handle),
            urlencoding::encode(token.as_str())
        );
        self.fetch_one(HttpRequest::delete(url)).await
    }
}

/// Ensures the base URL ends with exactly one `/` so paths can be appended.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    format!("{trimmed}/")
}

/// Descends into a single-key object until `expected_key` is present.
fn unwrap_envelope(value: Value, expected_key: &str) -> Value {
    if let Value::Object(map) = &value
        && map.len() == 1
        && !map.contains_key(expected_key)
        && let Some(inner @ Value::Object(_)) = map.values().next()
    {
        return unwrap_envelope(inner.clone(), expected_key);
    }
    value
}

fn decode_error(url: &str, e: &serde_json::Error) -> QueryServiceError {
    tracing::warn!(url = %url, error = %e, "could not decode response");
    QueryServiceError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    }
}
