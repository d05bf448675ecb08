//! One-shot operations behind the `lensql` subcommands.
//!
//! Each operation returns the text to print. Backend and file failures come
//! back as [`CommandError`]; outcomes the user should simply read (an invalid
//! `--store` directory, a failed query) come back as text.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    LensQuery, QueryFilter, QueryHandle, QueryHandleError, QueryResult, QueryState, SessionToken,
};
use crate::ports::{QueryService, QueryServiceError, ResultWriteError, ResultWriter};
use crate::query_pane::DEFAULT_POLL_INTERVAL;
use crate::report;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Service(#[from] QueryServiceError),
    #[error(transparent)]
    InvalidHandle(#[from] QueryHandleError),
    #[error(transparent)]
    Write(#[from] ResultWriteError),
    #[error("Could not encode {what}: {message}")]
    Encode { what: String, message: String },
    #[error("No user given; pass --user or set session.user in the config file")]
    MissingUser,
}

pub struct QueryCommands {
    service: Arc<dyn QueryService>,
    writer: Arc<dyn ResultWriter>,
    token: SessionToken,
    poll_interval: Duration,
}

impl QueryCommands {
    pub fn new(
        service: Arc<dyn QueryService>,
        writer: Arc<dyn ResultWriter>,
        token: SessionToken,
    ) -> Self {
        Self {
            service,
            writer,
            token,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub async fn databases(&self) -> Result<String, CommandError> {
        let databases = self.service.list_databases(&self.token).await?;
        Ok(report::name_list(&databases, "No databases found"))
    }

    pub async fn tables(&self, database: &str) -> Result<String, CommandError> {
        let tables = self.service.list_tables(&self.token, database).await?;
        Ok(report::name_list(
            &tables,
            &format!("No tables found in {database}"),
        ))
    }

    pub async fn table(&self, database: &str, table: &str) -> Result<String, CommandError> {
        let detail = self
            .service
            .get_table_details(&self.token, database, table)
            .await?;
        Ok(report::table_report(&detail))
    }

    pub async fn cubes(&self) -> Result<String, CommandError> {
        let cubes = self.service.list_cubes(&self.token).await?;
        Ok(report::name_list(&cubes, "No cubes found"))
    }

    pub async fn cube(&self, name: &str) -> Result<String, CommandError> {
        let cube = self.service.get_cube_details(&self.token, name).await?;
        serde_json::to_string_pretty(&cube).map_err(|e| CommandError::Encode {
            what: format!("cube {name}"),
            message: e.to_string(),
        })
    }

    /// Async mode prints the handle. Otherwise waits for the query to finish
    /// and reports its results.
    pub async fn execute(
        &self,
        query: &str,
        name: Option<String>,
        asynchronous: bool,
        store: Option<&Path>,
    ) -> Result<String, CommandError> {
        let store = non_empty(store);
        if let Some(dir) = store
            && !self.writer.is_valid_location(dir)
        {
            return Ok(report::INVALID_STORE_LOCATION.to_string());
        }

        let handle = self.service.execute_query(&self.token, query, name).await?;
        tracing::info!(handle = %handle, asynchronous, "query submitted");
        if asynchronous {
            return Ok(handle.to_string());
        }

        let finished = self.wait_for_completion(&handle).await?;
        self.finished_report(&finished, store).await
    }

    /// Prints the plan, or the planner's error message when it has one.
    pub async fn explain(&self, query: &str) -> Result<String, CommandError> {
        let plan = self.service.explain_query(&self.token, query).await?;
        Ok(plan.display_text().to_string())
    }

    pub async fn status(&self, handle: &str) -> Result<String, CommandError> {
        let handle = QueryHandle::parse(handle)?;
        let query = self.service.get_query(&self.token, &handle).await?;
        Ok(report::status_report(&query.status))
    }

    pub async fn list(
        &self,
        state: Option<String>,
        user: Option<&str>,
    ) -> Result<String, CommandError> {
        let user = user
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(CommandError::MissingUser)?;
        let filter = QueryFilter { state };
        let queries = self
            .service
            .list_queries(&self.token, user, &filter)
            .await?;
        Ok(report::query_list(&queries))
    }

    pub async fn kill(&self, handle: &str) -> Result<String, CommandError> {
        let handle = QueryHandle::parse(handle)?;
        let result = self.service.cancel_query(&self.token, &handle).await?;
        if !result.is_success() {
            tracing::warn!(handle = %handle, message = ?result.message, "cancel rejected");
        }
        Ok(report::kill_report(&handle, &result))
    }

    /// Results of a previously submitted query, waiting for it to finish first.
    pub async fn results(&self, handle: &str, store: Option<&Path>) -> Result<String, CommandError> {
        let store = non_empty(store);
        if let Some(dir) = store
            && !self.writer.is_valid_location(dir)
        {
            return Ok(report::INVALID_STORE_LOCATION.to_string());
        }

        let handle = QueryHandle::parse(handle)?;
        let finished = self.wait_for_completion(&handle).await?;
        self.finished_report(&finished, store).await
    }

    pub fn download_url(&self, handle: &str) -> Result<String, CommandError> {
        let handle = QueryHandle::parse(handle)?;
        Ok(self.service.get_download_url(&self.token, &handle))
    }

    /// Polls the query record until its state is terminal.
    pub async fn wait_for_completion(
        &self,
        handle: &QueryHandle,
    ) -> Result<LensQuery, CommandError> {
        loop {
            let query = self.service.get_query(&self.token, handle).await?;
            let state = query.state();
            if state.is_terminal() {
                tracing::debug!(handle = %handle, state = %state, "query finished");
                return Ok(query);
            }
            tracing::trace!(handle = %handle, state = %state, "query still running");
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn finished_report(
        &self,
        query: &LensQuery,
        store: Option<&Path>,
    ) -> Result<String, CommandError> {
        if query.state() != QueryState::Successful {
            return Ok(unsuccessful_report(query));
        }

        let handle = query.handle();
        let result = self
            .service
            .get_query_result(&self.token, handle, Some(query.mode()))
            .await?;

        match result {
            QueryResult::InMemory {
                result_set,
                metadata,
            } => {
                let text = report::in_memory_report(query, &result_set, &metadata);
                match store {
                    Some(dir) => {
                        let path = self.writer.write_result(dir, handle, &text)?;
                        Ok(format!("Results stored at {}", path.display()))
                    }
                    None => Ok(text),
                }
            }
            QueryResult::Persistent { download_url } => {
                Ok(report::persistent_report(&download_url))
            }
        }
    }
}

fn unsuccessful_report(query: &LensQuery) -> String {
    query
        .status
        .error_message
        .clone()
        .or_else(|| query.status.status_message.clone())
        .unwrap_or_else(|| format!("Query {} ended as {}", query.handle(), query.state()))
}

/// `--store ""` behaves as if no directory was given.
fn non_empty(store: Option<&Path>) -> Option<&Path> {
    store.filter(|p| !p.as_os_str().is_empty())
}
