//! Side effects returned by the reducer, executed by EffectRunner.

use std::time::Duration;

use crate::action::Action;
use crate::domain::{QueryHandle, QueryMode};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Render,

    FetchDatabases,
    FetchTables {
        database: String,
        mount: u64,
    },
    FetchTableDetail {
        database: String,
        mount: u64,
        table: String,
    },

    ExecuteQuery {
        query: String,
    },
    /// Fetches the query record after `delay`.
    PollQuery {
        handle: QueryHandle,
        delay: Duration,
    },
    FetchQueryResult {
        handle: QueryHandle,
        mode: QueryMode,
    },
    CancelQuery {
        handle: QueryHandle,
    },

    /// Dispatch actions to be processed by the reducer
    DispatchActions(Vec<Action>),
}

impl Effect {
    /// Effects that call the query service.
    pub fn is_request(&self) -> bool {
        !matches!(self, Self::Render | Self::DispatchActions(_))
    }
}
