use crate::domain::{ApiResult, LensQuery, NativeTable, QueryHandle, QueryResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Quit,
    Render,
    Resize(u16, u16),
    ToggleFocus,
    Escape,

    // Navigation within the focused pane
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    ConfirmSelection,

    // Database panel
    LoadDatabases,
    ToggleDatabasePanel,
    DatabasesLoaded(Vec<String>),
    DatabasesFailed(String),

    // Table tree; completions carry the database and mount they were requested for
    TablesLoaded {
        database: String,
        mount: u64,
        tables: Vec<String>,
    },
    TablesFailed {
        database: String,
        mount: u64,
        error: String,
    },
    TableDetailLoaded {
        database: String,
        mount: u64,
        table: String,
        detail: Box<NativeTable>,
    },
    TableDetailFailed {
        database: String,
        mount: u64,
        table: String,
        error: String,
    },

    // Query editor
    EnterQueryInput,
    ExitQueryInput,
    QueryInput(char),
    QueryBackspace,
    SubmitQuery,
    CancelQuery,

    // Query lifecycle
    QuerySubmitted(QueryHandle),
    QuerySubmitFailed(String),
    QueryPolled(Box<LensQuery>),
    QueryPollFailed {
        handle: QueryHandle,
        error: String,
    },
    QueryResultLoaded {
        handle: QueryHandle,
        result: Box<QueryResult>,
    },
    QueryResultFailed {
        handle: QueryHandle,
        error: String,
    },
    QueryCancelled {
        handle: QueryHandle,
        result: ApiResult,
    },
    QueryCancelFailed {
        handle: QueryHandle,
        error: String,
    },
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
