pub mod api_result;
pub mod filter;
pub mod list;
pub mod load_state;
pub mod metastore;
pub mod query;
pub mod query_handle;
pub mod query_mode;
pub mod query_plan;
pub mod result_set;
pub mod session;

pub use api_result::{ApiResult, ApiStatus};
pub use filter::QueryFilter;
pub use list::{deserialize_list, list_from_value};
pub use load_state::LoadState;
pub use metastore::{Cube, NativeTable, TableColumn};
pub use query::{LensQuery, QueryState, QueryStatus};
pub use query_handle::{QueryHandle, QueryHandleError};
pub use query_mode::{QueryMode, QueryModeError};
pub use query_plan::QueryPlan;
pub use result_set::{InMemoryResultSet, QueryResult, ResultColumn, ResultRow, ResultSetMetadata};
pub use session::SessionToken;
