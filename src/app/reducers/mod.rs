mod explorer;
mod query;

pub use explorer::reduce_explorer;
pub use query::reduce_query;
