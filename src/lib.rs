pub use lensql_app as app;
pub use lensql_domain as domain;
pub use lensql_infra as infra;
pub use lensql_ui as ui;

pub mod cli;
pub mod error;
