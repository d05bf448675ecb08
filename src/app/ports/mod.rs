pub mod query_service;
pub mod renderer;
pub mod result_writer;

pub use query_service::{QueryService, QueryServiceError};
pub use renderer::Renderer;
pub use result_writer::{ResultWriteError, ResultWriter};

#[cfg(test)]
pub use query_service::MockQueryService;
#[cfg(test)]
pub use result_writer::MockResultWriter;
