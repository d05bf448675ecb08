use std::path::{Path, PathBuf};

use crate::domain::QueryHandle;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResultWriteError {
    #[error("Could not create {path}: {message}")]
    CreateDir { path: String, message: String },
    #[error("Could not write {path}: {message}")]
    Write { path: String, message: String },
}

#[cfg_attr(test, mockall::automock)]
pub trait ResultWriter: Send + Sync {
    /// True when `dir` exists and is a directory.
    fn is_valid_location(&self, dir: &Path) -> bool;

    /// Writes `content` under `dir/<handle>/` and returns the file written.
    fn write_result(
        &self,
        dir: &Path,
        handle: &QueryHandle,
        content: &str,
    ) -> Result<PathBuf, ResultWriteError>;
}
