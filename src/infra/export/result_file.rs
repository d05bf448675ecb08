use std::fs;
use std::path::{Path, PathBuf};

use crate::app::ports::{ResultWriteError, ResultWriter};
use crate::domain::QueryHandle;

const RESULT_FILE_NAME: &str = "result.txt";

/// Writes query output to `<dir>/<handle>/result.txt`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsResultWriter;

impl ResultWriter for FsResultWriter {
    fn is_valid_location(&self, dir: &Path) -> bool {
        dir.is_dir()
    }

    fn write_result(
        &self,
        dir: &Path,
        handle: &QueryHandle,
        content: &str,
    ) -> Result<PathBuf, ResultWriteError> {
        let handle_dir = dir.join(handle.as_str());
        fs::create_dir_all(&handle_dir).map_err(|e| ResultWriteError::CreateDir {
            path: handle_dir.display().to_string(),
            message: e.to_string(),
        })?;

        let path = handle_dir.join(RESULT_FILE_NAME);
        fs::write(&path, content).map_err(|e| ResultWriteError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let path = fs::canonicalize(&path).unwrap_or(path);
        tracing::info!(path = %path.display(), "stored query results");
        Ok(path)
    }
}
