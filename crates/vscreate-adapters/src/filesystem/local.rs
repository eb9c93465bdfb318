//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use vscreate_core::{application::ports::Filesystem, error::CreateResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn absolutize(&self, path: &Path) -> CreateResult<PathBuf> {
        std::path::absolute(path).map_err(|e| map_io_error(path, e, "resolve path"))
    }

    fn create_dir_all(&self, path: &Path) -> CreateResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> CreateResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn dir_is_empty(&self, path: &Path) -> CreateResult<bool> {
        let mut entries =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        Ok(entries.next().is_none())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> vscreate_core::error::CreateError {
    use vscreate_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}
