//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use vscreate_core::{
    application::{ApplicationError, ports::Filesystem},
    error::CreateResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same backing store, so a test can hand one clone to the
/// engine and keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All file paths, sorted (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Number of files stored.
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }

    fn lock_err() -> vscreate_core::error::CreateError {
        ApplicationError::Filesystem {
            path: PathBuf::new(),
            reason: "memory filesystem lock poisoned".into(),
        }
        .into()
    }
}

impl Filesystem for MemoryFilesystem {
    fn absolutize(&self, path: &Path) -> CreateResult<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(Path::new("/").join(path))
        }
    }

    fn create_dir_all(&self, path: &Path) -> CreateResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_err())?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CreateResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_err())?;

        // Mirror real filesystem behavior: parent must exist.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn dir_is_empty(&self, path: &Path) -> CreateResult<bool> {
        let inner = self.inner.read().map_err(|_| Self::lock_err())?;

        let occupied = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .any(|p| p != path && p.starts_with(path));
        Ok(!occupied)
    }
}
