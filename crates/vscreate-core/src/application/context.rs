//! The per-invocation generation context.
//!
//! Bundles the resolved project directory, validated options, and the
//! filesystem/reporter ports, and provides the write helpers every template
//! uses. The helpers guarantee parent-directory creation before each write,
//! so templates never create directories by hand.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::application::error::ApplicationError;
use crate::application::ports::{Filesystem, Reporter, Tint};
use crate::domain::ValidatedOptions;
use crate::error::CreateResult;

/// Everything a template generator needs for one scaffold call.
///
/// Constructed fresh by the engine per invocation; borrowed by `generate`
/// for the duration of the call. No state survives the invocation.
pub struct GenerateContext<'a> {
    project_dir: PathBuf,
    options: ValidatedOptions,
    filesystem: &'a dyn Filesystem,
    reporter: &'a dyn Reporter,
}

impl<'a> GenerateContext<'a> {
    pub fn new(
        project_dir: PathBuf,
        options: ValidatedOptions,
        filesystem: &'a dyn Filesystem,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            project_dir,
            options,
            filesystem,
            reporter,
        }
    }

    /// The resolved absolute target directory.
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// The validated option set.
    pub fn options(&self) -> &ValidatedOptions {
        &self.options
    }

    /// Emit one progress line through the reporter.
    pub fn log(&self, msg: &str, tint: Tint) {
        self.reporter.emit(msg, tint);
    }

    /// Write UTF-8 text to `rel` inside the project directory, creating
    /// parent directories as needed.
    pub fn write_text(&self, rel: impl AsRef<Path>, content: &str) -> CreateResult<()> {
        let path = self.project_dir.join(rel.as_ref());
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        debug!(path = %path.display(), bytes = content.len(), "writing file");
        self.filesystem.write_file(&path, content)
    }

    /// Write a pretty-printed JSON file (trailing newline included) to `rel`
    /// inside the project directory.
    pub fn write_json(&self, rel: impl AsRef<Path>, value: &Value) -> CreateResult<()> {
        let rel = rel.as_ref();
        let text = serde_json::to_string_pretty(value).map_err(|e| ApplicationError::Serialize {
            path: self.project_dir.join(rel),
            reason: e.to_string(),
        })?;
        self.write_text(rel, &format!("{text}\n"))
    }
}
