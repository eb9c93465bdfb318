//! Application layer errors.
//!
//! These errors represent infrastructure failures during generation, not
//! option-contract violations. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur while generating files.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Serializing manifest content to JSON failed.
    #[error("failed to serialize JSON for {path}: {reason}")]
    Serialize { path: PathBuf, reason: String },
}
