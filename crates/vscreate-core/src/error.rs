//! Unified error handling for vscreate Core.
//!
//! This module provides a root error type wrapping domain and application
//! errors, so callers handle one enum at the crate boundary.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for vscreate operations.
#[derive(Debug, Error, Clone)]
pub enum CreateError {
    /// Errors from the domain layer (option contract violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, serialization).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl CreateError {
    /// `true` for errors the engine recovers from before any file is written
    /// (logged and swallowed), `false` for generation-phase failures that
    /// propagate to the caller.
    pub fn is_pre_generation(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

/// Convenient result type alias.
pub type CreateResult<T> = Result<T, CreateError>;
