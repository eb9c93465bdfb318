//! Application layer for vscreate.
//!
//! This layer contains:
//! - **Engine**: the scaffold pipeline (resolve → validate → generate)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Context**: the per-invocation bundle handed to template generators
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but writes no files
//! itself; all I/O goes through the ports.

pub mod context;
pub mod engine;
pub mod error;
pub mod ports;

pub use context::GenerateContext;
pub use engine::ScaffoldEngine;
pub use error::ApplicationError;
pub use ports::{Filesystem, Reporter, Template, TemplateCatalog, TemplateInfo, Tint};
