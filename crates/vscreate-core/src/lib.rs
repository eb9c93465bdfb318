//! vscreate Core - engine and ports for VS Code extension scaffolding.
//!
//! This crate provides the domain and application layers of the vscreate
//! scaffolding tool, following a ports-and-adapters layout.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        caller / automation layer        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            ScaffoldEngine               │
//! │   resolve → validate → generate → log   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │  (Filesystem, Reporter, TemplateCatalog)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    vscreate-adapters (Infrastructure)   │
//! │ (LocalFilesystem, ConsoleReporter, etc) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vscreate_core::{
//!     application::ScaffoldEngine,
//!     domain::ScaffoldRequest,
//! };
//!
//! // 1. Describe what to scaffold
//! let request = ScaffoldRequest::new("./my-extension", "basic");
//!
//! // 2. Run the engine (with injected adapters)
//! let engine = ScaffoldEngine::new(catalog, filesystem, reporter);
//! engine.scaffold(&request).unwrap();
//! ```

// Domain layer (request model, options, validation)
pub mod domain;

// Application layer (engine, ports, context)
pub mod application;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldEngine, TemplateInfo,
        context::GenerateContext,
        ports::{Filesystem, Reporter, Template, TemplateCatalog, Tint},
    };
    pub use crate::domain::{
        OptionBag, ScaffoldRequest, ValidatedOptions, validate_common_options,
    };
    pub use crate::error::{CreateError, CreateResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
