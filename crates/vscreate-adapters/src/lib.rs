//! Infrastructure adapters for vscreate.
//!
//! This crate implements the ports defined in `vscreate_core::application::ports`
//! and ships the builtin template catalog. It contains all I/O.

pub mod catalog;
pub mod filesystem;
pub mod reporter;
pub mod templates;

// Re-export commonly used adapters
pub use catalog::BuiltinCatalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use reporter::{ConsoleReporter, RecordingReporter};

use vscreate_core::{application::ScaffoldEngine, domain::ScaffoldRequest, error::CreateResult};

/// Scaffold a project with the default production wiring: builtin catalog,
/// local filesystem, colored console output.
///
/// This is the stable programmatic entry point for automation and tooling.
/// Outcomes are communicated via console lines and filesystem state; the
/// returned `Err` only carries generation-phase failures (see
/// [`ScaffoldEngine::scaffold`]).
///
/// # Example
///
/// ```rust,no_run
/// use vscreate_adapters::scaffold_project;
/// use vscreate_core::domain::ScaffoldRequest;
///
/// let request = ScaffoldRequest::new("./my-extension", "basic").force(true);
/// scaffold_project(&request).unwrap();
/// ```
pub fn scaffold_project(request: &ScaffoldRequest) -> CreateResult<()> {
    let engine = ScaffoldEngine::new(
        Box::new(BuiltinCatalog::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(ConsoleReporter::new(!request.no_color)),
    );
    engine.scaffold(request)
}
