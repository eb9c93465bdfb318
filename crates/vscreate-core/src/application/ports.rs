//! Ports - trait seams between the engine and infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `vscreate-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::application::context::GenerateContext;
use crate::domain::{OptionBag, ValidatedOptions, validate_common_options};
use crate::error::CreateResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `vscreate_adapters::filesystem::LocalFilesystem` (production)
/// - `vscreate_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Resolve a path to an absolute path.
    fn absolutize(&self, path: &Path) -> CreateResult<PathBuf>;

    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> CreateResult<()>;

    /// Write UTF-8 content to a file, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> CreateResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a directory contains no entries.
    ///
    /// Only called for paths that [`Filesystem::exists`] reported present.
    fn dir_is_empty(&self, path: &Path) -> CreateResult<bool>;
}

/// Semantic colors for progress output.
///
/// Templates pick a tint by meaning (created file, headline, problem); how a
/// tint renders is the reporter's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Green,
    Cyan,
    Yellow,
    Red,
}

/// Port for user-facing progress lines.
///
/// Implemented by:
/// - `vscreate_adapters::ConsoleReporter` (colored terminal output)
/// - `vscreate_adapters::RecordingReporter` (captures lines for assertions)
///
/// Distinct from `tracing`: reporter lines are the product's output, tracing
/// events are diagnostics.
pub trait Reporter: Send + Sync {
    /// Emit one line with a semantic tint.
    fn emit(&self, msg: &str, tint: Tint);
}

/// One entry in the template catalog.
///
/// A template is a named, fixed file-generation routine. `generate` owns all
/// file writes for its invocation; `validate` defaults to the shared baseline
/// validator, which every current template uses unchanged.
pub trait Template: Send + Sync {
    /// Stable identifier used for catalog lookup (e.g. `"basic"`).
    fn id(&self) -> &'static str;

    /// Human-readable display name.
    fn name(&self) -> &'static str;

    /// One-line description for listings.
    fn description(&self) -> &'static str;

    /// Validate and normalize the caller's option bag.
    fn validate(&self, opts: &OptionBag) -> Result<ValidatedOptions, crate::domain::DomainError> {
        validate_common_options(opts)
    }

    /// Write the template's file set into the context's project directory.
    fn generate(&self, ctx: &GenerateContext<'_>) -> CreateResult<()>;
}

/// Port for template lookup.
///
/// A compile-time registry rather than runtime module loading: the catalog is
/// fixed, exhaustively enumerable, and lookup cannot produce a half-formed
/// template.
pub trait TemplateCatalog: Send + Sync {
    /// Resolve a template by identifier. `None` for unknown ids.
    fn resolve(&self, id: &str) -> Option<&dyn Template>;

    /// Describe every template in the catalog.
    fn list(&self) -> Vec<TemplateInfo>;
}

/// Information about a template for display purposes.
///
/// Serializable so listings can be emitted as JSON by outer tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl TemplateInfo {
    /// Build an info record from a catalog entry.
    pub fn from_template(template: &dyn Template) -> Self {
        Self {
            id: template.id().to_string(),
            name: template.name().to_string(),
            description: template.description().to_string(),
        }
    }
}
