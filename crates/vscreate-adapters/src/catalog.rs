//! The builtin template catalog.
//!
//! A compile-time registry: template identifiers map to fixed entries at
//! build time, so lookup cannot produce a half-formed template and the
//! catalog is exhaustively enumerable in tests.

use tracing::debug;

use vscreate_core::application::ports::{Template, TemplateCatalog, TemplateInfo};

use crate::templates::{BasicTemplate, LanguageServerTemplate, TreeviewTemplate, WebviewTemplate};

/// Every template that ships with vscreate, in listing order.
static TEMPLATES: &[&dyn Template] = &[
    &BasicTemplate,
    &TreeviewTemplate,
    &WebviewTemplate,
    &LanguageServerTemplate,
];

/// Catalog over the builtin template set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    /// Create the builtin catalog.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCatalog for BuiltinCatalog {
    fn resolve(&self, id: &str) -> Option<&dyn Template> {
        let found = TEMPLATES.iter().copied().find(|t| t.id() == id);
        debug!(id, resolved = found.is_some(), "catalog lookup");
        found
    }

    fn list(&self) -> Vec<TemplateInfo> {
        TEMPLATES
            .iter()
            .map(|t| TemplateInfo::from_template(*t))
            .collect()
    }
}
