//! Scaffold Engine - main application orchestrator.
//!
//! The engine coordinates one scaffold pipeline run:
//! 1. Absolutize the target directory and check the overwrite precondition
//! 2. Resolve the template from the catalog
//! 3. Validate caller options
//! 4. Invoke the template's generator
//!
//! Every pre-generation failure is recovered locally: one red reporter line
//! and a clean `Ok(())` return, with no files written. Generation failures
//! are the only errors the engine returns; files written before the failure
//! point stay in place (no rollback).

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{Filesystem, Reporter, TemplateCatalog, TemplateInfo, Tint},
    application::context::GenerateContext,
    domain::ScaffoldRequest,
    error::CreateResult,
};

/// Main scaffolding engine.
///
/// Stateless across invocations; each [`ScaffoldEngine::scaffold`] call is an
/// independent pipeline run.
pub struct ScaffoldEngine {
    catalog: Box<dyn TemplateCatalog>,
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn Reporter>,
}

impl ScaffoldEngine {
    /// Create a new engine with the given adapters.
    pub fn new(
        catalog: Box<dyn TemplateCatalog>,
        filesystem: Box<dyn Filesystem>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            catalog,
            filesystem,
            reporter,
        }
    }

    /// Scaffold a new project.
    ///
    /// Outcomes are communicated through reporter lines and filesystem
    /// state. The returned `Err` only ever carries generation-phase
    /// failures; everything earlier is logged and swallowed.
    #[instrument(
        skip_all,
        fields(
            template = %request.template,
            project_dir = %request.project_dir.display()
        )
    )]
    pub fn scaffold(&self, request: &ScaffoldRequest) -> CreateResult<()> {
        // 1. Resolve the target directory to an absolute path.
        let project_dir = match self.filesystem.absolutize(&request.project_dir) {
            Ok(dir) => dir,
            Err(e) => {
                warn!(error = %e, "could not resolve target directory");
                self.reporter.emit(
                    &format!(
                        "Cannot resolve target directory {}: {e}",
                        request.project_dir.display()
                    ),
                    Tint::Red,
                );
                return Ok(());
            }
        };

        // 2. Overwrite precondition: missing or empty directories proceed.
        if !request.force && self.filesystem.exists(&project_dir) {
            let empty = match self.filesystem.dir_is_empty(&project_dir) {
                Ok(empty) => empty,
                Err(e) => {
                    warn!(error = %e, "could not inspect target directory");
                    self.reporter.emit(
                        &format!("Cannot inspect target directory {}: {e}", project_dir.display()),
                        Tint::Red,
                    );
                    return Ok(());
                }
            };
            if !empty {
                warn!("target directory not empty and force not set");
                self.reporter.emit(
                    &format!(
                        "Target directory {} is not empty. Use force to overwrite.",
                        project_dir.display()
                    ),
                    Tint::Red,
                );
                return Ok(());
            }
        }

        // 3. Resolve the template.
        let Some(template) = self.catalog.resolve(&request.template) else {
            warn!("unknown template id");
            self.reporter.emit(
                &format!("Failed to load template '{}': unknown template id", request.template),
                Tint::Red,
            );
            return Ok(());
        };
        info!(template_name = template.name(), "template resolved");

        // 4. Validate template-specific options.
        let options = match template.validate(&request.options) {
            Ok(options) => options,
            Err(e) => {
                warn!(error = %e, "option validation failed");
                self.reporter
                    .emit(&format!("Option validation failed: {e}"), Tint::Red);
                return Ok(());
            }
        };

        // 5. Announce, then hand over to the generator. From here on any
        // error propagates; generation manages its own partial-failure
        // behavior (best effort, no rollback).
        self.reporter.emit(
            &format!("Scaffolding {} into {}", template.name(), project_dir.display()),
            Tint::Cyan,
        );

        let ctx = GenerateContext::new(
            project_dir,
            options,
            self.filesystem.as_ref(),
            self.reporter.as_ref(),
        );
        template.generate(&ctx)?;

        info!("scaffold completed");
        self.reporter
            .emit("✔ Project scaffolded successfully", Tint::Green);
        Ok(())
    }

    /// Describe every template the engine can scaffold.
    pub fn list_templates(&self) -> Vec<TemplateInfo> {
        self.catalog.list()
    }
}
