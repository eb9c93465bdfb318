//! The scaffold request - one immutable value per invocation.

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Loosely-typed options as supplied by the caller (prompts, flags, config).
///
/// Validated into [`super::ValidatedOptions`] before any file is written.
pub type OptionBag = serde_json::Map<String, Value>;

/// Options accepted by the top-level scaffold entry point.
///
/// Built once per invocation and immutable after entering the engine.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// Directory to create the project in. Resolved to an absolute path by
    /// the engine before any other step runs.
    pub project_dir: PathBuf,
    /// Selected template id (e.g. `"basic"`, `"treeview"`).
    pub template: String,
    /// Template-specific options. Defaults to an empty bag.
    pub options: OptionBag,
    /// Proceed even if the target directory is not empty.
    pub force: bool,
    /// Disable colored progress output.
    pub no_color: bool,
}

impl ScaffoldRequest {
    /// Create a request with default flags and an empty option bag.
    pub fn new(project_dir: impl AsRef<Path>, template: impl Into<String>) -> Self {
        Self {
            project_dir: project_dir.as_ref().to_path_buf(),
            template: template.into(),
            options: OptionBag::new(),
            force: false,
            no_color: false,
        }
    }

    /// Add a single option to the bag.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Replace the whole option bag.
    pub fn options(mut self, options: OptionBag) -> Self {
        self.options = options;
        self
    }

    /// Set the overwrite flag.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Set the color-output flag.
    pub fn no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }
}
