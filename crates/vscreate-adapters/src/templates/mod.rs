//! Builtin template catalog entries.
//!
//! Each submodule is one fixed (id, name, description, generate) entry. All
//! entries delegate option validation to the shared baseline and follow the
//! same generation pattern: common support files, then README, manifests,
//! build stub, and source stubs. The only runtime decision anywhere is
//! substituting the project name.

pub mod basic;
pub mod common;
pub mod language_server;
pub mod treeview;
pub mod webview;

pub use basic::BasicTemplate;
pub use language_server::LanguageServerTemplate;
pub use treeview::TreeviewTemplate;
pub use webview::WebviewTemplate;

use serde_json::{Value, json};

/// Relative path of the bundler-invocation stub every template writes.
pub const BUILD_SCRIPT_PATH: &str = "scripts/build.ts";

/// The build stub: calls the external `@vsce/bundler` collaborator with its
/// documented argument contract (project dir, entry point, output dir). The
/// collaborator is expected to produce `dist/extension.js`.
pub const BUILD_SCRIPT: &str = concat!(
    "import { bundleExtension } from \"jsr:@vsce/bundler\";\n",
    "await bundleExtension({ projectDir: Deno.cwd(), entryPoint: \"src/extension.ts\", ",
    "outDir: \"dist\", quiet: true });\n",
);

/// Deno runtime configuration shared by the non-LSP templates.
pub(crate) fn deno_manifest() -> Value {
    json!({
        "lint": { "rules": { "tags": ["recommended"] } },
        "fmt": { "options": { "useTabs": false, "lineWidth": 80 } },
        "nodeModulesDir": "auto",
        "imports": {
            "vscode": "jsr:@typed/vscode@^1.101.0",
            "@typed/vscode": "jsr:@typed/vscode@^1.101.0",
        },
        "tasks": {
            "build": "deno run -A scripts/build.ts",
            "test": "deno test -A",
        },
    })
}

/// Registry manifest (`jsr.json`) shared by every template.
pub(crate) fn jsr_manifest(name: &str) -> Value {
    json!({
        "name": name,
        "version": "0.0.0",
        "exports": { ".": "./mod.ts" },
    })
}
