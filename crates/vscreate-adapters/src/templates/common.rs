//! Files common to every template: ignore rules and editor support.

use serde_json::json;
use tracing::debug;

use vscreate_core::{
    application::{GenerateContext, Tint},
    error::CreateResult,
};

const GITIGNORE: &str = "# Deno
/deno.lock

# VSCE bundle output
dist/
.vscode-test/

# misc
.DS_Store
";

/// Write the fixed support-file set shared by all templates: `.gitignore`,
/// `.vscode/extensions.json`, `.vscode/tasks.json`, `.vscode/launch.json`.
/// One green line per file. No option influences the output.
pub fn write_common_files(ctx: &GenerateContext<'_>) -> CreateResult<()> {
    debug!("writing common support files");

    ctx.write_text(".gitignore", GITIGNORE)?;
    ctx.log("Created .gitignore", Tint::Green);

    ctx.write_json(
        ".vscode/extensions.json",
        &json!({
            "recommendations": ["denoland.vscode-deno"],
        }),
    )?;
    ctx.log("Created .vscode/extensions.json", Tint::Green);

    ctx.write_json(
        ".vscode/tasks.json",
        &json!({
            "version": "2.0.0",
            "tasks": [
                {
                    "label": "Build Extension",
                    "type": "shell",
                    "command": "deno task build",
                    "group": "build",
                    "problemMatcher": [],
                },
                {
                    "label": "Test",
                    "type": "shell",
                    "command": "deno task test",
                    "group": "test",
                    "problemMatcher": [],
                },
            ],
        }),
    )?;
    ctx.log("Created .vscode/tasks.json", Tint::Green);

    ctx.write_json(
        ".vscode/launch.json",
        &json!({
            "version": "0.2.0",
            "configurations": [
                {
                    "name": "Run Extension",
                    "type": "pwa-node",
                    "request": "launch",
                    "program": "${workspaceFolder}/scripts/build.ts",
                    "cwd": "${workspaceFolder}",
                    "runtimeExecutable": "deno",
                    "runtimeArgs": ["run", "-A"],
                    "console": "integratedTerminal",
                    "outputCapture": "std",
                },
            ],
        }),
    )?;
    ctx.log("Created .vscode/launch.json", Tint::Green);

    Ok(())
}
