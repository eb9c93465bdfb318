//! Minimal dual-runtime extension scaffold.

use serde_json::json;

use vscreate_core::{
    application::{GenerateContext, Tint, ports::Template},
    error::CreateResult,
};

use super::{BUILD_SCRIPT, BUILD_SCRIPT_PATH, common, deno_manifest, jsr_manifest};

const DEFAULT_NAME: &str = "my-extension";

/// Activation stub registering a single hello-world command.
/// `{{PROJECT_NAME}}` is replaced with the resolved project name.
const EXTENSION_STUB: &str = r#"import { commands, window, ExtensionContext } from 'jsr:@typed/vscode@^1.101.0';

export function activate(ctx: ExtensionContext) {
  const disposable = commands.registerCommand('extension.helloWorld', () => {
    window.showInformationMessage('Hello from {{PROJECT_NAME}}!');
  });
  ctx.subscriptions.push(disposable);
}

export function deactivate() {}
"#;

/// The `basic` template: hello-world command and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTemplate;

impl Template for BasicTemplate {
    fn id(&self) -> &'static str {
        "basic"
    }

    fn name(&self) -> &'static str {
        "Basic Extension"
    }

    fn description(&self) -> &'static str {
        "Minimal dual-runtime VSCode extension scaffold."
    }

    fn generate(&self, ctx: &GenerateContext<'_>) -> CreateResult<()> {
        common::write_common_files(ctx)?;

        let name = ctx.options().project_name_or(DEFAULT_NAME);

        ctx.write_text(
            "README.md",
            &format!("# {name}\n\nGenerated with vscreate (basic template).\n"),
        )?;

        ctx.write_json("deno.json", &deno_manifest())?;
        ctx.write_json("jsr.json", &jsr_manifest(name))?;

        ctx.write_json(
            "package.json",
            &json!({
                "name": name,
                "displayName": name,
                "description": "A hello world extension generated with vscreate",
                "publisher": "your-publisher",
                "version": "0.0.0",
                "private": true,
                "categories": ["Other"],
                "engines": { "vscode": "^1.90.0" },
                "extensionKind": ["workspace", "web"],
                "main": "dist/extension.js",
                "browser": "dist/extension.js",
                "activationEvents": ["onCommand:extension.helloWorld"],
                "contributes": {
                    "commands": [
                        {
                            "command": "extension.helloWorld",
                            "title": "Hello World",
                        },
                    ],
                },
            }),
        )?;

        ctx.write_text(BUILD_SCRIPT_PATH, BUILD_SCRIPT)?;
        ctx.write_text(
            "src/extension.ts",
            &EXTENSION_STUB.replace("{{PROJECT_NAME}}", name),
        )?;

        ctx.log(
            "Generated deno.json, jsr.json, package.json, scripts/build.ts, and src/extension.ts",
            Tint::Green,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_stub_substitutes_project_name() {
        let code = EXTENSION_STUB.replace("{{PROJECT_NAME}}", "demo-ext");
        assert!(code.contains("Hello from demo-ext!"));
        assert!(code.contains("export function activate"));
        assert!(code.contains("export function deactivate"));
    }
}
