//! Webview extension scaffold demonstrating the Webview panel API.

use serde_json::json;

use vscreate_core::{
    application::{GenerateContext, Tint, ports::Template},
    error::CreateResult,
};

use super::{BUILD_SCRIPT, BUILD_SCRIPT_PATH, common, deno_manifest, jsr_manifest};

const DEFAULT_NAME: &str = "webview-extension";

/// Panel/markup stub: one command opening a panel with static HTML.
const EXTENSION_STUB: &str = r#"import { window, commands, ExtensionContext } from 'jsr:@typed/vscode@^1.101.0';

function getHtml(content: string): string {
  return `<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1.0" />
  <title>Webview Sample</title>
</head>
<body>
  <h1>Hello from Webview!</h1>
  <p>${content}</p>
</body>
</html>`;
}

export function activate(ctx: ExtensionContext) {
  const cmd = commands.registerCommand('webviewDemo.open', () => {
    const panel = window.createWebviewPanel('demo', 'Webview Demo', { viewColumn: 1, preserveFocus: false }, {});
    panel.webview.html = getHtml('This markup is served from your extension.');
  });
  ctx.subscriptions.push(cmd);
}

export function deactivate() {}
"#;

/// The `webview` template.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewTemplate;

impl Template for WebviewTemplate {
    fn id(&self) -> &'static str {
        "webview"
    }

    fn name(&self) -> &'static str {
        "Webview Extension"
    }

    fn description(&self) -> &'static str {
        "VSCode extension showcasing a custom Webview panel."
    }

    fn generate(&self, ctx: &GenerateContext<'_>) -> CreateResult<()> {
        common::write_common_files(ctx)?;

        let name = ctx.options().project_name_or(DEFAULT_NAME);

        ctx.write_text(
            "README.md",
            &format!("# {name}\n\nSample Webview extension scaffolded with vscreate.\n"),
        )?;

        ctx.write_json("deno.json", &deno_manifest())?;
        ctx.write_json("jsr.json", &jsr_manifest(name))?;

        ctx.write_json(
            "package.json",
            &json!({
                "name": name,
                "displayName": name,
                "description": "A Webview sample extension generated with vscreate",
                "publisher": "your-publisher",
                "version": "0.0.0",
                "private": true,
                "categories": ["Other"],
                "engines": { "vscode": "^1.90.0" },
                "extensionKind": ["workspace", "web"],
                "main": "dist/extension.js",
                "browser": "dist/extension.js",
                "activationEvents": ["onCommand:webviewDemo.open"],
                "contributes": {
                    "commands": [{
                        "command": "webviewDemo.open",
                        "title": "Open Webview Demo",
                    }],
                    "menus": {
                        "commandPalette": [{
                            "command": "webviewDemo.open",
                            "when": "!inWeb",
                        }],
                    },
                },
            }),
        )?;

        ctx.write_text(BUILD_SCRIPT_PATH, BUILD_SCRIPT)?;
        ctx.write_text("src/extension.ts", EXTENSION_STUB)?;

        ctx.log("Webview template generated", Tint::Green);
        Ok(())
    }
}
