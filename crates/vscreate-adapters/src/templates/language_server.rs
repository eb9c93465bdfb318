//! Language Server extension scaffold: a simple LSP hosted in a web worker.

use serde_json::json;

use vscreate_core::{
    application::{GenerateContext, Tint, ports::Template},
    error::CreateResult,
};

use super::{BUILD_SCRIPT, BUILD_SCRIPT_PATH, common, jsr_manifest};

const DEFAULT_NAME: &str = "language-server-extension";

/// Client side: starts the worker-hosted language client and registers an
/// info command.
const EXTENSION_STUB: &str = r#"import { commands, window, ExtensionContext } from 'jsr:@typed/vscode@^1.101.0';
import { WorkerTransport, BrowserMessageReader, BrowserMessageWriter } from 'npm:vscode-languageclient@9.5.0/browser.mjs';

export function activate(ctx: ExtensionContext) {
  const transport = WorkerTransport.create(new URL('./server.ts', import.meta.url));
  const client = transport.createLanguageClient({
    name: 'Sample LSP',
    documentSelector: [{ scheme: 'file', language: 'plaintext' }],
  });
  ctx.subscriptions.push(client.start());

  const cmd = commands.registerCommand('lsp.showInfo', () => {
    window.showInformationMessage('Language server is running');
  });
  ctx.subscriptions.push(cmd);
}

export function deactivate() {};
"#;

/// Worker side: a minimal connection that publishes one informational
/// diagnostic when a document opens.
const SERVER_STUB: &str = r#"import { createConnection, ProposedFeatures, TextDocuments, Diagnostic, DiagnosticSeverity } from 'npm:vscode-languageserver@8.1.0/browser';

const connection = createConnection(ProposedFeatures.all);
const documents = new TextDocuments();

connection.onInitialize(() => ({
  capabilities: { textDocumentSync: documents.syncKind },
}));

documents.onDidOpen(({ document }) => {
  const diag: Diagnostic = {
    range: { start: { line: 0, character: 0 }, end: { line: 0, character: 1 } },
    message: 'LSP ready',
    severity: DiagnosticSeverity.Information,
  };
  connection.sendDiagnostics({ uri: document.uri, diagnostics: [diag] });
});

documents.listen(connection);
connection.listen();
"#;

/// The `language-server` template. The only entry that writes a second
/// source stub (`src/server.ts`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageServerTemplate;

impl Template for LanguageServerTemplate {
    fn id(&self) -> &'static str {
        "language-server"
    }

    fn name(&self) -> &'static str {
        "Language Server Extension"
    }

    fn description(&self) -> &'static str {
        "Scaffold for a VSCode Web extension that runs a simple language server in a web worker."
    }

    fn generate(&self, ctx: &GenerateContext<'_>) -> CreateResult<()> {
        common::write_common_files(ctx)?;

        let name = ctx.options().project_name_or(DEFAULT_NAME);

        ctx.write_text(
            "README.md",
            &format!(
                "# {name}\n\nThis template shows how to run a basic LSP in a Web Worker.\n"
            ),
        )?;

        // The LSP client ships over npm, so node_modules resolution is forced
        // on and the browser entry point is mapped explicitly.
        ctx.write_json(
            "deno.json",
            &json!({
                "lint": { "rules": { "tags": ["recommended"] } },
                "fmt": { "options": { "useTabs": false, "lineWidth": 80 } },
                "nodeModulesDir": true,
                "imports": {
                    "vscode": "jsr:@typed/vscode@^1.101.0",
                    "@typed/vscode": "jsr:@typed/vscode@^1.101.0",
                    "vscode-languageclient/browser": "npm:vscode-languageclient@9.5.0/browser.mjs",
                },
                "tasks": {
                    "build": "deno run -A scripts/build.ts",
                    "test": "deno test -A",
                },
            }),
        )?;
        ctx.write_json("jsr.json", &jsr_manifest(name))?;

        ctx.write_json(
            "package.json",
            &json!({
                "name": name,
                "displayName": name,
                "description": "A Language Server sample extension generated with vscreate",
                "publisher": "your-publisher",
                "version": "0.0.0",
                "private": true,
                "categories": ["Other"],
                "engines": { "vscode": "^1.90.0" },
                "extensionKind": ["workspace", "web"],
                "main": "dist/extension.js",
                "browser": "dist/extension.js",
                "activationEvents": [
                    "onCommand:lsp.showInfo",
                    "onLanguage:plaintext",
                ],
                "contributes": {
                    "commands": [{
                        "command": "lsp.showInfo",
                        "title": "Show LSP Info",
                    }],
                },
            }),
        )?;

        ctx.write_text(BUILD_SCRIPT_PATH, BUILD_SCRIPT)?;
        ctx.write_text("src/extension.ts", EXTENSION_STUB)?;
        ctx.write_text("src/server.ts", SERVER_STUB)?;

        ctx.log("Language-server template generated", Tint::Green);
        Ok(())
    }
}
