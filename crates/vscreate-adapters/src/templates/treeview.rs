//! Tree View extension scaffold demonstrating `TreeDataProvider` usage.

use serde_json::json;

use vscreate_core::{
    application::{GenerateContext, Tint, ports::Template},
    error::CreateResult,
};

use super::{BUILD_SCRIPT, BUILD_SCRIPT_PATH, common, deno_manifest, jsr_manifest};

const DEFAULT_NAME: &str = "treeview-extension";

/// Tree-structured UI data stub: a static two-item provider plus a refresh
/// command wired into the view title bar.
const EXTENSION_STUB: &str = r#"import { window, TreeDataProvider, TreeItem, EventEmitter, Event, commands, ExtensionContext } from 'jsr:@typed/vscode@^1.101.0';

class Node extends TreeItem {
  constructor(label: string) {
    super(label);
  }
}

class SimpleProvider implements TreeDataProvider<Node> {
  private readonly _onDidChangeTreeData = new EventEmitter<Node | undefined>();
  readonly onDidChangeTreeData: Event<Node | undefined> = this._onDidChangeTreeData.event;
  getTreeItem(element: Node) {
    return element;
  }
  getChildren(): Node[] {
    return [new Node('Item 1'), new Node('Item 2')];
  }
}

export function activate(ctx: ExtensionContext) {
  const provider = new SimpleProvider();
  window.createTreeView('sampleView', { treeDataProvider: provider });
  const refresh = commands.registerCommand('sampleView.refresh', () => provider['_onDidChangeTreeData'].fire(undefined));
  ctx.subscriptions.push(refresh);
}

export function deactivate() {}
"#;

/// The `treeview` template.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeviewTemplate;

impl Template for TreeviewTemplate {
    fn id(&self) -> &'static str {
        "treeview"
    }

    fn name(&self) -> &'static str {
        "Tree View Extension"
    }

    fn description(&self) -> &'static str {
        "VSCode extension showcasing a custom TreeView UI component."
    }

    fn generate(&self, ctx: &GenerateContext<'_>) -> CreateResult<()> {
        common::write_common_files(ctx)?;

        let name = ctx.options().project_name_or(DEFAULT_NAME);

        ctx.write_text(
            "README.md",
            &format!("# {name}\n\nSample TreeView extension scaffolded with vscreate.\n"),
        )?;

        ctx.write_json("deno.json", &deno_manifest())?;
        ctx.write_json("jsr.json", &jsr_manifest(name))?;

        ctx.write_json(
            "package.json",
            &json!({
                "name": name,
                "displayName": name,
                "description": "A Tree View sample extension generated with vscreate",
                "publisher": "your-publisher",
                "version": "0.0.0",
                "private": true,
                "categories": ["Other"],
                "engines": { "vscode": "^1.90.0" },
                "extensionKind": ["workspace", "web"],
                "main": "dist/extension.js",
                "browser": "dist/extension.js",
                "activationEvents": [
                    "onView:sampleView",
                    "onCommand:sampleView.refresh",
                ],
                "contributes": {
                    "commands": [
                        {
                            "command": "sampleView.refresh",
                            "title": "Refresh Items",
                        },
                    ],
                    "views": {
                        "explorer": [{ "id": "sampleView", "name": "Sample View" }],
                    },
                    "menus": {
                        "view/title": [
                            {
                                "command": "sampleView.refresh",
                                "when": "view == sampleView",
                                "group": "navigation",
                            },
                        ],
                    },
                },
            }),
        )?;

        ctx.write_text(BUILD_SCRIPT_PATH, BUILD_SCRIPT)?;
        ctx.write_text("src/extension.ts", EXTENSION_STUB)?;

        ctx.log("Treeview template generated", Tint::Green);
        Ok(())
    }
}
