//! Full-pipeline tests: builtin catalog + memory filesystem + recording
//! reporter, exercising the documented behavior of every template.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use vscreate_adapters::{BuiltinCatalog, MemoryFilesystem, RecordingReporter};
use vscreate_core::{
    application::{ScaffoldEngine, Tint, ports::Filesystem},
    domain::ScaffoldRequest,
    error::CreateResult,
};

/// Files every template writes, relative to the project directory.
const COMMON_FILES: &[&str] = &[
    ".gitignore",
    ".vscode/extensions.json",
    ".vscode/launch.json",
    ".vscode/tasks.json",
    "README.md",
    "deno.json",
    "jsr.json",
    "package.json",
    "scripts/build.ts",
    "src/extension.ts",
];

fn run(request: &ScaffoldRequest) -> (MemoryFilesystem, RecordingReporter, CreateResult<()>) {
    let fs = MemoryFilesystem::new();
    let reporter = RecordingReporter::new();
    let engine = ScaffoldEngine::new(
        Box::new(BuiltinCatalog::new()),
        Box::new(fs.clone()),
        Box::new(reporter.clone()),
    );
    let result = engine.scaffold(request);
    (fs, reporter, result)
}

fn expected_files(root: &str, extras: &[&str]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = COMMON_FILES
        .iter()
        .chain(extras)
        .map(|rel| Path::new(root).join(rel))
        .collect();
    files.sort();
    files
}

#[test]
fn every_template_writes_exactly_its_documented_file_set() {
    let cases: &[(&str, &[&str])] = &[
        ("basic", &[]),
        ("treeview", &[]),
        ("webview", &[]),
        ("language-server", &["src/server.ts"]),
    ];

    for (template, extras) in cases {
        let (fs, _reporter, result) = run(&ScaffoldRequest::new("/proj", *template));
        result.unwrap();
        assert_eq!(
            fs.list_files(),
            expected_files("/proj", extras),
            "unexpected file set for template {template}"
        );
    }
}

#[test]
fn default_project_names_appear_in_readme_and_manifests() {
    let cases = [
        ("basic", "my-extension"),
        ("treeview", "treeview-extension"),
        ("webview", "webview-extension"),
        ("language-server", "language-server-extension"),
    ];

    for (template, default_name) in cases {
        let (fs, _reporter, result) = run(&ScaffoldRequest::new("/proj", template));
        result.unwrap();

        let readme = fs.read_file(Path::new("/proj/README.md")).unwrap();
        assert!(
            readme.starts_with(&format!("# {default_name}")),
            "[{template}] README heading: {readme}"
        );

        for manifest in ["package.json", "jsr.json"] {
            let content = fs.read_file(&Path::new("/proj").join(manifest)).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
            assert_eq!(
                parsed["name"], default_name,
                "[{template}] {manifest} name field"
            );
        }
    }
}

#[test]
fn supplied_project_name_replaces_the_default_everywhere() {
    for template in ["basic", "treeview", "webview", "language-server"] {
        let request = ScaffoldRequest::new("/proj", template).option("project_name", "acme-tools");
        let (fs, _reporter, result) = run(&request);
        result.unwrap();

        let readme = fs.read_file(Path::new("/proj/README.md")).unwrap();
        assert!(readme.starts_with("# acme-tools"), "[{template}] {readme}");

        for manifest in ["package.json", "jsr.json"] {
            let content = fs.read_file(&Path::new("/proj").join(manifest)).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
            assert_eq!(parsed["name"], "acme-tools", "[{template}] {manifest}");
        }
    }
}

#[test]
fn unknown_option_key_fails_validation_for_every_template() {
    for template in ["basic", "treeview", "webview", "language-server"] {
        let request = ScaffoldRequest::new("/proj", template).option("theme", "dark");
        let (fs, reporter, result) = run(&request);

        result.unwrap();
        assert_eq!(fs.file_count(), 0, "[{template}] wrote files");

        let reds = reporter.lines_with(Tint::Red);
        assert_eq!(reds.len(), 1, "[{template}] red lines: {reds:?}");
        assert!(reds[0].contains("Option validation failed"));
        assert!(reds[0].contains("theme"));
    }
}

#[test]
fn non_string_project_name_fails_naming_the_option() {
    let request = ScaffoldRequest::new("/proj", "basic").option("project_name", 7);
    let (fs, reporter, result) = run(&request);

    result.unwrap();
    assert_eq!(fs.file_count(), 0);
    let reds = reporter.lines_with(Tint::Red);
    assert_eq!(reds.len(), 1);
    assert!(reds[0].contains("project_name"));
}

#[test]
fn nonempty_target_without_force_is_left_untouched() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/proj")).unwrap();
    let fs_port = fs.clone();
    fs.write_file(Path::new("/proj/existing.txt"), "keep me").unwrap();

    let reporter = RecordingReporter::new();
    let engine = ScaffoldEngine::new(
        Box::new(BuiltinCatalog::new()),
        Box::new(fs_port),
        Box::new(reporter.clone()),
    );

    engine.scaffold(&ScaffoldRequest::new("/proj", "basic")).unwrap();

    assert_eq!(fs.list_files(), vec![PathBuf::from("/proj/existing.txt")]);
    assert_eq!(
        fs.read_file(Path::new("/proj/existing.txt")).as_deref(),
        Some("keep me")
    );

    let reds = reporter.lines_with(Tint::Red);
    assert_eq!(reds.len(), 1);
    assert!(reds[0].contains("/proj"));
    assert!(reds[0].contains("force"));
}

#[test]
fn empty_existing_target_proceeds_without_force() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/proj")).unwrap();

    let reporter = RecordingReporter::new();
    let engine = ScaffoldEngine::new(
        Box::new(BuiltinCatalog::new()),
        Box::new(fs.clone()),
        Box::new(reporter.clone()),
    );

    engine.scaffold(&ScaffoldRequest::new("/proj", "basic")).unwrap();

    assert!(reporter.lines_with(Tint::Red).is_empty());
    assert!(fs.exists(Path::new("/proj/README.md")));
}

#[test]
fn force_overwrites_a_populated_target() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/proj")).unwrap();
    fs.write_file(Path::new("/proj/stale.txt"), "old").unwrap();

    let reporter = RecordingReporter::new();
    let engine = ScaffoldEngine::new(
        Box::new(BuiltinCatalog::new()),
        Box::new(fs.clone()),
        Box::new(reporter.clone()),
    );

    engine
        .scaffold(&ScaffoldRequest::new("/proj", "basic").force(true))
        .unwrap();

    assert!(reporter.lines_with(Tint::Red).is_empty());
    assert!(fs.exists(Path::new("/proj/README.md")));
}

#[test]
fn unknown_template_writes_nothing_and_reports_once() {
    let (fs, reporter, result) = run(&ScaffoldRequest::new("/proj", "spaceship"));

    result.unwrap();
    assert_eq!(fs.file_count(), 0);

    let reds = reporter.lines_with(Tint::Red);
    assert_eq!(reds.len(), 1);
    assert!(reds[0].contains("'spaceship'"));
}

#[test]
fn scaffolding_twice_with_force_is_byte_identical() {
    let snapshot = |fs: &MemoryFilesystem| -> BTreeMap<PathBuf, String> {
        fs.list_files()
            .into_iter()
            .map(|p| {
                let content = fs.read_file(&p).unwrap();
                (p, content)
            })
            .collect()
    };

    let request = ScaffoldRequest::new("/proj", "treeview")
        .option("project_name", "stable-name")
        .force(true);

    let fs = MemoryFilesystem::new();
    let reporter = RecordingReporter::new();
    let engine = ScaffoldEngine::new(
        Box::new(BuiltinCatalog::new()),
        Box::new(fs.clone()),
        Box::new(reporter.clone()),
    );

    engine.scaffold(&request).unwrap();
    let first = snapshot(&fs);
    engine.scaffold(&request).unwrap();
    let second = snapshot(&fs);

    assert_eq!(first, second);
}

#[test]
fn build_stub_names_the_external_bundler() {
    for template in ["basic", "treeview", "webview", "language-server"] {
        let (fs, _reporter, result) = run(&ScaffoldRequest::new("/proj", template));
        result.unwrap();

        let build = fs.read_file(Path::new("/proj/scripts/build.ts")).unwrap();
        assert!(build.contains("@vsce/bundler"), "[{template}] {build}");
        assert!(build.contains("entryPoint: \"src/extension.ts\""));
        assert!(build.contains("outDir: \"dist\""));
    }
}

#[test]
fn language_server_template_writes_the_worker_stub() {
    let (fs, _reporter, result) = run(&ScaffoldRequest::new("/proj", "language-server"));
    result.unwrap();

    let server = fs.read_file(Path::new("/proj/src/server.ts")).unwrap();
    assert!(server.contains("createConnection"));
    assert!(server.contains("sendDiagnostics"));
}

#[test]
fn progress_lines_follow_the_documented_shape() {
    let (_fs, reporter, result) = run(&ScaffoldRequest::new("/proj", "basic"));
    result.unwrap();

    let lines = reporter.lines();
    // Headline first, then per-file progress, then the success line.
    assert!(lines[0].0.starts_with("Scaffolding Basic Extension into"));
    assert_eq!(lines[0].1, Tint::Cyan);
    assert!(lines.last().unwrap().0.contains("scaffolded successfully"));
    assert!(reporter.contains("Created .gitignore"));
}
