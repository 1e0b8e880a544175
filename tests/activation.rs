// tests/activation.rs

mod common;
use crate::common::{init_tracing, repo_config, write_file};

use std::path::PathBuf;

use presubmit_scope::cli::CliArgs;
use presubmit_scope::fs::mock::MockFileSystem;
use presubmit_scope::fs::RealFileSystem;
use presubmit_scope::graph::OutputFormat;
use presubmit_scope::run_with;
use tempfile::TempDir;

fn args(config: PathBuf, changed_files: Option<PathBuf>) -> CliArgs {
    CliArgs {
        config,
        changed_files,
        format: OutputFormat::Text,
        match_mode: None,
        with_affected: false,
        log_level: None,
        dry_run: false,
    }
}

#[test]
fn without_change_list_nothing_is_emitted() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let config = write_file(dir.path(), "Presubmit.toml", &repo_config("/repo"));

    // The change list would touch everything, but it is never consulted.
    let fs = MockFileSystem::new();
    fs.add_file("/diff.txt", "/repo/base/a\n/repo/app/b\n");

    let mut out = Vec::new();
    run_with(&args(config, None), &fs, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn without_change_list_config_is_never_loaded() {
    init_tracing();
    let mut out = Vec::new();
    run_with(
        &args(PathBuf::from("/nonexistent/Presubmit.toml"), None),
        &RealFileSystem,
        &mut out,
    )
    .unwrap();
    assert!(out.is_empty());
}

#[test]
fn missing_config_fails_when_change_list_is_given() {
    init_tracing();
    let fs = MockFileSystem::new();
    fs.add_file("/diff.txt", "/repo/base/a\n");

    let mut out = Vec::new();
    let err = run_with(
        &args(
            PathBuf::from("/nonexistent/Presubmit.toml"),
            Some(PathBuf::from("/diff.txt")),
        ),
        &fs,
        &mut out,
    )
    .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/Presubmit.toml"));
    assert!(out.is_empty());
}

#[test]
fn unreadable_change_list_skips_manifest_without_failing() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let config = write_file(dir.path(), "Presubmit.toml", &repo_config("/repo"));
    let missing = dir.path().join("does-not-exist.txt");

    let mut out = Vec::new();
    run_with(&args(config, Some(missing)), &RealFileSystem, &mut out).unwrap();
    assert!(out.is_empty(), "no umbrella task may be emitted");
}

#[test]
fn change_list_drives_umbrella_dependencies() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_string_lossy().into_owned();
    let config = write_file(dir.path(), "Presubmit.toml", &repo_config(&root));
    let diff = write_file(
        dir.path(),
        "presubmit_diff.txt",
        &format!("{root}/docs/README.md\n{root}/core/src/lib.rs\n{root}/core/Cargo.toml\n"),
    );

    let mut out = Vec::new();
    run_with(&args(config, Some(diff)), &RealFileSystem, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("task runPresubmitTests\n"));
    assert!(text.contains("  group: verification\n"));
    assert!(text.contains("  touched: [\"core\", \"docs\"]\n"));
    assert!(text.contains("  dependsOn: :core:buildDependents\n"));
    assert!(!text.contains(":docs:"));
    assert_eq!(text.matches("dependsOn").count(), 1);
}

#[test]
fn empty_change_list_emits_umbrella_with_no_dependencies() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let config = write_file(dir.path(), "Presubmit.toml", &repo_config("/repo"));
    let diff = write_file(dir.path(), "empty.txt", "");

    let mut out = Vec::new();
    run_with(&args(config, Some(diff)), &RealFileSystem, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("task runPresubmitTests"));
    assert!(text.contains("dependsOn: (none)"));
}

#[test]
fn relative_roots_resolve_against_config_dir_and_toml_output() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_string_lossy().into_owned();
    let config = write_file(
        dir.path(),
        "Presubmit.toml",
        r#"
[config]
umbrella_task = "presubmit"

[module.lib]
root = "lib"

[module.cli]
root = "cli"
depends_on = ["lib"]
dependents_task = "testDependents"
"#,
    );
    let diff = write_file(dir.path(), "diff.txt", &format!("{root}/lib/src/mod.rs\n"));

    let mut a = args(config, Some(diff));
    a.format = OutputFormat::Toml;
    a.with_affected = true;

    let mut out = Vec::new();
    run_with(&a, &RealFileSystem, &mut out).unwrap();
    let manifest: toml::Table = toml::from_str(&String::from_utf8(out).unwrap()).unwrap();

    assert_eq!(manifest["umbrella_task"].as_str(), Some("presubmit"));
    let affected: Vec<&str> = manifest["affected_modules"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(affected, vec!["cli", "lib"]);

    let edges = manifest["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0]["from"].as_str(), Some("presubmit"));
    assert_eq!(edges[0]["to"].as_str(), Some(":lib:buildDependents"));
}

#[test]
fn cli_match_mode_overrides_config() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let config = write_file(dir.path(), "Presubmit.toml", &repo_config("/repo"));
    let fs = MockFileSystem::new();
    fs.add_file("/diff.txt", "/repo/baseline/notes.txt\n");

    let mut literal = Vec::new();
    run_with(
        &args(config.clone(), Some(PathBuf::from("/diff.txt"))),
        &fs,
        &mut literal,
    )
    .unwrap();
    assert!(String::from_utf8(literal).unwrap().contains(":base:buildDependents"));

    let mut segment_args = args(config, Some(PathBuf::from("/diff.txt")));
    segment_args.match_mode = Some(presubmit_scope::types::MatchMode::SegmentAware);
    let mut segment = Vec::new();
    run_with(&segment_args, &fs, &mut segment).unwrap();
    assert!(String::from_utf8(segment).unwrap().contains("dependsOn: (none)"));
}

#[test]
fn dry_run_lists_modules_without_reading_changes() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let config = write_file(dir.path(), "Presubmit.toml", &repo_config("/repo"));

    let mut a = args(config, Some(dir.path().join("never-read.txt")));
    a.dry_run = true;

    let mut out = Vec::new();
    run_with(&a, &RealFileSystem, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("presubmit-scope dry-run\n"));
    assert!(text.contains("modules (4):"));
    assert!(text.contains("      dependents: :app:buildDependents\n"));
    assert!(text.contains("      dependents: (none)\n"));
    assert!(text.contains("      depends_on: [\"core\"]\n"));
}

#[test]
fn relative_config_path_yields_absolute_module_roots() {
    init_tracing();
    // Integration tests run from the package root; keep the temp dir under it
    // so the config can be addressed by a relative path.
    let dir = tempfile::Builder::new().tempdir_in(".").unwrap();
    let dir_name = dir.path().file_name().unwrap().to_owned();
    let abs_dir = std::env::current_dir().unwrap().join(&dir_name);

    write_file(
        dir.path(),
        "Presubmit.toml",
        r#"
[module.lib]
root = "lib"

[module.cli]
root = "./cli"
"#,
    );
    let diff = write_file(
        dir.path(),
        "diff.txt",
        &format!("{}/lib/src/mod.rs\n", abs_dir.to_string_lossy()),
    );

    let config = PathBuf::from(&dir_name).join("Presubmit.toml");
    assert!(config.is_relative());

    let mut out = Vec::new();
    run_with(&args(config, Some(diff)), &RealFileSystem, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("  touched: [\"lib\"]\n"), "{text}");
    assert!(text.contains("  dependsOn: :lib:buildDependents\n"));
}
