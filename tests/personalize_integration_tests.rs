use personalize::bootstrap::ScriptedRunner;
use personalize::cli::Runner;
use personalize::config::Platform;
use personalize::context::RepositoryState;
use personalize::prompt::AutomaticPrompter;
use std::fs;
use std::process::Command;
use tempfile::TempDir;
use test_log::test;

mod utils;
use utils::{args_for, assert_same_tree, fixture, run_with, template_copy, DEMO_ANSWERS};

#[test]
fn personalizes_fresh_copy() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), "demo-app");
    let commands = ScriptedRunner::new();

    let report = run_with(args_for(&root, Some(DEMO_ANSWERS)), &commands);

    assert_eq!(report.state, RepositoryState::FreshCopy);
    let answers = report.answers.expect("answers are recorded for a completed run");
    assert_eq!(answers.bundle_identifier, "com.acme.demo-app");
    assert_eq!(
        answers.target_platforms.iter().copied().collect::<Vec<_>>(),
        vec![Platform::MacosArm64, Platform::Linux]
    );
    assert!(report.rewrites.is_clean());
    assert!(report.workflow_written);
    assert_eq!(report.removed, vec!["scripts/setup", ".github/TEMPLATE_README.md", "suggestions.md"]);

    assert_same_tree(&root, &fixture("expected/demo-app"));

    let publish = fs::read_to_string(root.join(".github/workflows/publish.yml")).unwrap();
    assert_eq!(publish.matches("- platform:").count(), 2);
    assert!(publish.contains("Install dependencies (Ubuntu only)"));
    assert!(!publish.contains("APPLE_CERTIFICATE"));
    assert!(!publish.contains("TAURI_SIGNING_PRIVATE_KEY"));

    assert_eq!(
        commands.calls(),
        vec![
            "git init",
            "bunx @intellectronica/ruler apply",
            "bunx lefthook install",
            "cargo generate-lockfile",
            "bun install",
            "git add -A",
            "git commit --no-verify -m feat: initial commit",
        ]
    );
}

#[test]
fn second_run_is_skipped() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), "demo-app");
    run_with(args_for(&root, Some(DEMO_ANSWERS)), &ScriptedRunner::new());

    let commands = ScriptedRunner::new();
    let report = run_with(args_for(&root, Some(DEMO_ANSWERS)), &commands);

    assert_eq!(report.state, RepositoryState::AlreadyConfigured);
    assert!(report.answers.is_none());
    assert!(commands.calls().is_empty());
    assert_same_tree(&root, &fixture("expected/demo-app"));
}

#[test]
fn forced_rerun_changes_nothing() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), "demo-app");
    run_with(args_for(&root, Some(DEMO_ANSWERS)), &ScriptedRunner::new());

    let mut args = args_for(&root, Some(DEMO_ANSWERS));
    args.assume = Some(RepositoryState::FreshCopy);
    let report = run_with(args, &ScriptedRunner::new());

    assert_eq!(report.state, RepositoryState::FreshCopy);
    assert!(report.rewrites.changed.is_empty());
    assert!(report.removed.is_empty());
    assert_same_tree(&root, &fixture("expected/demo-app"));
}

#[test]
fn failing_commands_do_not_abort_the_run() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), "demo-app");
    let commands = ScriptedRunner::new().fail_on("git").fail_on("bun install");

    let report = run_with(args_for(&root, Some(DEMO_ANSWERS)), &commands);

    assert!(report.answers.is_some());
    assert!(!root.join("suggestions.md").exists());
    assert!(!root.join("scripts/setup").exists());
    assert_same_tree(&root, &fixture("expected/demo-app"));

    let calls = commands.calls();
    assert!(!calls.contains(&"bunx lefthook install".to_string()));
    assert!(!calls.iter().any(|c| c.starts_with("git commit")));
    assert_eq!(calls.last().unwrap(), "git add -A");
}

#[test]
fn dry_run_leaves_tree_untouched() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), "demo-app");
    let commands = ScriptedRunner::new();

    let mut args = args_for(&root, Some(DEMO_ANSWERS));
    args.dry_run = true;
    let report = run_with(args, &commands);

    assert!(!report.rewrites.changed.is_empty());
    assert!(!report.removed.is_empty());
    assert!(commands.calls().is_empty());
    assert_same_tree(&root, &fixture("template"));
}

#[test]
fn defaults_fill_missing_answers() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), "shop-floor");

    let report = run_with(args_for(&root, None), &ScriptedRunner::new());

    let answers = report.answers.unwrap();
    assert_eq!(answers.project_name, "shop-floor");
    assert_eq!(answers.owner_account, "example");
    assert_eq!(answers.bundle_identifier, "com.example.shop-floor");
    assert!(answers.author.is_none());

    let license = fs::read_to_string(root.join("LICENSE")).unwrap();
    assert!(license.contains("Copyright (c) 2025\n"));
    let package = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(package.contains("\"name\": \"shop-floor\""));
    serde_json::from_str::<serde_json::Value>(&package).unwrap();
}

#[test]
fn settings_file_is_honored_and_removed() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), "demo-app");
    fs::write(
        root.join(".personalize.yml"),
        "commit_message: \"chore: personalize template\"\ntemplate_only_files:\n  - suggestions.md\n",
    )
    .unwrap();
    let commands = ScriptedRunner::new();

    let report = run_with(args_for(&root, Some(DEMO_ANSWERS)), &commands);

    assert_eq!(report.removed, vec!["suggestions.md", ".personalize.yml"]);
    assert!(!root.join(".personalize.yml").exists());
    assert!(root.join("scripts/setup/README.md").exists());
    assert_eq!(
        commands.calls().last().unwrap(),
        "git commit --no-verify -m chore: personalize template"
    );
}

#[test]
fn zero_platforms_keep_the_template_workflow() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), "demo-app");
    let answers = r#"{"projectName": "demo-app", "owner": "acme", "platforms": [], "signing": [], "agents": []}"#;

    let report = run_with(args_for(&root, Some(answers)), &ScriptedRunner::new());

    assert!(report.answers.unwrap().target_platforms.is_empty());
    assert!(!report.workflow_written);
    assert_eq!(
        fs::read(root.join(".github/workflows/publish.yml")).unwrap(),
        fs::read(fixture("template").join(".github/workflows/publish.yml")).unwrap()
    );
}

#[test]
fn broken_settings_in_fresh_copy_is_an_error() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), "demo-app");
    fs::write(root.join(".personalize.yaml"), "template: [unclosed").unwrap();
    let prompter = AutomaticPrompter::new();
    let commands = ScriptedRunner::new();

    let result = Runner::new(args_for(&root, Some(DEMO_ANSWERS)), &prompter, &commands).run();

    assert!(result.is_err());
    assert!(commands.calls().is_empty());
    assert!(root.join("suggestions.md").exists());
    assert_eq!(
        fs::read_to_string(root.join("package.json")).unwrap(),
        fs::read_to_string(fixture("template").join("package.json")).unwrap()
    );
}

#[test]
fn escaped_errors_do_not_fail_the_install() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), "demo-app");
    fs::write(root.join(".personalize.yaml"), "template: [unclosed").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_personalize"))
        .arg(&root)
        .arg("--non-interactive")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse YAML"), "unexpected stderr: {stderr}");
    assert!(root.join("suggestions.md").exists());
}
