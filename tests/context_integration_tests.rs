use git2::Repository;
use personalize::bootstrap::ScriptedRunner;
use personalize::config::TemplateIdentity;
use personalize::context::{detect, RepositoryState};
use tempfile::TempDir;
use test_log::test;

mod utils;
use utils::{args_for, assert_same_tree, fixture, run_with, template_copy, DEMO_ANSWERS};

const TEMPLATE_NAME: &str = "create-tauri-react-app";

#[test]
fn template_checkout_is_detected_by_directory_name() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), TEMPLATE_NAME);
    Repository::init(&root).unwrap();

    let state = detect(&root, &TemplateIdentity::default(), None);
    assert_eq!(state, RepositoryState::TemplateSource);
}

#[test]
fn template_checkout_is_detected_by_remote() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), "checkout");
    let repo = Repository::init(&root).unwrap();
    repo.remote("origin", "https://github.com/somus/create-tauri-react-app.git").unwrap();

    let state = detect(&root, &TemplateIdentity::default(), None);
    assert_eq!(state, RepositoryState::TemplateSource);
}

#[test]
fn generated_repository_is_fresh() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), "demo-app");
    let repo = Repository::init(&root).unwrap();
    repo.remote("origin", "https://github.com/acme/demo-app.git").unwrap();

    let state = detect(&root, &TemplateIdentity::default(), None);
    assert_eq!(state, RepositoryState::FreshCopy);
}

#[test]
fn directory_name_only_counts_inside_a_repository() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), TEMPLATE_NAME);

    let state = detect(&root, &TemplateIdentity::default(), None);
    assert_eq!(state, RepositoryState::FreshCopy);
}

#[test]
fn template_checkout_is_never_modified() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), TEMPLATE_NAME);
    let repo = Repository::init(&root).unwrap();
    repo.remote("origin", "https://github.com/somus/create-tauri-react-app.git").unwrap();
    let commands = ScriptedRunner::new();

    let report = run_with(args_for(&root, Some(DEMO_ANSWERS)), &commands);

    assert_eq!(report.state, RepositoryState::TemplateSource);
    assert!(report.answers.is_none());
    assert!(commands.calls().is_empty());

    // Compare without the repository metadata the test itself created.
    std::fs::remove_dir_all(root.join(".git")).unwrap();
    assert_same_tree(&root, &fixture("template"));
}

#[test]
fn template_checkout_with_broken_settings_is_skipped() {
    let workspace = TempDir::new().unwrap();
    let root = template_copy(workspace.path(), TEMPLATE_NAME);
    Repository::init(&root).unwrap();
    std::fs::write(root.join(".personalize.yaml"), "template: [unclosed").unwrap();
    let commands = ScriptedRunner::new();

    let report = run_with(args_for(&root, Some(DEMO_ANSWERS)), &commands);

    assert_eq!(report.state, RepositoryState::TemplateSource);
    assert!(report.answers.is_none());
    assert!(commands.calls().is_empty());
    assert!(root.join(".personalize.yaml").exists());
}
