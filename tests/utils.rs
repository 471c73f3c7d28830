#![allow(dead_code)]

use personalize::bootstrap::CommandRunner;
use personalize::cli::{Args, RunReport, Runner};
use personalize::prompt::AutomaticPrompter;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Answers used by the end-to-end fixtures.
pub const DEMO_ANSWERS: &str = r#"{
    "projectName": "demo-app",
    "productName": "Demo App",
    "owner": "acme",
    "author": "Jane Doe",
    "description": "A demo desktop app",
    "platforms": ["macos-arm64", "linux"],
    "signing": [],
    "agents": ["claude"]
}"#;

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// Copies a fixture tree into `dest`, creating it if needed.
pub fn copy_tree(source: &Path, dest: &Path) {
    for entry in WalkDir::new(source).into_iter().filter_map(Result::ok) {
        let rel = entry.path().strip_prefix(source).unwrap();
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Copies the pristine template fixture to `<workspace>/<dir_name>` and returns that path.
pub fn template_copy(workspace: &Path, dir_name: &str) -> PathBuf {
    let root = workspace.join(dir_name);
    copy_tree(&fixture("template"), &root);
    root
}

pub fn args_for(root: &Path, answers: Option<&str>) -> Args {
    Args {
        root: root.to_path_buf(),
        verbose: 2,
        answers: answers.map(|a| a.to_string()),
        non_interactive: true,
        dry_run: false,
        assume: None,
    }
}

/// Runs a non-interactive setup with the given command runner.
pub fn run_with(args: Args, commands: &dyn CommandRunner) -> RunReport {
    let prompter = AutomaticPrompter::new();
    Runner::new(args, &prompter, commands).run().unwrap()
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let collect = |dir: &Path| -> std::collections::BTreeSet<PathBuf> {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
            .collect()
    };
    let files1 = collect(dir1);
    let files2 = collect(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?} (only in actual)", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?} (only in expected)", file);
    }
    for file in files1.intersection(&files2) {
        let actual = fs::read_to_string(dir1.join(file)).unwrap_or_default();
        let expected = fs::read_to_string(dir2.join(file)).unwrap_or_default();
        if actual != expected {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{actual}");
            println!("  --- Expected content:\n{expected}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts two trees are identical, printing the differences first when they are not.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    let different = dir_diff::is_different(actual, expected).unwrap();
    if different {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}
