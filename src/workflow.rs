//! Generates the CI release workflow from the platform and signing selection.
//!
//! The document is always produced whole; the existing workflow file is
//! replaced, never patched.

use std::collections::BTreeSet;
use std::path::Path;

use crate::config::{Platform, SigningMethod};
use crate::constants::{paths, DRY_RUN_PREFIX};
use crate::error::Result;
use crate::ext::PathExt;
use crate::ioutils::write_file;
use crate::rewrite::dry_run_prefix;
use crate::status;

/// Matrix rows are emitted in this order regardless of selection order.
const MATRIX_ORDER: [Platform; 4] =
    [Platform::MacosArm64, Platform::MacosX64, Platform::Linux, Platform::Windows];

/// Linux runner image, also referenced by the dependency step's condition.
const LINUX_RUNNER: &str = "ubuntu-22.04";

const HEADER: &str = r#"name: Publish Release

on:
  push:
    tags:
      - "v*"

permissions:
  contents: write

jobs:
  publish-tauri:
    strategy:
      fail-fast: false
      matrix:
        include:
"#;

const TOOLCHAIN_STEPS: &str = r#"

    runs-on: ${{ matrix.platform }}
    steps:
      - uses: actions/checkout@v4

      - name: Setup Bun
        uses: oven-sh/setup-bun@v2
        with:
          bun-version: latest

      - name: Install Rust stable
        uses: dtolnay/rust-toolchain@stable
        with:
          targets: ${{ matrix.rust_targets }}

      - name: Rust cache
        uses: swatinem/rust-cache@v2
        with:
          workspaces: "./src-tauri -> target"
"#;

const LINUX_DEPENDENCIES_STEP: &str = r#"
      - name: Install dependencies (Ubuntu only)
        if: matrix.platform == 'ubuntu-22.04'
        run: |
          sudo apt-get update
          sudo apt-get install -y libwebkit2gtk-4.1-dev libappindicator3-dev librsvg2-dev patchelf
"#;

const BUILD_STEP: &str = r#"
      - name: Install frontend dependencies
        run: bun install --frozen-lockfile

      - name: Build Tauri app
        uses: tauri-apps/tauri-action@v0
        env:
          GITHUB_TOKEN: ${{ secrets.GITHUB_TOKEN }}"#;

const RELEASE_SETTINGS: &str = r#"
        with:
          tagName: ${{ github.ref_name }}
          releaseName: "${{ github.ref_name }}"
          releaseBody: "See [CHANGELOG](https://github.com/${{ github.repository }}/blob/main/CHANGELOG.md) for details."
          releaseDraft: true
          prerelease: false
          includeUpdaterJson: true
          args: ${{ matrix.args }}
"#;

/// One entry of the build matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixRow {
    pub runner: &'static str,
    /// Extra arguments for the build action; empty for the host target.
    pub args: &'static str,
    /// Additional compiler targets to install; empty for the host target.
    pub rust_targets: &'static str,
}

impl MatrixRow {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::MacosArm64 => MatrixRow {
                runner: "macos-latest",
                args: "--target aarch64-apple-darwin",
                rust_targets: "aarch64-apple-darwin",
            },
            Platform::MacosX64 => MatrixRow {
                runner: "macos-latest",
                args: "--target x86_64-apple-darwin",
                rust_targets: "x86_64-apple-darwin",
            },
            Platform::Linux => MatrixRow { runner: LINUX_RUNNER, args: "", rust_targets: "" },
            Platform::Windows => MatrixRow { runner: "windows-latest", args: "", rust_targets: "" },
        }
    }

    fn render(&self) -> String {
        fn scalar(value: &str) -> &str {
            if value.is_empty() { "\"\"" } else { value }
        }
        format!(
            "          - platform: {}\n            args: {}\n            rust_targets: {}",
            self.runner,
            scalar(self.args),
            scalar(self.rust_targets)
        )
    }
}

/// Comment line and secret names the build step needs for a signing method.
fn signing_secrets(method: SigningMethod) -> (&'static str, &'static [&'static str]) {
    match method {
        SigningMethod::Macos => (
            "macOS code signing",
            &[
                "APPLE_CERTIFICATE",
                "APPLE_CERTIFICATE_PASSWORD",
                "APPLE_SIGNING_IDENTITY",
                "APPLE_ID",
                "APPLE_PASSWORD",
                "APPLE_TEAM_ID",
            ],
        ),
        SigningMethod::Windows => (
            "Windows/Tauri updater signing",
            &["TAURI_SIGNING_PRIVATE_KEY", "TAURI_SIGNING_PRIVATE_KEY_PASSWORD"],
        ),
    }
}

fn render_signing_env(method: SigningMethod) -> String {
    let (comment, secrets) = signing_secrets(method);
    let mut block = format!("          # {comment}");
    for secret in secrets {
        block.push_str(&format!("\n          {secret}: ${{{{ secrets.{secret} }}}}"));
    }
    block
}

/// Builds the complete release workflow document.
///
/// The output depends only on the two sets, so the same selection always
/// yields byte-identical text.
pub fn generate(platforms: &BTreeSet<Platform>, signing: &BTreeSet<SigningMethod>) -> String {
    let rows: Vec<String> = MATRIX_ORDER
        .iter()
        .filter(|platform| platforms.contains(*platform))
        .map(|platform| MatrixRow::for_platform(*platform).render())
        .collect();

    let signing_env: Vec<String> = SigningMethod::ALL
        .iter()
        .filter(|method| signing.contains(*method))
        .map(|method| render_signing_env(*method))
        .collect();

    let mut document = String::from(HEADER);
    document.push_str(&rows.join("\n"));
    document.push_str(TOOLCHAIN_STEPS);
    if platforms.contains(&Platform::Linux) {
        document.push_str(LINUX_DEPENDENCIES_STEP);
    }
    document.push_str(BUILD_STEP);
    if !signing_env.is_empty() {
        document.push('\n');
        document.push_str(&signing_env.join("\n"));
    }
    document.push_str(RELEASE_SETTINGS);
    document
}

/// Replaces the publish workflow with one generated for the selection.
///
/// # Returns
/// * `Result<bool>` - `false` when the project has no publish workflow to replace
pub fn write_workflow(
    root: &Path,
    platforms: &BTreeSet<Platform>,
    signing: &BTreeSet<SigningMethod>,
    dry_run: bool,
) -> Result<bool> {
    let target = root.join(paths::PUBLISH_WORKFLOW);
    if !target.exists() {
        status::warn("publish.yml not found, skipping workflow customization");
        return Ok(false);
    }

    let document = generate(platforms, signing);
    if dry_run {
        log::debug!("{DRY_RUN_PREFIX}Would write {} bytes to {}", document.len(), target.display());
    } else {
        write_file(&document, &target)?;
    }
    status::success(&format!(
        "{}Updated {} with selected platforms",
        dry_run_prefix(dry_run),
        target.relative_to(root)
    ));
    Ok(true)
}
