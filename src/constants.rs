//! Constants used throughout the setup engine

/// Settings file names in order of preference
pub const SETTINGS_FILENAMES: &[&str] =
    &[".personalize.yaml", ".personalize.yml", ".personalize.json"];

/// Marker file that pins the working tree as the template's own checkout
pub const TEMPLATE_MARKER_FILE: &str = ".template-source";

/// Project name offered when the directory still carries the template's name
pub const FALLBACK_PROJECT_NAME: &str = "my-app";

/// Prefix for status lines describing a change a dry run did not make
pub const DRY_RUN_PREFIX: &str = "[DRY RUN] ";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Files the engine reads or rewrites, relative to the project root
pub mod paths {
    pub const PACKAGE_JSON: &str = "package.json";
    pub const TAURI_CONF: &str = "src-tauri/tauri.conf.json";
    pub const NATIVE_MANIFEST: &str = "src-tauri/Cargo.toml";
    pub const NATIVE_MAIN: &str = "src-tauri/src/main.rs";
    pub const NATIVE_DIR: &str = "src-tauri";
    pub const INDEX_HTML: &str = "index.html";
    pub const LICENSE: &str = "LICENSE";
    pub const CONTRIBUTING: &str = "CONTRIBUTING.md";
    pub const README: &str = "README.md";
    pub const AGENTS_DOC: &str = ".ruler/AGENTS.md";
    pub const RULER_CONFIG: &str = ".ruler/ruler.toml";
    pub const PUBLISH_WORKFLOW: &str = ".github/workflows/publish.yml";
}

/// Defaults offered by the answer collector
pub mod defaults {
    pub const OWNER: &str = "example";
    pub const DESCRIPTION: &str = "A Tauri desktop application";
    pub const AGENT_PAGE_SIZE: usize = 15;
    pub const UPDATER_PUBKEY_PLACEHOLDER: &str = "YOUR_PUBLIC_KEY_HERE";
    pub const COMMIT_MESSAGE: &str = "feat: initial commit";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
