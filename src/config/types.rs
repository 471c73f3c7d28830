//! Static catalogs and the template identity

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A release target the CI workflow can build for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "macos-arm64")]
    MacosArm64,
    #[serde(rename = "macos-x64")]
    MacosX64,
    #[serde(rename = "windows")]
    Windows,
    #[serde(rename = "linux")]
    Linux,
}

impl Platform {
    /// Every platform in the order the prompt lists them.
    pub const ALL: [Platform; 4] =
        [Platform::MacosArm64, Platform::MacosX64, Platform::Windows, Platform::Linux];

    pub fn tag(&self) -> &'static str {
        match self {
            Platform::MacosArm64 => "macos-arm64",
            Platform::MacosX64 => "macos-x64",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::MacosArm64 => "macOS (Apple Silicon)",
            Platform::MacosX64 => "macOS (Intel)",
            Platform::Windows => "Windows (x64)",
            Platform::Linux => "Linux (x64)",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A code-signing credential set the release workflow can consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningMethod {
    /// Apple Developer certificate
    Macos,
    /// Tauri updater signing key
    Windows,
}

impl SigningMethod {
    pub const ALL: [SigningMethod; 2] = [SigningMethod::Macos, SigningMethod::Windows];

    pub fn tag(&self) -> &'static str {
        match self {
            SigningMethod::Macos => "macos",
            SigningMethod::Windows => "windows",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SigningMethod::Macos => "macOS (Apple Developer certificate)",
            SigningMethod::Windows => "Windows (Tauri updater signing)",
        }
    }
}

impl Display for SigningMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Tooling agents ordered by popularity, then alphabetically.
pub const AGENTS: &[&str] = &[
    "claude",
    "cursor",
    "copilot",
    "opencode",
    "windsurf",
    "cline",
    "zed",
    "aider",
    "amp",
    "codex",
    "gemini-cli",
    "goose",
    "kiro",
    "roo",
    "agentsmd",
    "amazonqcli",
    "antigravity",
    "augmentcode",
    "crush",
    "firebase",
    "firebender",
    "jules",
    "junie",
    "kilocode",
    "openhands",
    "qwen",
    "trae",
    "warp",
];

/// The fixed choice lists offered to the user.
///
/// Kept as plain data so the collector and the bootstrapper receive it
/// explicitly and tests can substitute a smaller catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub platforms: Vec<Platform>,
    pub signing_methods: Vec<SigningMethod>,
    pub agents: Vec<String>,
    pub default_agents: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            platforms: Platform::ALL.to_vec(),
            signing_methods: SigningMethod::ALL.to_vec(),
            agents: AGENTS.iter().map(|a| a.to_string()).collect(),
            default_agents: Vec::new(),
        }
    }
}

/// The literal values a pristine template copy carries.
///
/// Every rewrite anchor is derived from these fields, so a template that
/// changes one of its defaults only needs a settings override, not new rules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TemplateIdentity {
    /// Canonical template name, also the placeholder package and product name.
    pub name: String,
    /// Account hosting the template repository.
    pub owner: String,
    pub identifier: String,
    pub native_description: String,
    pub author_placeholder: String,
    pub html_title: String,
    pub readme_title: String,
    pub readme_description: String,
    pub updater_pubkey: String,
    /// Command the package manifest runs to invoke this setup program.
    pub setup_command: String,
    /// Dependencies only the setup program needs, removed from the package manifest.
    pub setup_dependencies: Vec<String>,
}

impl Default for TemplateIdentity {
    fn default() -> Self {
        Self {
            name: "create-tauri-react-app".to_string(),
            owner: "somus".to_string(),
            identifier: "com.somu.create-tauri-react-app".to_string(),
            native_description: "A Tauri App".to_string(),
            author_placeholder: "you".to_string(),
            html_title: "Tauri + React + Typescript".to_string(),
            readme_title: "Tauri + React Template".to_string(),
            readme_description: "A modern desktop application template using **Tauri v2**, **React 19**, and **TypeScript**.".to_string(),
            updater_pubkey: "dW50cnVzdGVkIGNvbW1lbnQ6IG1pbmlzaWduIHB1YmxpYyBrZXk6IDhCRTAwNUQ4NEJFREVEMjQKUldRazdlMUwyQVhnaTRYMDVwK0c0REs0dVptUWVpY0tpZ0U0STVyTlZvMU42NmZSekttS0ZtY3UK".to_string(),
            setup_command: "personalize".to_string(),
            setup_dependencies: Vec::new(),
        }
    }
}

impl TemplateIdentity {
    /// Library crate name the native manifest starts with.
    pub fn library_name(&self) -> String {
        format!("{}_lib", crate::naming::to_snake_case(&self.name))
    }

    /// The manifest line whose presence means setup has not run yet.
    pub fn personalization_marker(&self) -> String {
        format!("\"productName\": \"{}\"", self.name)
    }
}
