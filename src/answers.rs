//! The answer record a setup run is driven by.

use crate::config::{Platform, SigningMethod};
use crate::error::Result;
use crate::naming::to_snake_case;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Everything the user told us about the new project.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    /// Kebab-case identifier.
    pub project_name: String,
    /// Display name.
    pub product_name: String,
    pub owner_account: String,
    pub bundle_identifier: String,
    /// `None` when the author was left empty; author rewrites are skipped then.
    pub author: Option<String>,
    pub description: String,
    pub target_platforms: BTreeSet<Platform>,
    pub signing_methods: BTreeSet<SigningMethod>,
    /// Selected tooling agents in catalog order.
    pub selected_tools: Vec<String>,
}

impl AnswerRecord {
    /// Underscore variant of the project name for fields that forbid hyphens.
    pub fn safe_identifier(&self) -> String {
        to_snake_case(&self.project_name)
    }

    /// Name of the native library crate.
    pub fn library_name(&self) -> String {
        format!("{}_lib", self.safe_identifier())
    }

    /// Public repository URL of the new project.
    pub fn repository_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner_account, self.project_name)
    }
}

/// The default bundle identifier for an owner and project.
pub fn default_bundle_identifier(owner: &str, project_name: &str) -> String {
    format!("com.{owner}.{project_name}")
}

/// Answers supplied up front through `--answers`.
///
/// Every field is optional; the collector prompts (or falls back to the
/// default in non-interactive mode) for whatever is missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresetAnswers {
    pub project_name: Option<String>,
    pub product_name: Option<String>,
    #[serde(alias = "owner")]
    pub owner_account: Option<String>,
    pub bundle_identifier: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "platforms")]
    pub target_platforms: Option<Vec<Platform>>,
    #[serde(alias = "signing")]
    pub signing_methods: Option<Vec<SigningMethod>>,
    #[serde(alias = "agents")]
    pub selected_tools: Option<Vec<String>>,
}

impl PresetAnswers {
    /// Parses preset answers from a JSON object.
    ///
    /// Shell invocations sometimes over-escape quotes (`{\"a\": 1}`); when the
    /// raw text fails to parse and contains `\"`, a naive unescape is retried.
    pub fn from_json(buf: &str) -> Result<Self> {
        match serde_json::from_str(buf) {
            Ok(preset) => Ok(preset),
            Err(initial_err) => {
                if buf.contains("\\\"") {
                    let cleaned = buf.replace("\\\"", "\"");
                    serde_json::from_str(&cleaned).map_err(|_| initial_err.into())
                } else {
                    Err(initial_err.into())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(project_name: &str) -> AnswerRecord {
        AnswerRecord {
            project_name: project_name.to_string(),
            product_name: "Demo".to_string(),
            owner_account: "acme".to_string(),
            bundle_identifier: default_bundle_identifier("acme", project_name),
            author: None,
            description: "demo".to_string(),
            target_platforms: BTreeSet::new(),
            signing_methods: BTreeSet::new(),
            selected_tools: Vec::new(),
        }
    }

    #[test]
    fn derives_identifier_variants() {
        let answers = record("demo-app");
        assert_eq!(answers.safe_identifier(), "demo_app");
        assert_eq!(answers.library_name(), "demo_app_lib");
        assert_eq!(answers.bundle_identifier, "com.acme.demo-app");
        assert_eq!(answers.repository_url(), "https://github.com/acme/demo-app");
    }

    #[test]
    fn parses_camel_case_presets() {
        let preset = PresetAnswers::from_json(
            r#"{"projectName": "demo-app", "owner": "acme", "platforms": ["macos-arm64", "linux"], "signing": []}"#,
        )
        .unwrap();
        assert_eq!(preset.project_name.as_deref(), Some("demo-app"));
        assert_eq!(preset.owner_account.as_deref(), Some("acme"));
        assert_eq!(
            preset.target_platforms,
            Some(vec![Platform::MacosArm64, Platform::Linux])
        );
        assert_eq!(preset.signing_methods, Some(vec![]));
        assert!(preset.author.is_none());
    }

    #[test]
    fn recovers_over_escaped_quotes() {
        let preset = PresetAnswers::from_json(r#"{\"projectName\": \"x\"}"#).unwrap();
        assert_eq!(preset.project_name.as_deref(), Some("x"));
    }

    #[test]
    fn rejects_unknown_platform() {
        assert!(PresetAnswers::from_json(r#"{"platforms": ["beos"]}"#).is_err());
    }
}
