//! Settings loading and management

use crate::config::types::{Catalog, TemplateIdentity};
use crate::constants::{defaults, SETTINGS_FILENAMES};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// External commands the bootstrapper runs, as argv vectors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Commands {
    pub agents_apply: Vec<String>,
    pub hooks_install: Vec<String>,
    pub native_lockfile: Vec<String>,
    pub package_install: Vec<String>,
}

impl Default for Commands {
    fn default() -> Self {
        fn argv(parts: &[&str]) -> Vec<String> {
            parts.iter().map(|p| p.to_string()).collect()
        }
        Self {
            agents_apply: argv(&["bunx", "@intellectronica/ruler", "apply"]),
            hooks_install: argv(&["bunx", "lefthook", "install"]),
            native_lockfile: argv(&["cargo", "generate-lockfile"]),
            package_install: argv(&["bun", "install"]),
        }
    }
}

/// Optional per-template settings, every field defaulted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub template: TemplateIdentity,
    /// Replaces the built-in agent catalog when present.
    pub agents: Option<Vec<String>>,
    pub default_agents: Vec<String>,
    pub commands: Commands,
    pub commit_message: String,
    pub template_only_files: Vec<String>,
    /// File the settings were read from, relative to the project root.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template: TemplateIdentity::default(),
            agents: None,
            default_agents: Vec::new(),
            commands: Commands::default(),
            commit_message: defaults::COMMIT_MESSAGE.to_string(),
            template_only_files: vec![
                "scripts/setup".to_string(),
                ".github/TEMPLATE_README.md".to_string(),
                "suggestions.md".to_string(),
            ],
            source: None,
        }
    }
}

impl Settings {
    /// Loads the first settings file found in `root`, or the defaults when none exists.
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();

        for file_name in SETTINGS_FILENAMES.iter() {
            let path = root.join(file_name);
            if !path.exists() {
                continue;
            }

            log::debug!("Loading settings from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let mut settings: Settings = if file_name.ends_with(".json") {
                serde_json::from_str(&content)?
            } else {
                serde_yaml::from_str(&content)?
            };
            settings.source = Some(PathBuf::from(file_name));
            settings.validate(&path)?;
            return Ok(settings);
        }

        log::debug!("No settings file in {}, using defaults", root.display());
        Ok(Self::default())
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |reason: &str| Error::ConfigError {
            file: path.to_display_string(),
            reason: reason.to_string(),
        };

        if self.template.name.trim().is_empty() {
            return Err(invalid("template.name must not be empty"));
        }
        let commands = [
            ("agents_apply", &self.commands.agents_apply),
            ("hooks_install", &self.commands.hooks_install),
            ("native_lockfile", &self.commands.native_lockfile),
            ("package_install", &self.commands.package_install),
        ];
        for (name, argv) in commands {
            if argv.is_empty() {
                return Err(invalid(&format!("commands.{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// The choice lists the collector offers.
    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::default();
        if let Some(agents) = &self.agents {
            catalog.agents = agents.clone();
        }
        catalog.default_agents = self.default_agents.clone();
        catalog
    }

    /// Files deleted once personalization is complete, including the settings file itself.
    pub fn cleanup_targets(&self) -> Vec<String> {
        let mut targets = self.template_only_files.clone();
        if let Some(source) = &self.source {
            targets.push(source.to_display_string());
        }
        targets
    }
}
