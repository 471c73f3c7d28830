//! Detects whether a working tree should be personalized.
//!
//! The classification is a heuristic: a remote URL or top-level directory
//! carrying the template's canonical name marks the template's own checkout.
//! A `.template-source` marker file or an explicit `--assume` override wins over
//! the heuristic, since a misclassification silently skips the whole run.

use crate::config::TemplateIdentity;
use crate::constants::{paths, TEMPLATE_MARKER_FILE};
use clap::ValueEnum;
use git2::Repository;
use std::path::Path;

/// Where a run finds itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RepositoryState {
    /// The template's own checkout; must never be mutated.
    #[value(name = "template")]
    TemplateSource,
    /// A generated copy that has not been personalized yet.
    #[value(name = "fresh")]
    FreshCopy,
    /// Personalization already ran here.
    #[value(name = "configured")]
    AlreadyConfigured,
}

impl RepositoryState {
    /// Whether the run should go ahead.
    pub fn needs_setup(&self) -> bool {
        matches!(self, RepositoryState::FreshCopy)
    }
}

/// Read-only classifier for a project root.
pub struct ContextDetector<'a> {
    root: &'a Path,
    identity: &'a TemplateIdentity,
}

impl<'a> ContextDetector<'a> {
    pub fn new(root: &'a Path, identity: &'a TemplateIdentity) -> Self {
        Self { root, identity }
    }

    /// Classifies the working tree. Never fails: any query error degrades to
    /// "not the template".
    pub fn detect(&self) -> RepositoryState {
        if self.is_template_repo() {
            return RepositoryState::TemplateSource;
        }
        if self.is_already_configured() {
            return RepositoryState::AlreadyConfigured;
        }
        RepositoryState::FreshCopy
    }

    /// Checks the marker file, every remote URL and the repository's top-level directory.
    pub fn is_template_repo(&self) -> bool {
        if self.root.join(TEMPLATE_MARKER_FILE).exists() {
            log::debug!("Found {TEMPLATE_MARKER_FILE}, treating as template source");
            return true;
        }

        let repo = match Repository::discover(self.root) {
            Ok(repo) => repo,
            Err(e) => {
                log::debug!("No repository at {}: {}", self.root.display(), e.message());
                return false;
            }
        };

        if self.remote_mentions_template(&repo) {
            return true;
        }

        // A freshly cloned template may not have its remote configured yet.
        match repo.workdir() {
            Some(workdir) => {
                let top_level = workdir.to_string_lossy();
                top_level.trim_end_matches(['/', '\\']).ends_with(&self.identity.name)
            }
            None => false,
        }
    }

    fn remote_mentions_template(&self, repo: &Repository) -> bool {
        let remotes = match repo.remotes() {
            Ok(remotes) => remotes,
            Err(e) => {
                log::debug!("Failed to list remotes: {}", e.message());
                return false;
            }
        };

        remotes.iter().flatten().any(|name| match repo.find_remote(name) {
            Ok(remote) => {
                let mentions = remote.url().is_some_and(|url| url.contains(&self.identity.name));
                if mentions {
                    log::debug!("Remote '{name}' points at the template repository");
                }
                mentions
            }
            Err(_) => false,
        })
    }

    /// The personalization marker disappears from the native-shell manifest
    /// once setup has rewritten its product name.
    pub fn is_already_configured(&self) -> bool {
        let manifest = self.root.join(paths::TAURI_CONF);
        match std::fs::read_to_string(&manifest) {
            Ok(content) => !content.contains(&self.identity.personalization_marker()),
            Err(e) => {
                log::debug!("Cannot read {}: {e}", manifest.display());
                false
            }
        }
    }
}

/// Classifies `root`, honoring an explicit override first.
pub fn detect(
    root: &Path,
    identity: &TemplateIdentity,
    assume: Option<RepositoryState>,
) -> RepositoryState {
    if let Some(state) = assume {
        log::debug!("Repository state forced to {state:?}");
        return state;
    }
    let state = ContextDetector::new(root, identity).detect();
    log::debug!("Detected repository state {state:?} for {}", root.display());
    state
}
