use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::path::PathBuf;

use crate::error::Result;

/// How many matches of the anchor a rule replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only the first match.
    First,
    /// Every match.
    All,
}

/// What a matched anchor is replaced with.
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    /// Inserted verbatim; `$` has no special meaning.
    Literal(String),
    /// Expanded against the anchor's capture groups (`$1`, `${name}`).
    Expand(String),
}

/// A single anchored substitution.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pub anchor: Regex,
    pub replacement: Replacement,
    pub scope: Scope,
}

impl RewriteRule {
    /// First-match rule with a literal replacement.
    pub fn literal(anchor: &str, replacement: impl Into<String>) -> Result<Self> {
        Ok(Self {
            anchor: Regex::new(anchor)?,
            replacement: Replacement::Literal(replacement.into()),
            scope: Scope::First,
        })
    }

    /// First-match rule that expands capture groups.
    pub fn expand(anchor: &str, template: impl Into<String>) -> Result<Self> {
        Ok(Self {
            anchor: Regex::new(anchor)?,
            replacement: Replacement::Expand(template.into()),
            scope: Scope::First,
        })
    }

    /// Rule that removes the first match of the anchor.
    pub fn remove(anchor: &str) -> Result<Self> {
        Self::literal(anchor, "")
    }

    /// Applies the rule to every match instead of the first one.
    pub fn everywhere(mut self) -> Self {
        self.scope = Scope::All;
        self
    }

    /// Applies the rule. Returns `None` when the anchor does not occur.
    pub fn apply<'t>(&self, content: &'t str) -> Option<Cow<'t, str>> {
        if !self.anchor.is_match(content) {
            return None;
        }
        let limit = match self.scope {
            Scope::First => 1,
            Scope::All => 0,
        };
        let replaced = match &self.replacement {
            Replacement::Literal(text) => {
                self.anchor.replacen(content, limit, NoExpand(text.as_str()))
            }
            Replacement::Expand(template) => {
                self.anchor.replacen(content, limit, template.as_str())
            }
        };
        Some(replaced)
    }
}

/// The ordered rules for one file, path relative to the project root.
#[derive(Debug, Clone)]
pub struct FileRewrite {
    pub path: PathBuf,
    pub rules: Vec<RewriteRule>,
}

impl FileRewrite {
    pub fn new(path: impl Into<PathBuf>, rules: Vec<RewriteRule>) -> Self {
        Self { path: path.into(), rules }
    }

    /// Runs every rule over progressively-mutated content.
    ///
    /// # Returns
    /// * `Option<String>` - The new content, or `None` when no anchor matched
    pub fn apply(&self, content: &str) -> Option<String> {
        let mut current = content.to_string();
        let mut modified = false;

        for rule in &self.rules {
            if let Some(next) = rule.apply(&current) {
                let next = next.into_owned();
                log::debug!("Rule '{}' matched in {}", rule.anchor.as_str(), self.path.display());
                modified = true;
                current = next;
            }
        }

        modified.then_some(current)
    }
}

/// Escapes `$` so user text can be embedded in an expansion template.
pub fn escape_expansion(text: &str) -> String {
    text.replace('$', "$$")
}
