use std::path::Path;

use super::rule::FileRewrite;
use crate::constants::DRY_RUN_PREFIX;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::ioutils::{read_target, remove_path, write_file};
use crate::status;

/// What happened to each file of a rewrite pass.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RewriteSummary {
    pub changed: Vec<String>,
    pub unchanged: Vec<String>,
    pub missing: Vec<String>,
    pub failed: Vec<String>,
}

impl RewriteSummary {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.failed.is_empty()
    }
}

/// Status-line prefix for a change that is only previewed.
pub fn dry_run_prefix(dry_run: bool) -> &'static str {
    if dry_run {
        DRY_RUN_PREFIX
    } else {
        ""
    }
}

/// Applies one file's rules and writes the result back if anything matched.
///
/// # Arguments
/// * `root` - Project root the rewrite path is relative to
/// * `rewrite` - Target file and its ordered rules
/// * `dry_run` - Compute the change without writing it
///
/// # Returns
/// * `Result<bool>` - Whether any rule matched; [`Error::MissingTarget`] if the file is absent
pub fn rewrite_file(root: &Path, rewrite: &FileRewrite, dry_run: bool) -> Result<bool> {
    let relative = rewrite.path.to_display_string();
    let content = read_target(root, &relative)?;

    match rewrite.apply(&content) {
        Some(updated) => {
            if dry_run {
                log::debug!("{DRY_RUN_PREFIX}Skipping write of {relative}");
            } else {
                write_file(&updated, root.join(&rewrite.path))?;
            }
            Ok(true)
        }
        None => {
            log::debug!("No rule matched in {relative}");
            Ok(false)
        }
    }
}

/// Runs every rewrite, reporting each file. A failing file never stops the pass.
pub fn apply_all(root: &Path, rewrites: &[FileRewrite], dry_run: bool) -> RewriteSummary {
    let prefix = dry_run_prefix(dry_run);
    let mut summary = RewriteSummary::default();

    for rewrite in rewrites {
        let relative = rewrite.path.to_display_string();
        match rewrite_file(root, rewrite, dry_run) {
            Ok(true) => {
                status::success(&format!("{prefix}Updated {relative}"));
                summary.changed.push(relative);
            }
            Ok(false) => summary.unchanged.push(relative),
            Err(Error::MissingTarget { path }) => {
                status::warn(&format!("File not found: {path}"));
                summary.missing.push(path);
            }
            Err(e) => {
                status::warn(&format!("Failed to update {relative}: {e}"));
                summary.failed.push(relative);
            }
        }
    }

    summary
}

/// Deletes a project file or directory.
///
/// A missing file is a silent `false`; a failed removal is reported as a warning.
pub fn delete_file(root: &Path, relative: &str, dry_run: bool) -> bool {
    let path = root.join(relative);
    if !path.exists() {
        log::debug!("{relative} already absent");
        return false;
    }

    if dry_run {
        status::success(&format!("{DRY_RUN_PREFIX}Deleted {relative}"));
        return true;
    }

    match remove_path(&path) {
        Ok(()) => {
            status::success(&format!("Deleted {relative}"));
            true
        }
        Err(e) => {
            log::debug!("Failed to delete {}: {e}", path.display());
            status::warn(&format!("Failed to delete {relative}"));
            false
        }
    }
}
