//! Removes template-only artifacts once the project is personalized.

use std::path::Path;

use crate::rewrite::delete_file;

/// Deletes each target that exists and returns the ones actually removed.
///
/// Missing targets are skipped silently; a failed removal is a warning and
/// never stops the remaining deletions.
pub fn remove_template_files(root: &Path, targets: &[String], dry_run: bool) -> Vec<String> {
    targets
        .iter()
        .filter(|target| delete_file(root, target, dry_run))
        .cloned()
        .collect()
}
