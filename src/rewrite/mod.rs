//! Regex-anchored rewrites of the template's project files.

mod engine;
mod rule;
pub mod rules;

pub use engine::{apply_all, delete_file, dry_run_prefix, rewrite_file, RewriteSummary};
pub use rule::{escape_expansion, FileRewrite, Replacement, RewriteRule, Scope};
