/// Handles argument parsing and orchestrates a setup run.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across the crate.
pub mod constants;

/// Settings file, template identity and choice catalogs.
pub mod config;

/// Decides whether a working tree needs personalizing.
pub mod context;

/// The answer record and preset answers.
pub mod answers;

/// Gathers answers from presets, prompts and defaults.
pub mod collector;

/// User input and interaction handling.
pub mod prompt;

/// Project name normalization.
pub mod naming;

/// Regex-anchored rewrites of project files.
pub mod rewrite;

/// Release workflow generation.
pub mod workflow;

/// Version control, tooling and lockfile steps.
pub mod bootstrap;

/// Removal of template-only files.
pub mod cleanup;

/// Colored status lines for the user.
pub mod status;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Extension traits for std types.
pub mod ext;
