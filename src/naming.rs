//! Project name normalization.
//!
//! The kebab form is used wherever the project name appears verbatim (package
//! manifests, URLs, workflow names). The snake form is the "safe identifier"
//! used in manifest fields that forbid hyphens, and is always derived from the
//! kebab form, never the other way around.

use regex::Regex;
use std::sync::LazyLock;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("valid camel boundary regex"));
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("valid separator regex"));
static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("valid hyphen run regex"));

/// Normalizes free text into a kebab-case project identifier.
///
/// # Examples
/// ```
/// use personalize::naming::to_kebab_case;
///
/// assert_eq!(to_kebab_case("My Cool App"), "my-cool-app");
/// assert_eq!(to_kebab_case("fooBarBaz"), "foo-bar-baz");
/// ```
pub fn to_kebab_case(input: &str) -> String {
    let split = CAMEL_BOUNDARY.replace_all(input, "$1-$2");
    let joined = SEPARATOR_RUN.replace_all(&split, "-");
    let lowered = joined.to_lowercase();
    HYPHEN_RUN.replace_all(&lowered, "-").into_owned()
}

/// Derives the underscore variant of a project name.
pub fn to_snake_case(input: &str) -> String {
    to_kebab_case(input).replace('-', "_")
}
