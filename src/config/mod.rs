//! Configuration for the setup engine
//!
//! - `types`: static catalogs (platforms, signing methods, agents) and the
//!   template identity every rewrite anchor is derived from
//! - `loader`: optional settings file loading and validation

pub mod loader;
pub mod types;

pub use loader::{Commands, Settings};
pub use types::{Catalog, Platform, SigningMethod, TemplateIdentity, AGENTS};
