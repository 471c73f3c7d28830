//! Interactive dialog utilities for user input
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `automatic_impl`: Non-interactive implementation answering from presets and defaults

pub mod automatic_impl;
pub mod dialoguer;
pub mod interface;

pub use automatic_impl::AutomaticPrompter;
pub use dialoguer::DialoguerPrompter;
pub use interface::*;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}
