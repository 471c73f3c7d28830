//! Dialoguer-based implementations of prompt interfaces

use super::interface::{MultipleChoiceConfig, TextPromptConfig};
use crate::error::Result;
use dialoguer::{Input, MultiSelect};

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl super::interface::TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(&config.prompt);

        input = match &config.default {
            Some(default) => input.default(default.clone()),
            None => input.allow_empty(true),
        };

        Ok(input.interact_text()?)
    }
}

impl super::interface::MultipleChoicePrompter for DialoguerPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        // MultiSelect wraps around at both ends of the list.
        let mut select = MultiSelect::new()
            .with_prompt(&config.prompt)
            .items(&config.choices)
            .defaults(&config.defaults);

        if let Some(page_size) = config.page_size {
            select = select.max_length(page_size);
        }

        Ok(select.interact()?)
    }
}
