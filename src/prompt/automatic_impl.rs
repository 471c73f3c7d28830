//! Prompt provider that answers without user interaction.
//!
//! Used for `--non-interactive` runs and in tests.

use super::interface::*;
use crate::error::Result;
use std::collections::HashMap;

/// Automatic prompt provider that gives predefined responses
#[derive(Debug, Default)]
pub struct AutomaticPrompter {
    text_responses: HashMap<String, String>,
    multiple_choice_responses: HashMap<String, Vec<usize>>,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined text response for a specific prompt
    pub fn with_text_response(mut self, prompt: &str, response: &str) -> Self {
        self.text_responses.insert(prompt.to_string(), response.to_string());
        self
    }

    /// Add a predefined multiple choice response for a specific prompt
    pub fn with_multiple_choice_response(
        mut self,
        prompt: &str,
        choice_indices: Vec<usize>,
    ) -> Self {
        self.multiple_choice_responses.insert(prompt.to_string(), choice_indices);
        self
    }
}

impl TextPrompter for AutomaticPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let response = self
            .text_responses
            .get(&config.prompt)
            .cloned()
            .or_else(|| config.default.clone())
            .unwrap_or_default();

        log::debug!("Auto-answering text prompt '{}' with: '{}'", config.prompt, response);
        Ok(response)
    }
}

impl MultipleChoicePrompter for AutomaticPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        let response = self
            .multiple_choice_responses
            .get(&config.prompt)
            .cloned()
            .unwrap_or_else(|| config.default_indices());

        log::debug!(
            "Auto-answering multiple choice prompt '{}' with options: {:?}",
            config.prompt,
            response
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_automatic_prompter() {
        let prompter = AutomaticPrompter::new()
            .with_text_response("Enter name:", "John Doe")
            .with_multiple_choice_response("Pick:", vec![1]);

        let text_config =
            TextPromptConfig { prompt: "Enter name:".to_string(), default: None };
        assert_eq!(prompter.prompt_text(&text_config).unwrap(), "John Doe");

        let choice_config = MultipleChoiceConfig {
            prompt: "Pick:".to_string(),
            choices: vec!["A".to_string(), "B".to_string()],
            defaults: vec![true, false],
            page_size: None,
        };
        assert_eq!(prompter.prompt_multiple_choice(&choice_config).unwrap(), vec![1]);
    }

    #[test]
    fn test_automatic_prompter_defaults() {
        let prompter = AutomaticPrompter::new();

        let text_config = TextPromptConfig {
            prompt: "Unknown prompt:".to_string(),
            default: Some("fallback".to_string()),
        };
        assert_eq!(prompter.prompt_text(&text_config).unwrap(), "fallback");

        let empty_config =
            TextPromptConfig { prompt: "Author name".to_string(), default: None };
        assert_eq!(prompter.prompt_text(&empty_config).unwrap(), "");

        let choice_config = MultipleChoiceConfig {
            prompt: "Unknown choice:".to_string(),
            choices: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            defaults: vec![true, false, true],
            page_size: Some(2),
        };
        assert_eq!(prompter.prompt_multiple_choice(&choice_config).unwrap(), vec![0, 2]);
    }
}
