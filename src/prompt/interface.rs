//! Pure interfaces for prompting without external dependencies
//!
//! These interfaces are independent of any specific UI library implementation.

use crate::error::Result;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    /// Pre-filled value; `None` lets the user submit an empty answer.
    pub default: Option<String>,
}

/// Configuration for multiple choice selection
#[derive(Debug, Clone)]
pub struct MultipleChoiceConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub defaults: Vec<bool>,
    /// Number of rows shown at once; `None` shows every choice.
    pub page_size: Option<usize>,
}

impl MultipleChoiceConfig {
    /// Indices of the pre-checked choices.
    pub fn default_indices(&self) -> Vec<usize> {
        self.defaults
            .iter()
            .enumerate()
            .filter_map(|(i, &selected)| if selected { Some(i) } else { None })
            .collect()
    }
}

/// Abstract interface for text input prompts
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;
}

/// Abstract interface for multiple choice selection
pub trait MultipleChoicePrompter {
    fn prompt_multiple_choice(&self, config: &MultipleChoiceConfig)
        -> Result<Vec<usize>>;
}

/// Combined interface that provides all prompt types
pub trait PromptProvider: TextPrompter + MultipleChoicePrompter {}

// Blanket implementation for any type that implements all prompt interfaces
impl<T> PromptProvider for T where T: TextPrompter + MultipleChoicePrompter {}
