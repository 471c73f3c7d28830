use crate::{
    answers::{default_bundle_identifier, AnswerRecord, PresetAnswers},
    config::{Catalog, Platform, SigningMethod},
    constants::{defaults, FALLBACK_PROJECT_NAME},
    error::Result,
    naming::to_kebab_case,
    prompt::{MultipleChoiceConfig, PromptProvider, TextPromptConfig},
};
use std::collections::BTreeSet;

pub const PROJECT_NAME_PROMPT: &str = "Project name";
pub const PRODUCT_NAME_PROMPT: &str = "Product name (display name)";
pub const OWNER_PROMPT: &str = "GitHub username or organization";
pub const IDENTIFIER_PROMPT: &str = "Bundle identifier";
pub const AUTHOR_PROMPT: &str = "Author name";
pub const DESCRIPTION_PROMPT: &str = "Description";
pub const PLATFORMS_PROMPT: &str = "Select target platforms for releases";
pub const SIGNING_PROMPT: &str = "Enable code signing (requires GitHub secrets setup)";
pub const AGENTS_PROMPT: &str = "Select AI agents to configure";

/// Collects the answer record from presets, prompts and defaults.
///
/// Preset values always win. Missing values are prompted for, or take their
/// default when running non-interactively.
pub struct AnswerCollector<'a, P: PromptProvider> {
    provider: &'a P,
    catalog: &'a Catalog,
    preset: PresetAnswers,
    non_interactive: bool,
}

impl<'a, P: PromptProvider> AnswerCollector<'a, P> {
    pub fn new(
        provider: &'a P,
        catalog: &'a Catalog,
        preset: PresetAnswers,
        non_interactive: bool,
    ) -> Self {
        Self { provider, catalog, preset, non_interactive }
    }

    /// Runs the prompts in order and returns the answer record.
    ///
    /// # Arguments
    /// * `directory_name` - Base name of the project directory, the project name default
    /// * `template_name` - Canonical template name; a directory still named like it
    ///   gets a generic default instead
    pub fn collect(&self, directory_name: &str, template_name: &str) -> Result<AnswerRecord> {
        let default_project_name = if directory_name == template_name || directory_name.is_empty()
        {
            FALLBACK_PROJECT_NAME
        } else {
            directory_name
        };

        let project_name = to_kebab_case(&self.text(
            self.preset.project_name.clone(),
            PROJECT_NAME_PROMPT,
            Some(default_project_name.to_string()),
        )?);
        let product_name = self.text(
            self.preset.product_name.clone(),
            PRODUCT_NAME_PROMPT,
            Some(project_name.clone()),
        )?;
        let owner_account = self.text(
            self.preset.owner_account.clone(),
            OWNER_PROMPT,
            Some(defaults::OWNER.to_string()),
        )?;
        let bundle_identifier = self.text(
            self.preset.bundle_identifier.clone(),
            IDENTIFIER_PROMPT,
            Some(default_bundle_identifier(&owner_account, &project_name)),
        )?;
        let author = self.text(self.preset.author.clone(), AUTHOR_PROMPT, None)?;
        let description = self.text(
            self.preset.description.clone(),
            DESCRIPTION_PROMPT,
            Some(defaults::DESCRIPTION.to_string()),
        )?;

        let target_platforms = match &self.preset.target_platforms {
            Some(platforms) => platforms.iter().copied().collect(),
            None => self.select_platforms()?,
        };
        let signing_methods = match &self.preset.signing_methods {
            Some(methods) => methods.iter().copied().collect(),
            None => self.select_signing_methods()?,
        };
        let selected_tools = match &self.preset.selected_tools {
            Some(tools) => self.in_catalog_order(tools),
            None => self.select_agents()?,
        };

        let author = author.trim().to_string();
        Ok(AnswerRecord {
            project_name,
            product_name,
            owner_account,
            bundle_identifier,
            author: (!author.is_empty()).then_some(author),
            description,
            target_platforms,
            signing_methods,
            selected_tools,
        })
    }

    fn text(
        &self,
        preset: Option<String>,
        prompt: &str,
        default: Option<String>,
    ) -> Result<String> {
        if let Some(value) = preset {
            return Ok(value);
        }
        if self.non_interactive {
            return Ok(default.unwrap_or_default());
        }
        let config = TextPromptConfig { prompt: prompt.to_string(), default };
        self.provider.prompt_text(&config)
    }

    /// Returns the selected indices, or the pre-checked ones when not prompting.
    fn choose(&self, config: MultipleChoiceConfig) -> Result<Vec<usize>> {
        if self.non_interactive {
            return Ok(config.default_indices());
        }
        let mut indices = self.provider.prompt_multiple_choice(&config)?;
        indices.retain(|&i| i < config.choices.len());
        Ok(indices)
    }

    fn select_platforms(&self) -> Result<BTreeSet<Platform>> {
        let platforms = &self.catalog.platforms;
        let indices = self.choose(MultipleChoiceConfig {
            prompt: PLATFORMS_PROMPT.to_string(),
            choices: platforms.iter().map(|p| p.label().to_string()).collect(),
            defaults: vec![true; platforms.len()],
            page_size: None,
        })?;
        Ok(indices.into_iter().map(|i| platforms[i]).collect())
    }

    fn select_signing_methods(&self) -> Result<BTreeSet<SigningMethod>> {
        let methods = &self.catalog.signing_methods;
        let indices = self.choose(MultipleChoiceConfig {
            prompt: SIGNING_PROMPT.to_string(),
            choices: methods.iter().map(|m| m.label().to_string()).collect(),
            defaults: vec![false; methods.len()],
            page_size: None,
        })?;
        Ok(indices.into_iter().map(|i| methods[i]).collect())
    }

    fn select_agents(&self) -> Result<Vec<String>> {
        let agents = &self.catalog.agents;
        let mut indices = self.choose(MultipleChoiceConfig {
            prompt: AGENTS_PROMPT.to_string(),
            choices: agents.clone(),
            defaults: agents
                .iter()
                .map(|agent| self.catalog.default_agents.contains(agent))
                .collect(),
            page_size: Some(defaults::AGENT_PAGE_SIZE),
        })?;
        indices.sort_unstable();
        indices.dedup();
        Ok(indices.into_iter().map(|i| agents[i].clone()).collect())
    }

    /// Orders preset agents like the catalog, keeping unknown names at the end.
    fn in_catalog_order(&self, tools: &[String]) -> Vec<String> {
        let mut ordered: Vec<String> = self
            .catalog
            .agents
            .iter()
            .filter(|agent| tools.contains(agent))
            .cloned()
            .collect();
        for tool in tools {
            if !ordered.contains(tool) {
                log::warn!("Agent '{tool}' is not in the catalog; keeping it as given");
                ordered.push(tool.clone());
            }
        }
        ordered
    }
}
