use crate::{
    answers::{AnswerRecord, PresetAnswers},
    bootstrap::{Bootstrapper, CommandRunner, SystemRunner},
    cleanup::remove_template_files,
    cli::Args,
    collector::AnswerCollector,
    config::{Settings, TemplateIdentity},
    constants::STDIN_INDICATOR,
    context::{self, RepositoryState},
    error::Result,
    ioutils::read_from,
    prompt::{get_prompt_provider, PromptProvider},
    rewrite::{self, RewriteSummary},
    status, workflow,
};
use std::path::{Path, PathBuf};

const NEXT_STEPS: &[&str] = &["bun tauri dev"];

/// What a completed or skipped run did.
#[derive(Debug)]
pub struct RunReport {
    pub state: RepositoryState,
    /// `None` when the run was skipped.
    pub answers: Option<AnswerRecord>,
    pub rewrites: RewriteSummary,
    pub workflow_written: bool,
    pub removed: Vec<String>,
}

impl RunReport {
    fn skipped(state: RepositoryState) -> Self {
        Self {
            state,
            answers: None,
            rewrites: RewriteSummary::default(),
            workflow_written: false,
            removed: Vec::new(),
        }
    }
}

/// Main CLI runner that orchestrates one personalization run
pub struct Runner<'a, P: PromptProvider> {
    args: Args,
    provider: &'a P,
    commands: &'a dyn CommandRunner,
}

impl<'a, P: PromptProvider> Runner<'a, P> {
    pub fn new(args: Args, provider: &'a P, commands: &'a dyn CommandRunner) -> Self {
        Self { args, provider, commands }
    }

    /// Executes the complete setup workflow
    pub fn run(self) -> Result<RunReport> {
        let root = self.resolve_root()?;
        let settings = match Settings::load(&root) {
            Ok(settings) => settings,
            Err(e) => {
                // The template's own checkout stays a silent no-op even with broken settings.
                let state = context::detect(&root, &TemplateIdentity::default(), self.args.assume);
                if state.needs_setup() {
                    return Err(e);
                }
                log::debug!("Ignoring unreadable settings in {}: {e}", root.display());
                return Ok(RunReport::skipped(state));
            }
        };

        let state = context::detect(&root, &settings.template, self.args.assume);
        if !state.needs_setup() {
            log::info!("Nothing to do in {}: {state:?}", root.display());
            return Ok(RunReport::skipped(state));
        }

        let preset = self.load_preset()?;

        status::heading(&format!("🚀 {} Setup", settings.template.readme_title));

        // Collect every answer before the first file is touched
        let answers = self.collect_answers(&root, &settings, preset)?;

        status::blank();
        status::info("Updating project files...");
        status::blank();
        let rewrites = self.rewrite_files(&root, &settings, &answers)?;
        let workflow_written = self.write_workflow(&root, &answers);

        status::blank();
        status::info("Setting up development environment...");
        status::blank();
        let mut bootstrapper = Bootstrapper::new(
            &root,
            self.commands,
            &settings,
            &answers.selected_tools,
            self.args.dry_run,
        );
        bootstrapper.prepare_environment();

        status::blank();
        status::info("Cleaning up template files...");
        status::blank();
        let removed =
            remove_template_files(&root, &settings.cleanup_targets(), self.args.dry_run);

        bootstrapper.commit();

        status::finished(NEXT_STEPS);
        Ok(RunReport { state, answers: Some(answers), rewrites, workflow_written, removed })
    }

    fn resolve_root(&self) -> Result<PathBuf> {
        let root = std::fs::canonicalize(&self.args.root)?;
        log::debug!("Personalizing {}", root.display());
        Ok(root)
    }

    /// Reads `--answers` from the argument or stdin
    fn load_preset(&self) -> Result<PresetAnswers> {
        match self.args.answers.as_deref() {
            None => Ok(PresetAnswers::default()),
            Some(STDIN_INDICATOR) => {
                let buf = read_from(std::io::stdin())?;
                PresetAnswers::from_json(&buf)
            }
            Some(json) => PresetAnswers::from_json(json),
        }
    }

    fn collect_answers(
        &self,
        root: &Path,
        settings: &Settings,
        preset: PresetAnswers,
    ) -> Result<AnswerRecord> {
        let directory_name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let catalog = settings.catalog();
        let collector =
            AnswerCollector::new(self.provider, &catalog, preset, self.args.non_interactive);
        let answers = collector.collect(&directory_name, &settings.template.name)?;
        log::debug!("Collected answers: {answers:?}");
        Ok(answers)
    }

    fn rewrite_files(
        &self,
        root: &Path,
        settings: &Settings,
        answers: &AnswerRecord,
    ) -> Result<RewriteSummary> {
        let rewrites = rewrite::rules::catalog(answers, &settings.template)?;
        Ok(rewrite::apply_all(root, &rewrites, self.args.dry_run))
    }

    fn write_workflow(&self, root: &Path, answers: &AnswerRecord) -> bool {
        if answers.target_platforms.is_empty() {
            status::warn("No platforms selected, keeping default publish workflow");
            return false;
        }
        match workflow::write_workflow(
            root,
            &answers.target_platforms,
            &answers.signing_methods,
            self.args.dry_run,
        ) {
            Ok(written) => written,
            Err(e) => {
                status::warn(&format!("Failed to update publish.yml: {e}"));
                false
            }
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let provider = get_prompt_provider();
    let runner = Runner::new(args, &provider, &SystemRunner);
    runner.run().map(|_| ())
}
