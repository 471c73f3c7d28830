use git2::Repository;
use std::path::Path;

use super::command::{CommandRunner, CommandSpec, OutputMode};
use crate::config::Settings;
use crate::constants::{paths, DRY_RUN_PREFIX};
use crate::rewrite::{dry_run_prefix, rewrite_file, rules};
use crate::status;

/// What a bootstrap step did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Done(String),
    Skipped(String),
    Failed {
        warning: String,
        /// Command the user can run to finish the step by hand.
        manual: Option<String>,
    },
    /// Nothing to report.
    Silent,
}

impl Outcome {
    fn failed(warning: impl Into<String>, manual: Option<String>) -> Self {
        Outcome::Failed { warning: warning.into(), manual }
    }

    /// Prints the outcome as a status line.
    pub fn report(&self) {
        match self {
            Outcome::Done(message) => status::success(message),
            Outcome::Skipped(message) => status::info(message),
            Outcome::Failed { warning, manual: Some(command) } => {
                status::warn(&format!("{warning} Run '{command}' manually."))
            }
            Outcome::Failed { warning, manual: None } => status::warn(warning),
            Outcome::Silent => {}
        }
    }
}

/// Shared state threaded through the steps of one run.
pub struct StepContext<'a> {
    pub root: &'a Path,
    pub runner: &'a dyn CommandRunner,
    pub settings: &'a Settings,
    pub agents: &'a [String],
    pub dry_run: bool,
    /// Whether version control is available; set by the git init step.
    pub vcs_ready: bool,
}

impl StepContext<'_> {
    /// Runs a command and maps its result to an outcome.
    fn execute(&self, command: &CommandSpec, done: &str, warning: &str, manual: Option<String>) -> Outcome {
        if self.dry_run {
            log::info!("{DRY_RUN_PREFIX}Would run '{command}' in {}", command.cwd.display());
            return Outcome::Skipped(format!("{DRY_RUN_PREFIX}Would run '{command}'"));
        }
        match self.runner.run(command) {
            Ok(()) => Outcome::Done(done.to_string()),
            Err(e) => {
                log::debug!("{e}");
                Outcome::failed(warning, manual)
            }
        }
    }

    fn configured(&self, argv: &[String], cwd: &Path, output: OutputMode) -> Option<CommandSpec> {
        match CommandSpec::from_argv(argv, cwd, output) {
            Ok(spec) => Some(spec),
            Err(e) => {
                log::debug!("{e}");
                None
            }
        }
    }
}

/// One best-effort environment step.
pub trait Step {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut StepContext) -> Outcome;
}

fn inside_repository(root: &Path) -> bool {
    Repository::discover(root).is_ok()
}

pub struct GitInit;

impl Step for GitInit {
    fn name(&self) -> &'static str {
        "git-init"
    }

    fn run(&self, ctx: &mut StepContext) -> Outcome {
        if inside_repository(ctx.root) {
            ctx.vcs_ready = true;
            return Outcome::Skipped(
                "Already inside a git repository, skipping git init".to_string(),
            );
        }

        let command = CommandSpec::new("git", ["init"], ctx.root, OutputMode::Quiet);
        let outcome =
            ctx.execute(&command, "Initialized git repository", "Failed to initialize git repository", None);
        ctx.vcs_ready = matches!(outcome, Outcome::Done(_));
        outcome
    }
}

pub struct AgentConfig;

impl Step for AgentConfig {
    fn name(&self) -> &'static str {
        "agent-config"
    }

    fn run(&self, ctx: &mut StepContext) -> Outcome {
        if ctx.agents.is_empty() {
            return Outcome::Skipped("No agents selected, skipping ruler configuration".to_string());
        }
        if !ctx.root.join(paths::RULER_CONFIG).exists() {
            return Outcome::failed("ruler.toml not found, skipping ruler configuration", None);
        }

        let rewrite = match rules::ruler_agents(ctx.agents) {
            Ok(rewrite) => rewrite,
            Err(e) => {
                log::debug!("{e}");
                return Outcome::failed("Failed to update ruler.toml", None);
            }
        };
        match rewrite_file(ctx.root, &rewrite, ctx.dry_run) {
            Ok(true) => {
                Outcome::Done(format!(
                    "{}Updated {} with selected agents",
                    dry_run_prefix(ctx.dry_run),
                    paths::RULER_CONFIG
                ))
            }
            Ok(false) => Outcome::failed(
                format!("No default_agents entry in {}, leaving it unchanged", paths::RULER_CONFIG),
                None,
            ),
            Err(e) => {
                log::debug!("{e}");
                Outcome::failed("Failed to update ruler.toml", None)
            }
        }
    }
}

pub struct AgentApply;

impl Step for AgentApply {
    fn name(&self) -> &'static str {
        "agent-apply"
    }

    fn run(&self, ctx: &mut StepContext) -> Outcome {
        if ctx.agents.is_empty() {
            return Outcome::Silent;
        }
        let argv = &ctx.settings.commands.agents_apply;
        let Some(command) = ctx.configured(argv, ctx.root, OutputMode::Inherit) else {
            return Outcome::failed("Agent apply command is empty", None);
        };

        status::info("Applying ruler configurations...");
        ctx.execute(
            &command,
            "Applied ruler configurations",
            "Failed to apply ruler configurations.",
            Some(command.to_string()),
        )
    }
}

pub struct GitHooks;

impl Step for GitHooks {
    fn name(&self) -> &'static str {
        "git-hooks"
    }

    fn run(&self, ctx: &mut StepContext) -> Outcome {
        if !ctx.vcs_ready {
            return Outcome::Silent;
        }
        let argv = &ctx.settings.commands.hooks_install;
        let Some(command) = ctx.configured(argv, ctx.root, OutputMode::Inherit) else {
            return Outcome::failed("Hook install command is empty", None);
        };

        status::info("Installing git hooks...");
        ctx.execute(
            &command,
            "Installed git hooks",
            "Failed to install git hooks.",
            Some(command.to_string()),
        )
    }
}

pub struct NativeLockfile;

impl Step for NativeLockfile {
    fn name(&self) -> &'static str {
        "native-lockfile"
    }

    fn run(&self, ctx: &mut StepContext) -> Outcome {
        let cwd = ctx.root.join(paths::NATIVE_DIR);
        let argv = &ctx.settings.commands.native_lockfile;
        let Some(command) = ctx.configured(argv, &cwd, OutputMode::Quiet) else {
            return Outcome::failed("Native lockfile command is empty", None);
        };

        status::info("Regenerating Cargo.lock...");
        ctx.execute(
            &command,
            "Regenerated Cargo.lock",
            &format!("Failed to regenerate Cargo.lock in {}/.", paths::NATIVE_DIR),
            Some(command.to_string()),
        )
    }
}

pub struct PackageLockfile;

impl Step for PackageLockfile {
    fn name(&self) -> &'static str {
        "package-lockfile"
    }

    fn run(&self, ctx: &mut StepContext) -> Outcome {
        let argv = &ctx.settings.commands.package_install;
        let Some(command) = ctx.configured(argv, ctx.root, OutputMode::Quiet) else {
            return Outcome::failed("Package install command is empty", None);
        };

        status::info("Updating package lockfile...");
        ctx.execute(
            &command,
            "Updated package lockfile",
            "Failed to update package lockfile.",
            Some(command.to_string()),
        )
    }
}

/// Captures the personalized tree as one history entry.
///
/// Amends when the repository already has a commit, so the template's
/// history is replaced rather than extended.
pub struct FinalCommit;

impl Step for FinalCommit {
    fn name(&self) -> &'static str {
        "final-commit"
    }

    fn run(&self, ctx: &mut StepContext) -> Outcome {
        let message = ctx.settings.commit_message.as_str();
        let manual = format!("git add -A && git commit -m \"{message}\"");
        let warning = "Failed to create initial commit.";

        status::info("Creating initial commit...");
        let add = CommandSpec::new("git", ["add", "-A"], ctx.root, OutputMode::Quiet);
        let staged = ctx.execute(&add, "Staged changes", warning, Some(manual.clone()));
        if !matches!(staged, Outcome::Done(_)) {
            return staged;
        }

        let has_head = Repository::discover(ctx.root)
            .and_then(|repo| repo.head().map(|_| ()))
            .is_ok();
        let mut args = vec!["commit"];
        if has_head {
            args.push("--amend");
        }
        args.extend(["--no-verify", "-m", message]);

        let commit = CommandSpec::new("git", args, ctx.root, OutputMode::Quiet);
        ctx.execute(&commit, "Created initial commit", warning, Some(manual))
    }
}

/// The environment steps in the order they run, before cleanup.
pub fn environment_steps() -> Vec<Box<dyn Step>> {
    vec![
        Box::new(GitInit),
        Box::new(AgentConfig),
        Box::new(AgentApply),
        Box::new(GitHooks),
        Box::new(NativeLockfile),
        Box::new(PackageLockfile),
    ]
}
