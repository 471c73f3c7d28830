//! Best-effort environment setup around the rewritten project.
//!
//! Every step reports an [`Outcome`]; none of them can abort the run.

pub mod command;
mod steps;

pub use command::{CommandRunner, CommandSpec, OutputMode, ScriptedRunner, SystemRunner};
pub use steps::{
    environment_steps, AgentApply, AgentConfig, FinalCommit, GitHooks, GitInit, NativeLockfile,
    Outcome, PackageLockfile, Step, StepContext,
};

use crate::config::Settings;
use std::path::Path;

/// Drives the environment steps and the final commit for one run.
pub struct Bootstrapper<'a> {
    ctx: StepContext<'a>,
}

impl<'a> Bootstrapper<'a> {
    pub fn new(
        root: &'a Path,
        runner: &'a dyn CommandRunner,
        settings: &'a Settings,
        agents: &'a [String],
        dry_run: bool,
    ) -> Self {
        Self {
            ctx: StepContext { root, runner, settings, agents, dry_run, vcs_ready: false },
        }
    }

    /// Whether version control turned out to be available.
    pub fn vcs_ready(&self) -> bool {
        self.ctx.vcs_ready
    }

    /// Runs every environment step in order, reporting each outcome.
    pub fn prepare_environment(&mut self) -> Vec<(&'static str, Outcome)> {
        environment_steps()
            .iter()
            .map(|step| (step.name(), self.run_step(step.as_ref())))
            .collect()
    }

    /// Commits the finished tree. Runs after cleanup so the commit captures it.
    pub fn commit(&mut self) -> Outcome {
        self.run_step(&FinalCommit)
    }

    fn run_step(&mut self, step: &dyn Step) -> Outcome {
        log::debug!("Running bootstrap step '{}'", step.name());
        let outcome = step.run(&mut self.ctx);
        log::debug!("Step '{}' finished: {outcome:?}", step.name());
        outcome.report();
        outcome
    }
}
