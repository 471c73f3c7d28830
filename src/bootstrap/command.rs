use std::cell::RefCell;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Where a command's output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Shares the terminal, for steps whose output is informative.
    Inherit,
    /// Discarded; only the exit status matters.
    Quiet,
}

/// A single external command invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub output: OutputMode,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I, cwd: &Path, output: OutputMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
            output,
        }
    }

    /// Builds a command from an argv vector whose first element is the program.
    pub fn from_argv(argv: &[String], cwd: &Path, output: OutputMode) -> Result<Self> {
        let (program, args) = argv.split_first().ok_or_else(|| Error::CommandSpawnError {
            command: String::new(),
            reason: "empty command".to_string(),
        })?;
        Ok(Self::new(program, args.iter().cloned(), cwd, output))
    }
}

impl Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs external commands for the bootstrap steps.
pub trait CommandRunner {
    /// Runs the command to completion; a non-zero exit is an error.
    fn run(&self, command: &CommandSpec) -> Result<()>;
}

/// Spawns real processes and waits for them.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        log::debug!("Running '{command}' in {}", command.cwd.display());

        let mut process = Command::new(&command.program);
        process.args(&command.args).current_dir(&command.cwd);
        match command.output {
            OutputMode::Inherit => {
                process.stdin(Stdio::inherit()).stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
            OutputMode::Quiet => {
                process.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
            }
        }

        let status = process.status().map_err(|e| Error::CommandSpawnError {
            command: command.to_string(),
            reason: e.to_string(),
        })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

/// Records invocations instead of spawning them.
///
/// Every command succeeds unless it starts with one of the configured
/// failing prefixes.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    failing_prefixes: Vec<String>,
    calls: RefCell<Vec<CommandSpec>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every command whose rendered form starts with `prefix` fail.
    pub fn fail_on(mut self, prefix: impl Into<String>) -> Self {
        self.failing_prefixes.push(prefix.into());
        self
    }

    /// Commands run so far, rendered as strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.to_string()).collect()
    }

    /// Full records of the commands run so far.
    pub fn invocations(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &CommandSpec) -> Result<()> {
        self.calls.borrow_mut().push(command.clone());
        let rendered = command.to_string();
        if self.failing_prefixes.iter().any(|prefix| rendered.starts_with(prefix.as_str())) {
            return Err(Error::CommandFailed { command: rendered, status: "exit status: 1".into() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_argv() {
        let argv = vec!["bunx".to_string(), "lefthook".to_string(), "install".to_string()];
        let spec = CommandSpec::from_argv(&argv, Path::new("."), OutputMode::Inherit).unwrap();
        assert_eq!(spec.to_string(), "bunx lefthook install");
        assert_eq!(spec.program, "bunx");
    }

    #[test]
    fn empty_argv_is_rejected() {
        assert!(CommandSpec::from_argv(&[], Path::new("."), OutputMode::Quiet).is_err());
    }

    #[test]
    fn scripted_runner_records_and_fails_by_prefix() {
        let runner = ScriptedRunner::new().fail_on("git");
        let root = Path::new(".");
        assert!(runner.run(&CommandSpec::new("git", ["init"], root, OutputMode::Quiet)).is_err());
        assert!(runner.run(&CommandSpec::new("bun", ["install"], root, OutputMode::Quiet)).is_ok());
        assert_eq!(runner.calls(), vec!["git init", "bun install"]);
    }

    #[test]
    fn system_runner_reports_missing_program() {
        let spec = CommandSpec::new(
            "personalize-test-no-such-program",
            Vec::<String>::new(),
            Path::new("."),
            OutputMode::Quiet,
        );
        assert!(matches!(SystemRunner.run(&spec), Err(Error::CommandSpawnError { .. })));
    }
}
