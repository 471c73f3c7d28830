use crate::constants::verbosity;
use crate::context::RepositoryState;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for personalize.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, help_template = HELP_TEMPLATE)]
pub struct Args {
    /// Root of the template copy to personalize.
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Take defaults for every answer not given with `--answers`.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Preview actions without touching the filesystem or running commands.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip repository detection and treat the root as this state.
    #[arg(long, value_enum, value_name = "STATE")]
    pub assume: Option<RepositoryState>,
}

/// Parse command line arguments, exiting with usage on error.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
