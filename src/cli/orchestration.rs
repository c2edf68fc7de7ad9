//! Command workflows
//!
//! Separates running a command from parsing its arguments, so the workflows can be
//! called programmatically without going through clap.

use std::path::PathBuf;

use tracing::warn;

use crate::cli::{Cli, Command, FilterArgs, LatestArgs};
use crate::config::{load_config, Config};
use crate::domain::Version;
use crate::error::Result;
use crate::git::Git2Repository;
use crate::resolver::{self, LatestOptions, Resolution};

/// Where a workflow finds its repository and configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowContext {
    /// Directory inside the git repository
    pub workdir: PathBuf,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,
}

impl WorkflowContext {
    fn load_config(&self) -> Result<Config> {
        load_config(self.config_path.as_deref(), &self.workdir)
    }

    fn open_repository(&self) -> Result<Git2Repository> {
        Git2Repository::open(&self.workdir)
    }
}

impl From<&Cli> for WorkflowContext {
    fn from(cli: &Cli) -> Self {
        WorkflowContext {
            workdir: cli.workdir.clone(),
            config_path: cli.config.clone(),
        }
    }
}

/// Resolve the latest version for the `latest` command.
///
/// No matching tag is not an error: the returned resolution is unmatched and its
/// version is `0.0.0`.
pub fn run_latest(context: &WorkflowContext, args: &LatestArgs) -> Result<Resolution> {
    let config = context.load_config()?;
    let repo = context.open_repository()?;

    let options = LatestOptions {
        filter: args.filter.filter(&config.latest),
        branch: args.branch_scope(&config.latest),
    };

    let resolution = resolver::latest_version(&repo, &options)?;
    if !resolution.matched() {
        warn!(
            include_pre_releases = options.filter.include_pre_releases,
            major_version = ?options.filter.major_version,
            branch = ?options.branch,
            "no matching semantic version tag found"
        );
    }

    Ok(resolution)
}

/// List versions for the `versions` command
pub fn run_versions(context: &WorkflowContext, args: &FilterArgs) -> Result<Vec<Version>> {
    let config = context.load_config()?;
    let repo = context.open_repository()?;

    resolver::list_versions(&repo, &args.filter(&config.latest))
}

/// Run the parsed command and return the lines to print
pub fn run(cli: &Cli) -> Result<Vec<String>> {
    let context = WorkflowContext::from(cli);

    match &cli.command {
        Command::Latest(args) => {
            let resolution = run_latest(&context, args)?;
            Ok(vec![resolution.version.to_string()])
        }
        Command::Versions(args) => Ok(run_versions(&context, args)?
            .iter()
            .map(Version::to_string)
            .collect()),
    }
}

