//! Command-line interface

pub mod orchestration;

use crate::config::LatestConfig;
use crate::resolver::LatestFilter;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "git-semver",
    version,
    about = "Print the latest semantic version tag of a git repository"
)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        default_value = ".",
        help = "Directory inside the git repository"
    )]
    pub workdir: PathBuf,

    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Log debug information to stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the latest semantic version, without a "v" prefix
    ///
    /// Compares all tags named like "v1.2.3". Prints 0.0.0 when no tag matches.
    Latest(LatestArgs),

    /// Print every tagged semantic version, oldest first
    Versions(FilterArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct FilterArgs {
    #[arg(
        long,
        overrides_with = "no_include_pre_releases",
        help = "Also consider pre-releases"
    )]
    pub include_pre_releases: bool,

    #[arg(
        long,
        overrides_with = "include_pre_releases",
        help = "Ignore pre-releases even if the configuration includes them"
    )]
    pub no_include_pre_releases: bool,

    #[arg(
        long,
        default_value_t = -1,
        allow_negative_numbers = true,
        help = "Only consider versions with this major version (negative: no filter)"
    )]
    pub major_version: i64,
}

impl FilterArgs {
    /// Combine the flags with configured defaults; flags win.
    pub fn filter(&self, config: &LatestConfig) -> LatestFilter {
        let mut filter = config.filter();
        if self.include_pre_releases {
            filter.include_pre_releases = true;
        } else if self.no_include_pre_releases {
            filter.include_pre_releases = false;
        }
        if let Ok(major) = u64::try_from(self.major_version) {
            filter.major_version = Some(major);
        }
        filter
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct LatestArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    #[arg(short, long, help = "Only consider tags reachable from this branch")]
    pub branch: Option<String>,

    #[arg(
        long,
        conflicts_with = "branch",
        help = "Consider tags on all branches, ignoring a configured branch"
    )]
    pub all_branches: bool,
}

impl LatestArgs {
    /// Branch to scope the search to, if any; `--branch` and `--all-branches` win
    /// over the configured branch.
    pub fn branch_scope(&self, config: &LatestConfig) -> Option<String> {
        if self.all_branches {
            return None;
        }
        self.branch.clone().or_else(|| config.branch.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("git-semver").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_latest_defaults() {
        let cli = parse(&["latest"]);
        assert_eq!(cli.workdir, PathBuf::from("."));
        assert!(!cli.verbose);
        match cli.command {
            Command::Latest(args) => {
                assert!(!args.filter.include_pre_releases);
                assert_eq!(args.filter.major_version, -1);
                assert_eq!(args.branch, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_latest_flags() {
        let cli = parse(&[
            "latest",
            "--include-pre-releases",
            "--major-version",
            "2",
            "--branch",
            "main",
            "--workdir",
            "/tmp/repo",
        ]);
        assert_eq!(cli.workdir, PathBuf::from("/tmp/repo"));
        match cli.command {
            Command::Latest(args) => {
                assert!(args.filter.include_pre_releases);
                assert_eq!(args.filter.major_version, 2);
                assert_eq!(args.branch.as_deref(), Some("main"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_negative_major_version_accepted() {
        let cli = parse(&["versions", "--major-version", "-1"]);
        match cli.command {
            Command::Versions(args) => assert_eq!(args.major_version, -1),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_filter_flags_override_config() {
        let config = LatestConfig {
            include_pre_releases: false,
            major_version: Some(1),
            branch: None,
        };
        let args = FilterArgs {
            include_pre_releases: true,
            no_include_pre_releases: false,
            major_version: 3,
        };
        assert_eq!(
            args.filter(&config),
            LatestFilter {
                include_pre_releases: true,
                major_version: Some(3),
            }
        );
    }

    #[test]
    fn test_negative_major_version_falls_back_to_config() {
        let config = LatestConfig {
            include_pre_releases: true,
            major_version: Some(1),
            branch: None,
        };
        let args = FilterArgs {
            include_pre_releases: false,
            no_include_pre_releases: false,
            major_version: -1,
        };
        assert_eq!(
            args.filter(&config),
            LatestFilter {
                include_pre_releases: true,
                major_version: Some(1),
            }
        );
        assert_eq!(args.filter(&LatestConfig::default()), LatestFilter::default());
    }

    #[test]
    fn test_no_include_pre_releases_overrides_config() {
        let config = LatestConfig {
            include_pre_releases: true,
            major_version: None,
            branch: None,
        };
        let cli = parse(&["latest", "--no-include-pre-releases"]);
        match cli.command {
            Command::Latest(args) => {
                assert_eq!(args.filter.filter(&config), LatestFilter::default());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_last_pre_release_flag_wins() {
        let cli = parse(&[
            "versions",
            "--no-include-pre-releases",
            "--include-pre-releases",
        ]);
        match cli.command {
            Command::Versions(args) => {
                assert!(args.include_pre_releases);
                assert!(!args.no_include_pre_releases);
                assert!(args.filter(&LatestConfig::default()).include_pre_releases);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_branch_scope() {
        let config = LatestConfig {
            include_pre_releases: false,
            major_version: None,
            branch: Some("main".to_string()),
        };

        let scope = |args: &[&str]| match parse(args).command {
            Command::Latest(args) => args.branch_scope(&config),
            other => panic!("unexpected command {:?}", other),
        };

        assert_eq!(scope(&["latest"]).as_deref(), Some("main"));
        assert_eq!(scope(&["latest", "--branch", "dev"]).as_deref(), Some("dev"));
        assert_eq!(scope(&["latest", "--all-branches"]), None);
        assert_eq!(
            LatestArgs {
                filter: FilterArgs {
                    include_pre_releases: false,
                    no_include_pre_releases: false,
                    major_version: -1,
                },
                branch: None,
                all_branches: false,
            }
            .branch_scope(&LatestConfig::default()),
            None
        );
    }

    #[test]
    fn test_all_branches_conflicts_with_branch() {
        let result = Cli::try_parse_from([
            "git-semver",
            "latest",
            "--branch",
            "main",
            "--all-branches",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["git-semver"]).is_err());
    }
}
