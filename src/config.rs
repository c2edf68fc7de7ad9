use crate::error::{GitSemverError, Result};
use crate::resolver::LatestFilter;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the repository working directory
pub const CONFIG_FILE_NAME: &str = "gitsemver.toml";

/// File name looked up in the user configuration directory
pub const USER_CONFIG_FILE_NAME: &str = ".gitsemver.toml";

/// Represents the complete configuration for git-semver.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub latest: LatestConfig,
}

/// Defaults for the `latest` and `versions` commands.
///
/// Command-line flags take precedence over these values.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct LatestConfig {
    #[serde(default)]
    pub include_pre_releases: bool,

    #[serde(default)]
    pub major_version: Option<u64>,

    /// Restrict the search to tags reachable from this branch
    #[serde(default)]
    pub branch: Option<String>,
}

impl LatestConfig {
    pub fn filter(&self) -> LatestFilter {
        LatestFilter {
            include_pre_releases: self.include_pre_releases,
            major_version: self.major_version,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitsemver.toml` in `search_dir`
/// 3. `.gitsemver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `search_dir` - Directory searched for `gitsemver.toml`
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, search_dir: &Path) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => match discover_config(search_dir) {
            Some(path) => path,
            None => {
                debug!("no configuration file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        GitSemverError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    let config: Config = toml::from_str(&config_str)?;

    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    let local = search_dir.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}
