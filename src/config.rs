use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BumpError, Result};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "branchbump.toml";

/// File name looked up in the user configuration directory
pub const USER_CONFIG_FILE: &str = ".branchbump.toml";

/// Represents the complete configuration for branch-bump.
///
/// Contains the version file location, branch classification rules and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_version_file")]
    pub version_file: PathBuf,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_version_file() -> PathBuf {
    PathBuf::from("VERSION")
}

fn default_major_patterns() -> Vec<String> {
    vec!["^feature/".to_string()]
}

fn default_minor_patterns() -> Vec<String> {
    vec!["^fix/".to_string()]
}

fn default_git_program() -> String {
    "git".to_string()
}

/// Branch name patterns that select the bump level.
///
/// Anything matching neither list is a patch bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RulesConfig {
    #[serde(default = "default_major_patterns")]
    pub major: Vec<String>,

    #[serde(default = "default_minor_patterns")]
    pub minor: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            major: default_major_patterns(),
            minor: default_minor_patterns(),
        }
    }
}

/// How the current branch is looked up
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolverKind {
    /// Run `git rev-parse --abbrev-ref HEAD`
    #[default]
    Command,
    /// Read HEAD in-process through libgit2
    Libgit2,
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub resolver: ResolverKind,

    #[serde(default = "default_git_program")]
    pub git_program: String,

    /// Exit non-zero when the branch cannot be determined
    #[serde(default)]
    pub strict: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            resolver: ResolverKind::default(),
            git_program: default_git_program(),
            strict: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_file: default_version_file(),
            rules: RulesConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `branchbump.toml` in current directory
/// 3. `.branchbump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else if let Some(user_path) = dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
    {
        user_path
    } else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        BumpError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    parse_config(&config_str)
        .map_err(|e| BumpError::config(format!("Invalid '{}': {}", path.display(), e)))
}

/// Parses configuration from TOML text.
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}
