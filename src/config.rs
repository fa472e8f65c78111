use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseError, Result};

/// Output verbosity, ordered from least to most talkative.
///
/// Derived `Ord` gives Quiet < Normal < Debug; print gating uses the
/// explicit [Verbosity::at_least] comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Debug,
}

impl Verbosity {
    /// True if this level includes output gated at `level`.
    pub fn at_least(&self, level: Verbosity) -> bool {
        *self >= level
    }

    /// Resolve the CLI flag combination into a level.
    ///
    /// Quiet takes precedence over debug when both are given; `--debug`
    /// and `--verbose=1` are equivalent.
    pub fn from_flags(quiet: bool, debug: bool, verbose: Option<u8>) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug || verbose == Some(1) {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Operator-supplied intent for one release invocation.
///
/// Built once from the CLI arguments and passed by reference into every
/// stage; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseConfig {
    /// Explicit tag override (format ##.##.## with optional 'v' prefix)
    pub release_tag: Option<String>,

    /// Human-readable release name used as the tag message
    pub release_name: Option<String>,

    /// Skip the confirmation prompt
    pub yes: bool,

    /// Output verbosity
    pub verbosity: Verbosity,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            release_tag: None,
            release_name: None,
            yes: false,
            verbosity: Verbosity::Normal,
        }
    }
}

fn default_release_branch() -> String {
    "main".to_string()
}

fn default_integration_branch() -> String {
    "develop".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Repository-shape settings for git-release.
///
/// Names the branches and remote the tool operates on. Defaults match the
/// conventional main/develop/origin layout.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_release_branch")]
    pub release_branch: String,

    #[serde(default = "default_integration_branch")]
    pub integration_branch: String,

    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            release_branch: default_release_branch(),
            integration_branch: default_integration_branch(),
            remote: default_remote(),
        }
    }
}

/// Loads settings from file or returns defaults.
///
/// Attempts to load settings in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitrelease.toml` in current directory
/// 3. `.gitrelease.toml` in user config directory
/// 4. Default settings if no file found
pub fn load_settings(settings_path: Option<&str>) -> Result<Settings> {
    let settings_str = if let Some(path) = settings_path {
        fs::read_to_string(path)
            .map_err(|e| ReleaseError::settings(format!("Cannot read '{}': {}", path, e)))?
    } else if Path::new("./gitrelease.toml").exists() {
        fs::read_to_string("./gitrelease.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let settings_path = config_dir.join(".gitrelease.toml");
        if settings_path.exists() {
            fs::read_to_string(settings_path)?
        } else {
            return Ok(Settings::default());
        }
    } else {
        return Ok(Settings::default());
    };

    let settings: Settings = toml::from_str(&settings_str)
        .map_err(|e| ReleaseError::settings(format!("Invalid settings file: {}", e)))?;
    Ok(settings)
}
