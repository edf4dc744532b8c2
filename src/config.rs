use crate::error::{Result, SemverError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "semver.toml";

/// Environment variable naming a configuration file explicitly
pub const CONFIG_ENV_VAR: &str = "SEMVER_CONFIG";

/// Represents the complete configuration for the command-line front end.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub sort: SortConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for the `sort` subcommand; command-line flags override them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct SortConfig {
    #[serde(default)]
    pub descending: bool,

    /// Drop unparsable inputs instead of failing the whole sort
    #[serde(default)]
    pub skip_invalid: bool,
}

fn default_color() -> bool {
    true
}

/// Terminal output settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// `false` turns styling off; `true` leaves it to terminal detection
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            color: default_color(),
        }
    }
}

/// Finds the configuration file to load, if any.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `$SEMVER_CONFIG`
/// 3. `semver.toml` in current directory
/// 4. `semver.toml` in the user config directory
///
/// An explicit path (1 or 2) is returned even when it does not exist, so that
/// loading reports the mistake instead of silently using defaults.
pub fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file was found or named but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match locate_config(config_path) {
        Some(path) => load_config_file(&path),
        None => Ok(Config::default()),
    }
}

/// Reads and parses one configuration file.
///
/// # Returns
/// * `Err(SemverError::Config)` - `path` does not exist
/// * `Err(SemverError::Io)` - `path` exists but cannot be read
/// * `Err(SemverError::ConfigFormat)` - the contents are not a valid configuration
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(SemverError::config(format!(
            "config file '{}' not found",
            path.display()
        )));
    }

    let config_str = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
