//! tsb configuration
//!
//! User-level settings for the REPL and logging, stored as TOML.
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. User-level ($XDG_CONFIG_HOME/tsb/config.toml or ~/.config/tsb/config.toml)
//! 3. Default values
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use tsb::util::config::{load_user_config, UserConfig};
//!
//! let config: UserConfig = load_user_config().unwrap_or_default();
//! println!("{}", config.repl.prompt);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::repl::ReplMode;
use crate::util::logger::LogLevel;

/// User-level configuration for tsb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserConfig {
    /// REPL settings
    #[serde(default)]
    pub repl: ReplConfig,
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// REPL configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplConfig {
    /// Prompt string
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// History size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    /// History file path
    #[serde(default)]
    pub history_file: Option<PathBuf>,
    /// What the REPL prints for each line
    #[serde(default)]
    pub mode: ReplMode,
}

fn default_history_size() -> usize {
    1000
}

fn default_prompt() -> String {
    ">> ".to_string()
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            history_size: default_history_size(),
            history_file: None,
            mode: ReplMode::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// Level used when no CLI flag overrides it
    #[serde(default)]
    pub level: LogLevel,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Config serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Cannot determine config directory")]
    NoConfigDir,
}

/// Get the user config directory
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config.is_empty() {
            return Some(PathBuf::from(xdg_config).join("tsb"));
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home).join(".config").join("tsb"));
    }

    // On Windows, try %APPDATA%
    if let Ok(appdata) = std::env::var("APPDATA") {
        return Some(PathBuf::from(appdata).join("tsb"));
    }

    None
}

/// Get the user config file path (~/.config/tsb/config.toml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Load user-level configuration
/// Returns default config if file doesn't exist
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(UserConfig::default()),
    }
}

/// Load user-level config, creating default if not exists
pub fn load_or_create_user_config() -> Result<UserConfig, ConfigError> {
    let path = get_config_path().ok_or(ConfigError::NoConfigDir)?;

    if !path.exists() {
        let config = UserConfig::default();
        save_config_to(&config, &path)?;
        tracing::debug!("created default config at {}", path.display());
        return Ok(config);
    }

    load_config_from(&path)
}

/// Save user-level configuration
pub fn save_user_config(config: &UserConfig) -> Result<(), ConfigError> {
    let path = get_config_path().ok_or(ConfigError::NoConfigDir)?;
    save_config_to(config, &path)
}

/// Load configuration from an explicit file; a missing file yields defaults
pub fn load_config_from(path: &Path) -> Result<UserConfig, ConfigError> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Write configuration to an explicit file, creating parent directories
pub fn save_config_to(
    config: &UserConfig,
    path: &Path,
) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UserConfig::default();
        assert_eq!(config.repl.prompt, ">> ");
        assert_eq!(config.repl.history_size, 1000);
        assert_eq!(config.repl.mode, ReplMode::Tokens);
        assert_eq!(config.log.level, LogLevel::Warn);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = UserConfig::default();
        config.repl.prompt = "tsb> ".to_string();
        config.repl.mode = ReplMode::Ast;
        config.log.level = LogLevel::Debug;

        save_config_to(&config, &path).unwrap();
        assert!(path.exists());
        assert_eq!(load_config_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[repl]\nmode = \"ast\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.repl.mode, ReplMode::Ast);
        assert_eq!(config.repl.prompt, ">> ");
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[log]\nlevel = \"loud\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().starts_with("Config parse error"));
    }

    #[test]
    fn test_user_config_lifecycle() {
        // the only test that sets XDG_CONFIG_HOME
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
        let path = dir.path().join("tsb").join("config.toml");
        assert_eq!(get_config_path(), Some(path.clone()));

        assert_eq!(load_user_config().unwrap(), UserConfig::default());
        assert!(!path.exists());

        let created = load_or_create_user_config().unwrap();
        assert_eq!(created, UserConfig::default());
        assert!(path.exists());

        let mut config = created;
        config.repl.history_size = 5;
        save_user_config(&config).unwrap();
        assert_eq!(load_or_create_user_config().unwrap(), config);
        assert_eq!(load_user_config().unwrap().repl.history_size, 5);
    }
}
