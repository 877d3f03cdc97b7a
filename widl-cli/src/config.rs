//! Configuration for the `widl` CLI.
//!
//! Loads an optional `widl.toml`, searching the current directory, then
//! `$XDG_CONFIG_HOME`, then the user's home directory — the same order and
//! `serde`+`toml` shape as the teacher's `faxt::config::Config::load`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

pub const CONFIG_FILE_NAME: &str = "widl.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Attach whitespace/comment trivia while parsing (`ParserOptions::ws`).
    #[serde(default)]
    pub ws: bool,

    /// Permit `typedef` nested inside interface bodies.
    #[serde(default)]
    pub allow_nested_typedefs: bool,

    /// Output shape for the `parse` subcommand: `"json"` or `"debug"`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ws: false,
            allow_nested_typedefs: false,
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from the default search path, falling back to
    /// `Config::default()` if no file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(crate::error::CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_xdg_config() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("widl").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_home_config() -> Option<PathBuf> {
        dirs::home_dir()
            .map(|dir| dir.join(".config").join("widl").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_xdg_config)
            .or_else(Self::check_home_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_uses_json_format() {
        let config = Config::default();
        assert!(!config.ws);
        assert!(!config.allow_nested_typedefs);
        assert_eq!(config.format, "json");
    }

    #[test]
    fn load_from_path_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("widl.toml");
        std::fs::write(&path, "ws = true\nformat = \"debug\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.ws);
        assert_eq!(config.format, "debug");
        assert!(!config.allow_nested_typedefs);
    }

    #[test]
    fn load_from_nonexistent_path_errors() {
        let result = Config::load_from_path(Path::new("/nonexistent/widl.toml"));
        assert!(result.is_err());
    }
}
