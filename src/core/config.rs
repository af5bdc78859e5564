//! Application configuration management
//!
//! Handles loading and saving user defaults:
//! - Default owner for new repositories and bare repository names
//! - Default visibility
//! - License copyright holder
//! - Project layout used by `scaffold`

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{RepokitError, Result};
use crate::github::Visibility;
use crate::templates::ProjectKind;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// User or organization used when a command omits the owner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_owner: Option<String>,

    /// Visibility of new repositories
    #[serde(default)]
    pub visibility: Visibility,

    /// Copyright holder written into license files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_holder: Option<String>,

    /// Layout generated by `scaffold`
    #[serde(default)]
    pub project_kind: ProjectKind,
}

impl Config {
    /// Load configuration from file, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "repokit", "repokit")
            .ok_or_else(|| RepokitError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_owner, None);
        assert_eq!(config.visibility, Visibility::Private);
        assert_eq!(config.project_kind, ProjectKind::RustLib);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            default_owner: Some("acme".to_string()),
            visibility: Visibility::Public,
            license_holder: Some("Acme Corp".to_string()),
            project_kind: ProjectKind::RustBin,
        };
        config.save_to(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("visibility = \"public\""));
        assert!(written.contains("project_kind = \"rust-bin\""));

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "license_holder = \"Jane Doe\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.license_holder.as_deref(), Some("Jane Doe"));
        assert_eq!(config.visibility, Visibility::Private);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "visibility = \"internal\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(RepokitError::Toml(_))
        ));
    }
}
