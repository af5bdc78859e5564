//! Configuration CLI command handlers

use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::Config;
use crate::error::{RepokitError, Result};
use crate::github::Visibility;
use crate::templates::ProjectKind;

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => {
            let mut config = Config::load()?;
            set_value(&mut config, key, &value)?;
            config.save()?;
            println!("{} set to: {}", key_name(key), display_value(&config, key));
        }
        ConfigCommand::Get { key } => {
            let config = Config::load()?;
            println!("{}: {}", key_name(key), display_value(&config, key));
        }
        ConfigCommand::Remove { key } => {
            let mut config = Config::load()?;
            remove_value(&mut config, key);
            config.save()?;
            println!(
                "{} reset to default: {}",
                key_name(key),
                display_value(&config, key)
            );
        }
        ConfigCommand::Path => {
            println!("{}", Config::config_path()?.display());
        }
    }
    Ok(())
}

fn key_name(key: ConfigKey) -> &'static str {
    match key {
        ConfigKey::Owner => "Default owner",
        ConfigKey::Visibility => "Default visibility",
        ConfigKey::LicenseHolder => "License holder",
        ConfigKey::ProjectKind => "Project kind",
    }
}

/// Apply `value` to `key`, validating it first
fn set_value(config: &mut Config, key: ConfigKey, value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RepokitError::InvalidInput(format!(
            "{} cannot be empty. Use 'repokit config remove' to reset it.",
            key_name(key)
        )));
    }

    match key {
        ConfigKey::Owner => config.default_owner = Some(value.to_string()),
        ConfigKey::Visibility => config.visibility = value.parse::<Visibility>()?,
        ConfigKey::LicenseHolder => config.license_holder = Some(value.to_string()),
        ConfigKey::ProjectKind => {
            config.project_kind = ProjectKind::parse(value).ok_or_else(|| {
                RepokitError::InvalidInput(format!(
                    "Invalid project kind '{}'. Available kinds: {}",
                    value,
                    ProjectKind::all()
                        .iter()
                        .map(|k| k.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })?
        }
    }
    Ok(())
}

fn remove_value(config: &mut Config, key: ConfigKey) {
    let defaults = Config::default();
    match key {
        ConfigKey::Owner => config.default_owner = defaults.default_owner,
        ConfigKey::Visibility => config.visibility = defaults.visibility,
        ConfigKey::LicenseHolder => config.license_holder = defaults.license_holder,
        ConfigKey::ProjectKind => config.project_kind = defaults.project_kind,
    }
}

fn display_value(config: &Config, key: ConfigKey) -> String {
    match key {
        ConfigKey::Owner => config
            .default_owner
            .clone()
            .unwrap_or_else(|| "(authenticated user)".to_string()),
        ConfigKey::Visibility => config.visibility.to_string(),
        ConfigKey::LicenseHolder => config
            .license_holder
            .clone()
            .unwrap_or_else(|| "(authenticated user)".to_string()),
        ConfigKey::ProjectKind => config.project_kind.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_remove_values() {
        let mut config = Config::default();

        set_value(&mut config, ConfigKey::Owner, " acme ").unwrap();
        set_value(&mut config, ConfigKey::Visibility, "public").unwrap();
        set_value(&mut config, ConfigKey::ProjectKind, "generic").unwrap();
        assert_eq!(config.default_owner.as_deref(), Some("acme"));
        assert_eq!(config.visibility, Visibility::Public);
        assert_eq!(display_value(&config, ConfigKey::ProjectKind), "generic");

        remove_value(&mut config, ConfigKey::Owner);
        remove_value(&mut config, ConfigKey::Visibility);
        assert_eq!(config.default_owner, None);
        assert_eq!(config.visibility, Visibility::Private);
        assert_eq!(
            display_value(&config, ConfigKey::Owner),
            "(authenticated user)"
        );
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(set_value(&mut config, ConfigKey::Visibility, "internal").is_err());
        assert!(set_value(&mut config, ConfigKey::ProjectKind, "python").is_err());
        assert!(set_value(&mut config, ConfigKey::LicenseHolder, "   ").is_err());
        assert_eq!(config, Config::default());
    }
}
