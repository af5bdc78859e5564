//! Static file templates
//!
//! License texts and starter project layouts, rendered from a
//! `TemplateContext`. Nothing here touches the network or the filesystem.

pub mod license;
pub mod scaffold;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use license::{LicenseFile, DUAL_LICENSE_FILES};
pub use scaffold::ScaffoldFile;

/// Starter layout produced by `scaffold`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    /// Rust library crate
    #[default]
    RustLib,
    /// Rust binary crate
    RustBin,
    /// README, .gitignore and docs only
    Generic,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::RustLib => "rust-lib",
            ProjectKind::RustBin => "rust-bin",
            ProjectKind::Generic => "generic",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.as_str() == s)
    }

    /// Get all available kinds
    pub fn all() -> &'static [ProjectKind] {
        &[ProjectKind::RustLib, ProjectKind::RustBin, ProjectKind::Generic]
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values substituted into the templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    /// Repository name
    pub name: String,
    /// Repository owner
    pub owner: String,
    pub description: Option<String>,
    /// Copyright holder
    pub holder: String,
    /// Copyright year
    pub year: i32,
}

impl TemplateContext {
    /// Cargo package name derived from the repository name
    ///
    /// Cargo names must start with a letter or `_`, so names such as
    /// `3d-engine` get an underscore prefix.
    pub fn package_name(&self) -> String {
        let name: String = self
            .name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '-' })
            .collect();
        let name = name.trim_start_matches('-');
        match name.chars().next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => name.to_string(),
            _ => format!("_{}", name),
        }
    }

    /// Rust identifier of the crate (`-` becomes `_`)
    pub fn crate_ident(&self) -> String {
        self.package_name().replace('-', "_")
    }

    pub fn description_or_default(&self) -> String {
        self.description
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("{} by {}", self.name, self.owner))
    }
}

#[cfg(test)]
pub(crate) fn test_context() -> TemplateContext {
    TemplateContext {
        name: "My.Widget".to_string(),
        owner: "acme".to_string(),
        description: None,
        holder: "Acme Corp".to_string(),
        year: 2024,
    }
}
