//! repokit - create, configure and scaffold GitHub repositories
//!
//! This library wraps the GitHub REST API with one method per repository
//! workflow (see [`manager::RepoManager`]) and provides the `repokit` CLI
//! built on top of it.

pub mod cli;
pub mod core;
pub mod error;
pub mod github;
pub mod manager;
pub mod templates;

pub use error::{RepokitError, Result};
pub use manager::RepoManager;
