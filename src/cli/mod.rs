//! CLI module for repokit
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod auth;
pub mod commands;
pub mod config;
pub mod repo;
pub mod topics;

pub use commands::{Cli, Commands};

use crate::core::Config;
use crate::error::Result;
use crate::github::GitHubClient;
use crate::manager::RepoManager;

/// Authenticate and build the manager every remote command runs through
pub(crate) async fn connect() -> Result<RepoManager<GitHubClient>> {
    let config = Config::load()?;
    let client = GitHubClient::new()?;
    RepoManager::connect(client, config).await
}
