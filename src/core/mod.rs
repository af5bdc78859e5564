//! Core functionality for repokit
//!
//! This module contains shared logic that does not talk to GitHub:
//! - Repository argument parsing and origin detection
//! - Credential storage
//! - Application configuration

pub mod config;
pub mod credentials;
pub mod git;
pub mod repository;

pub use config::Config;
pub use credentials::{CredentialStore, TokenSource};
pub use git::GitRepository;
pub use repository::{parse_github_url, RepoSpec};
