//! GitHub API integration module
//!
//! This module provides all GitHub-related functionality:
//! - Authenticated client construction
//! - Repository, contents and topics endpoints
//! - The `GitHubApi` seam the workflows are written against
//! - Error classification

pub mod api;
pub mod client;
pub mod contents;
pub mod error_handler;
pub mod models;
pub mod repository;
pub mod topics;

pub use api::GitHubApi;
pub use client::GitHubClient;
pub use contents::ContentsHandler;
pub use error_handler::classify_github_error;
pub use models::{
    FileCommit, FileUpload, ListRepositories, NewRepository, RepoInfo, RepoOwnerFilter, RepoRef,
    RepoSettings, TemplateRepository, Visibility,
};
pub use repository::RepositoryHandler;
pub use topics::TopicsHandler;
