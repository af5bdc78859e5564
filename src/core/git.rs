//! Local git repository lookup
//!
//! Only used to find the `origin` remote when a command is run inside a
//! clone without naming the repository.

use std::path::Path;

use git2::Repository;

use crate::error::{RepokitError, Result};

/// Wrapper for local git repository operations
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open the git repository in the current directory
    pub fn open_current_dir() -> Result<Self> {
        Self::discover(".")
    }

    /// Discover a git repository from the given path
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| RepokitError::NotGitRepository)?;
        Ok(Self { repo })
    }

    /// Get the remote URL for a given remote name
    pub fn remote_url(&self, remote_name: &str) -> Result<String> {
        let remote = self
            .repo
            .find_remote(remote_name)
            .map_err(|_| RepokitError::NoGitHubRemote)?;
        remote
            .url()
            .map(|s| s.to_string())
            .ok_or(RepokitError::NoGitHubRemote)
    }

    /// Get the origin remote URL
    pub fn origin_url(&self) -> Result<String> {
        self.remote_url("origin")
    }
}
