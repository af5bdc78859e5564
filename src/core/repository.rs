//! Repository argument parsing and detection
//!
//! Commands accept a repository as `OWNER/NAME`, a bare `NAME`, or a GitHub
//! URL. When the argument is omitted the `origin` remote of the current git
//! repository is used.

use url::Url;

use crate::core::git::GitRepository;
use crate::error::{RepokitError, Result};
use crate::github::RepoRef;

/// A repository argument before owner defaults are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSpec {
    /// Owner given explicitly
    Full(RepoRef),
    /// Only the name; owner comes from config or the authenticated user
    NameOnly(String),
}

impl RepoSpec {
    /// Parse a command-line repository argument
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RepokitError::InvalidRepoRef(input.to_string()));
        }

        if looks_like_url(input) {
            let (owner, name) = parse_github_url(input)?;
            return Ok(RepoSpec::Full(RepoRef::new(owner, name)));
        }

        let parts: Vec<&str> = input.split('/').collect();
        match parts.as_slice() {
            [name] if is_valid_segment(name) => Ok(RepoSpec::NameOnly(name.to_string())),
            [owner, name] if is_valid_segment(owner) && is_valid_segment(name) => {
                Ok(RepoSpec::Full(RepoRef::new(*owner, *name)))
            }
            _ => Err(RepokitError::InvalidRepoRef(input.to_string())),
        }
    }

    /// Use the `origin` remote of the repository in the current directory
    pub fn detect() -> Result<Self> {
        let git_repo = GitRepository::open_current_dir()?;
        let remote_url = git_repo.origin_url()?;
        let (owner, name) = parse_github_url(&remote_url)?;
        Ok(RepoSpec::Full(RepoRef::new(owner, name)))
    }

    /// Parse `input` when given, otherwise detect from the current directory
    pub fn parse_or_detect(input: Option<&str>) -> Result<Self> {
        match input {
            Some(input) => Self::parse(input),
            None => Self::detect(),
        }
    }

    /// Resolve to a full reference using `default_owner` for bare names
    pub fn with_owner(self, default_owner: &str) -> RepoRef {
        match self {
            RepoSpec::Full(repo) => repo,
            RepoSpec::NameOnly(name) => RepoRef::new(default_owner, name),
        }
    }
}

fn looks_like_url(input: &str) -> bool {
    input.contains("://") || input.starts_with("git@")
}

/// GitHub allows letters, digits, `-`, `_` and `.`
fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Parse a GitHub URL to extract owner and repository name
///
/// Supports both HTTPS and SSH URL formats:
/// - `https://github.com/owner/repo.git`
/// - `https://github.com/owner/repo`
/// - `git@github.com:owner/repo.git`
/// - `git@github.com:owner/repo`
/// - `ssh://git@github.com/owner/repo.git`
pub fn parse_github_url(url: &str) -> Result<(String, String)> {
    // SSH format: git@github.com:owner/repo.git
    if let Some(path) = url.strip_prefix("git@github.com:") {
        return parse_owner_repo_path(path.trim_end_matches(".git"));
    }

    // SSH URL format: ssh://git@github.com/owner/repo.git
    if let Some(path) = url.strip_prefix("ssh://git@github.com/") {
        return parse_owner_repo_path(path.trim_end_matches(".git"));
    }

    // HTTPS format
    if let Ok(parsed) = Url::parse(url) {
        if parsed.host_str() == Some("github.com") {
            let path = parsed
                .path()
                .trim_start_matches('/')
                .trim_end_matches('/')
                .trim_end_matches(".git");
            return parse_owner_repo_path(path);
        }
    }

    Err(RepokitError::InvalidGitHubUrl(url.to_string()))
}

/// Parse owner/repo from a path string
fn parse_owner_repo_path(path: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() >= 2 {
        let owner = parts[0].to_string();
        let repo = parts[1].to_string();
        if !owner.is_empty() && !repo.is_empty() {
            return Ok((owner, repo));
        }
    }
    Err(RepokitError::InvalidGitHubUrl(path.to_string()))
}
