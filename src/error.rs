//! Custom error types for repokit
//!
//! User-friendly error messages for all failure scenarios.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the repokit application
#[derive(Error, Debug)]
pub enum RepokitError {
    /// Not running in a git repository
    #[error("This directory is not a git repository.\n\n  → Pass the repository explicitly as OWNER/NAME, or run the command inside a clone.")]
    NotGitRepository,

    /// No GitHub remote found
    #[error("No GitHub remote found in this repository.\n\n  → Make sure 'origin' points to a GitHub URL.\n  → Run 'git remote -v' to check your remotes.")]
    NoGitHubRemote,

    /// Invalid GitHub URL format
    #[error("Cannot parse GitHub URL: {0}\n\n  → Expected format: https://github.com/owner/repo or git@github.com:owner/repo")]
    InvalidGitHubUrl(String),

    /// Repository argument could not be parsed
    #[error("Invalid repository '{0}'.\n\n  → Expected OWNER/NAME, NAME, or a GitHub URL.")]
    InvalidRepoRef(String),

    /// User is not authenticated
    #[error("You are not logged in to GitHub.\n\n  → Run 'repokit auth login' or set GITHUB_TOKEN.")]
    NotAuthenticated,

    /// Authentication process failed
    #[error("GitHub authentication failed: {0}\n\n  → Check the token and run 'repokit auth login' again.")]
    AuthenticationFailed(String),

    /// GitHub API error
    #[error("GitHub API request failed: {0}\n\n  → Check your internet connection.\n  → Your token may have expired - try 'repokit auth logout' then 'repokit auth login'.")]
    GitHubApi(String),

    /// Rate limit hit
    #[error("GitHub API rate limit exceeded.\n\n  → Wait a few minutes and try again.")]
    RateLimited,

    /// Resource missing or hidden from this token
    #[error("Not found: {0}\n\n  → The repository may be private, or your token may lack the 'repo' scope.")]
    NotFound(String),

    /// Organization enforces SAML single sign-on
    #[error(
        "Access to {org} requires SAML single sign-on.\n\n  \
        → Authorize your token for the organization at https://github.com/settings/tokens"
    )]
    SsoRequired {
        /// Organization name, or a generic label when GitHub did not name it
        org: String,
    },

    /// GitHub rejected the request body
    #[error("GitHub rejected the request: {0}")]
    Validation(String),

    /// Repository with the requested name already exists
    #[error("A repository with this name already exists on the target account.\n\n  → Choose a different name, or run 'repokit info OWNER/NAME' to inspect it.")]
    RepositoryExists,

    /// Topic does not satisfy GitHub's naming rules
    #[error("Invalid topic '{0}'.\n\n  → Topics must start with a lowercase letter or number, contain only lowercase letters, numbers and hyphens, and be at most 50 characters.")]
    InvalidTopic(String),

    /// Too many topics for one repository
    #[error("A repository can have at most {max} topics, got {count}.")]
    TooManyTopics { count: usize, max: usize },

    /// Local scaffold target already exists
    #[error("File already exists: {}\n\n  → Use --force to overwrite it.", .0.display())]
    FileExists(PathBuf),

    /// Git operation error
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    /// Credential storage error
    #[error("Cannot access secure storage: {0}\n\n  → On macOS: Make sure Keychain Access is available.\n  → On Linux: Ensure a secret service (like gnome-keyring) is running.\n  → Or set GITHUB_TOKEN instead.")]
    Credential(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<keyring::Error> for RepokitError {
    fn from(err: keyring::Error) -> Self {
        RepokitError::Credential(err.to_string())
    }
}

impl From<toml::de::Error> for RepokitError {
    fn from(err: toml::de::Error) -> Self {
        RepokitError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for RepokitError {
    fn from(err: toml::ser::Error) -> Self {
        RepokitError::Toml(err.to_string())
    }
}

impl From<octocrab::Error> for RepokitError {
    fn from(err: octocrab::Error) -> Self {
        // Use the error handler to classify and provide actionable guidance
        crate::github::error_handler::classify_github_error(err)
    }
}

/// Result type alias using RepokitError
pub type Result<T> = std::result::Result<T, RepokitError>;
