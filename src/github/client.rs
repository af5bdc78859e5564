//! GitHub API client wrapper using octocrab

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};

use crate::core::CredentialStore;
use crate::error::Result;

/// GitHub API client wrapper
///
/// Holds one authenticated octocrab instance for the lifetime of a command.
/// Endpoint-specific calls live in the handler types that borrow it.
pub struct GitHubClient {
    /// The octocrab instance
    inner: Octocrab,
}

impl GitHubClient {
    /// Create a client from the stored credentials
    ///
    /// Token lookup order is `GITHUB_TOKEN`, `GH_TOKEN`, then the system keyring.
    pub fn new() -> Result<Self> {
        let token = CredentialStore::require_github_token()?;
        Self::with_token(&token)
    }

    /// Create a client for an explicit token
    pub fn with_token(token: &SecretString) -> Result<Self> {
        let octocrab = Octocrab::builder()
            .personal_token(token.expose_secret().to_string())
            .build()?;

        Ok(Self { inner: octocrab })
    }

    /// Client pointed at another API root, such as a local mock server
    #[cfg(test)]
    pub(crate) fn with_base_uri(token: &SecretString, base_uri: &str) -> Result<Self> {
        let octocrab = Octocrab::builder()
            .base_uri(base_uri)?
            .personal_token(token.expose_secret().to_string())
            .build()?;

        Ok(Self { inner: octocrab })
    }

    /// Get the inner octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.inner
    }
}

/// Client for a `mockito` server with a dummy token
#[cfg(test)]
pub(crate) fn mock_client(server: &mockito::ServerGuard) -> GitHubClient {
    let token = SecretString::from("ghp_test_token".to_string());
    GitHubClient::with_base_uri(&token, &server.url()).unwrap()
}
