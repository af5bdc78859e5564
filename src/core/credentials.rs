//! Secure credential storage using the system keyring
//!
//! Stores the GitHub personal access token in the system keyring
//! (macOS Keychain, Linux Secret Service) with in-memory caching to
//! minimize keychain prompts.
//!
//! ## Environment Variable Fallback
//!
//! For scripts and CI, the token can be supplied through `GITHUB_TOKEN`
//! or `GH_TOKEN`.
//!
//! Priority: `GITHUB_TOKEN` > `GH_TOKEN` > cache > keyring

use std::sync::RwLock;

use keyring::Entry;
use once_cell::sync::Lazy;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{RepokitError, Result};

const SERVICE_NAME: &str = "repokit";
const GITHUB_TOKEN_KEY: &str = "github_token";

// Environment variable names, in priority order
const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

// In-memory credential cache
// Option<Option<T>>:
//   - None = not yet fetched from keyring
//   - Some(None) = fetched, but no credential exists
//   - Some(Some(value)) = fetched and cached
static GITHUB_TOKEN_CACHE: Lazy<RwLock<Option<Option<SecretString>>>> =
    Lazy::new(|| RwLock::new(None));

/// Where the active token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Environment(&'static str),
    Keyring,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Environment(var) => write!(f, "environment variable {}", var),
            TokenSource::Keyring => write!(f, "system keyring"),
        }
    }
}

/// Credential store for secure token management
pub struct CredentialStore;

impl CredentialStore {
    /// Store the GitHub token securely
    ///
    /// Updates both the keyring and the in-memory cache.
    pub fn store_github_token(token: &str) -> Result<()> {
        let entry = Entry::new(SERVICE_NAME, GITHUB_TOKEN_KEY)?;
        entry.set_password(token)?;

        if let Ok(mut cache) = GITHUB_TOKEN_CACHE.write() {
            *cache = Some(Some(SecretString::from(token.to_string())));
        }

        Ok(())
    }

    /// Retrieve the GitHub token along with where it came from
    pub fn get_github_token_with_source() -> Result<Option<(SecretString, TokenSource)>> {
        if let Some((token, var)) = Self::token_from_env() {
            return Ok(Some((token, TokenSource::Environment(var))));
        }

        if let Ok(cache) = GITHUB_TOKEN_CACHE.read() {
            if let Some(cached_value) = cache.as_ref() {
                return Ok(cached_value
                    .clone()
                    .map(|token| (token, TokenSource::Keyring)));
            }
        }

        let result = Self::fetch_github_token_from_keyring()?;

        if let Ok(mut cache) = GITHUB_TOKEN_CACHE.write() {
            *cache = Some(result.clone());
        }

        Ok(result.map(|token| (token, TokenSource::Keyring)))
    }

    /// Retrieve the GitHub token
    ///
    /// Priority: environment variables > cache > keyring
    pub fn get_github_token() -> Result<Option<SecretString>> {
        Ok(Self::get_github_token_with_source()?.map(|(token, _)| token))
    }

    fn token_from_env() -> Option<(SecretString, &'static str)> {
        TOKEN_ENV_VARS.iter().find_map(|var| {
            std::env::var(var)
                .ok()
                .filter(|token| !token.trim().is_empty())
                .map(|token| (SecretString::from(token.trim().to_string()), *var))
        })
    }

    /// Fetch GitHub token directly from keyring (no cache)
    fn fetch_github_token_from_keyring() -> Result<Option<SecretString>> {
        let entry = Entry::new(SERVICE_NAME, GITHUB_TOKEN_KEY)?;
        match entry.get_password() {
            Ok(password) => Ok(Some(SecretString::from(password))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(RepokitError::Credential(format!(
                "Cannot access system keychain. Make sure your keyring is unlocked. ({})",
                e
            ))),
        }
    }

    /// Delete the stored GitHub token
    ///
    /// Clears both the keyring and the in-memory cache.
    pub fn delete_github_token() -> Result<()> {
        let entry = Entry::new(SERVICE_NAME, GITHUB_TOKEN_KEY)?;
        let result = match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()), // Already deleted
            Err(e) => Err(RepokitError::Credential(e.to_string())),
        };

        if let Ok(mut cache) = GITHUB_TOKEN_CACHE.write() {
            *cache = Some(None);
        }

        result
    }

    /// Get the GitHub token, returning an error if not authenticated
    pub fn require_github_token() -> Result<SecretString> {
        Self::get_github_token()?.ok_or(RepokitError::NotAuthenticated)
    }

    /// Get a masked version of a token for display (shows first 4 and last 4 chars)
    pub fn mask_token(token: &SecretString) -> String {
        let exposed = token.expose_secret();
        if exposed.len() <= 8 {
            "*".repeat(exposed.len())
        } else {
            format!("{}...{}", &exposed[..4], &exposed[exposed.len() - 4..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        let short = SecretString::from("abc");
        assert_eq!(CredentialStore::mask_token(&short), "***");

        let long = SecretString::from("ghp_1234567890abcdef");
        assert_eq!(CredentialStore::mask_token(&long), "ghp_...cdef");
    }

    #[test]
    fn test_token_source_display() {
        assert_eq!(
            TokenSource::Environment("GH_TOKEN").to_string(),
            "environment variable GH_TOKEN"
        );
        assert_eq!(TokenSource::Keyring.to_string(), "system keyring");
    }
}
