//! Authentication CLI command handlers

use std::io::{self, Write};
use std::process::Command;

use secrecy::SecretString;

use crate::cli::commands::AuthCommand;
use crate::core::credentials::{CredentialStore, TokenSource};
use crate::error::{RepokitError, Result};
use crate::github::{GitHubApi, GitHubClient};

/// Page that pre-selects the scopes repokit needs
const TOKEN_URL: &str = "https://github.com/settings/tokens/new?scopes=repo&description=repokit";

/// Handle authentication commands
pub async fn handle_auth(command: AuthCommand) -> Result<()> {
    match command {
        AuthCommand::Login => handle_login().await,
        AuthCommand::Logout => handle_logout(),
        AuthCommand::Status => handle_status().await,
    }
}

/// Handle login using a Personal Access Token
async fn handle_login() -> Result<()> {
    if let Some((_, TokenSource::Environment(var))) =
        CredentialStore::get_github_token_with_source()?
    {
        println!("Note: {} is set and takes precedence over a stored token.", var);
        println!();
    }

    println!("Personal Access Token Authentication");
    println!("====================================");
    println!();
    println!("To create a token:");
    println!("  1. Go to: https://github.com/settings/tokens/new");
    println!("  2. Give it a name (e.g., 'repokit')");
    println!("  3. Select the 'repo' scope (add 'delete_repo' only if you need it)");
    println!("  4. Click 'Generate token' and copy it");
    println!();

    if open_browser(TOKEN_URL) {
        println!("✓ Browser opened to token creation page.");
        println!();
    }

    print!("Paste your token here: ");
    io::stdout().flush()?;

    let mut token = String::new();
    io::stdin().read_line(&mut token)?;
    let token = token.trim().to_string();

    if token.is_empty() {
        return Err(RepokitError::InvalidInput("No token provided".to_string()));
    }

    println!();
    println!("Validating token...");
    let login = validate_token(&token).await?;
    println!("✓ Token valid! Logged in as @{}", login);

    CredentialStore::store_github_token(&token)?;

    println!();
    println!("✓ Token stored in the system keyring.");
    Ok(())
}

/// Validate a GitHub token by making a test API call
async fn validate_token(token: &str) -> Result<String> {
    let client = GitHubClient::with_token(&SecretString::from(token.to_string()))
        .map_err(|e| RepokitError::AuthenticationFailed(e.to_string()))?;

    client.current_user().await.map_err(|_| {
        RepokitError::AuthenticationFailed(
            "Invalid token. Please check the token and try again.".to_string(),
        )
    })
}

/// Try to open a URL in the default browser
fn open_browser(url: &str) -> bool {
    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn().is_ok()
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn().is_ok()
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd")
            .args(["/C", "start", url])
            .spawn()
            .is_ok()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = (url, Command::new);
        false
    }
}

/// Handle the logout command
fn handle_logout() -> Result<()> {
    CredentialStore::delete_github_token()?;
    println!("Stored token removed.");

    if let Ok(Some((_, TokenSource::Environment(var)))) =
        CredentialStore::get_github_token_with_source()
    {
        println!("  {} is still set in your environment.", var);
    }
    Ok(())
}

/// Handle the status command
async fn handle_status() -> Result<()> {
    println!("Authentication Status:");

    let Some((token, source)) = CredentialStore::get_github_token_with_source()? else {
        println!("  GitHub: Not authenticated");
        println!();
        println!("  Run 'repokit auth login' or set GITHUB_TOKEN.");
        return Ok(());
    };

    println!("  Token:  {}", CredentialStore::mask_token(&token));
    println!("  Source: {}", source);

    let client = GitHubClient::with_token(&token)?;
    match client.current_user().await {
        Ok(login) => println!("  GitHub: Logged in as @{}", login),
        Err(e) => {
            println!("  GitHub: Token rejected");
            tracing::debug!(error = %e, "token validation failed");
        }
    }

    Ok(())
}
