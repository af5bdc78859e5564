//! CLI command definitions using clap
//!
//! Defines the command structure for the `repokit` CLI tool.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::github::Visibility;
use crate::templates::ProjectKind;

/// repokit - create, configure and scaffold GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "repokit", version, about, long_about = None)]
pub struct Cli {
    /// Show debug logging for repokit
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate with GitHub
    Auth(AuthArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Create a new repository
    Create(CreateArgs),

    /// Show repository details
    Info {
        /// Repository (OWNER/NAME, NAME, or URL); defaults to the current clone
        repo: Option<String>,

        /// Print the API response as JSON
        #[arg(long)]
        json: bool,
    },

    /// List repositories
    List {
        /// List another user's public repositories
        #[arg(long)]
        user: Option<String>,

        /// Filter by visibility (own repositories only)
        #[arg(long, default_value = "all")]
        visibility: VisibilityFilter,

        /// Maximum number of repositories to show
        #[arg(short = 'n', long, default_value = "30")]
        limit: u8,

        /// Print the API response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Copy feature and merge settings from one repository to another
    CloneSettings {
        /// Repository to copy from
        source: String,

        /// Repository to apply the settings to
        target: String,

        /// Do not copy topics
        #[arg(long)]
        no_topics: bool,
    },

    /// Add LICENSE-MIT and LICENSE-APACHE to a repository
    License {
        /// Repository (OWNER/NAME, NAME, or URL); defaults to the current clone
        repo: Option<String>,

        /// Copyright holder (defaults to the configured holder, then your login)
        #[arg(long)]
        holder: Option<String>,

        /// Copyright year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Branch to commit to (defaults to the repository's default branch)
        #[arg(long, short)]
        branch: Option<String>,
    },

    /// Add a starter project layout to a repository or a local directory
    Scaffold(ScaffoldArgs),

    /// Manage repository topics
    Topics(TopicsArgs),

    /// Create a repository from a template repository
    FromTemplate {
        /// Template repository
        template: String,

        /// Name of the new repository
        name: String,

        /// Owner of the new repository (defaults to the configured owner, then you)
        #[arg(long)]
        owner: Option<String>,

        /// Repository description
        #[arg(long, short)]
        description: Option<String>,

        /// Visibility of the new repository
        #[arg(long)]
        visibility: Option<Visibility>,

        /// Copy every branch of the template, not just the default one
        #[arg(long)]
        include_all_branches: bool,

        /// Print the API response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a repository as a template repository
    MarkTemplate {
        /// Repository (OWNER/NAME, NAME, or URL); defaults to the current clone
        repo: Option<String>,

        /// Clear the template flag instead of setting it
        #[arg(long)]
        unset: bool,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Authentication commands
#[derive(Parser, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    /// Store a Personal Access Token
    Login,
    /// Remove the stored token
    Logout,
    /// Show current authentication status
    Status,
}

// ─────────────────────────────────────────────────────────────────────────────
// Config Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: ConfigKey,

        /// Configuration value
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key
        key: ConfigKey,
    },

    /// Remove a configuration value
    Remove {
        /// Configuration key
        key: ConfigKey,
    },

    /// Print the configuration file location
    Path,
}

/// Available configuration keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigKey {
    /// Default owner (user or organization)
    #[value(name = "owner")]
    Owner,

    /// Default visibility of new repositories
    #[value(name = "visibility")]
    Visibility,

    /// Copyright holder for license files
    #[value(name = "license-holder")]
    LicenseHolder,

    /// Default layout for scaffold
    #[value(name = "project-kind")]
    ProjectKind,
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Arguments of `create`
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Repository name
    pub name: String,

    /// Create in this organization instead of your account
    #[arg(long)]
    pub org: Option<String>,

    /// Repository description
    #[arg(long, short)]
    pub description: Option<String>,

    /// Homepage URL
    #[arg(long)]
    pub homepage: Option<String>,

    /// Make the repository private
    #[arg(long, conflicts_with = "public")]
    pub private: bool,

    /// Make the repository public
    #[arg(long)]
    pub public: bool,

    /// Create an initial commit with an empty README
    #[arg(long)]
    pub auto_init: bool,

    /// .gitignore template to apply (e.g. Rust)
    #[arg(long)]
    pub gitignore: Option<String>,

    /// License template to apply (e.g. mit)
    #[arg(long)]
    pub license: Option<String>,

    /// Make the new repository a template
    #[arg(long)]
    pub template: bool,

    /// Disable issues
    #[arg(long)]
    pub no_issues: bool,

    /// Disable the wiki
    #[arg(long)]
    pub no_wiki: bool,

    /// Disable projects
    #[arg(long)]
    pub no_projects: bool,

    /// Print the API response as JSON
    #[arg(long)]
    pub json: bool,
}

impl CreateArgs {
    /// Explicit visibility choice, if any
    pub fn private_flag(&self) -> Option<bool> {
        match (self.private, self.public) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Arguments of `scaffold`
#[derive(Args, Debug)]
pub struct ScaffoldArgs {
    /// Repository (OWNER/NAME, NAME, or URL); defaults to the current clone
    pub repo: Option<String>,

    /// Layout to generate (defaults to the configured kind)
    #[arg(long, short)]
    pub kind: Option<ProjectKind>,

    /// Description used in README and Cargo.toml
    #[arg(long, short)]
    pub description: Option<String>,

    /// Branch to commit to (defaults to the repository's default branch)
    #[arg(long, short)]
    pub branch: Option<String>,

    /// Write the files into this directory instead of the remote repository
    #[arg(long, value_name = "DIR")]
    pub local: Option<std::path::PathBuf>,

    /// Overwrite existing local files
    #[arg(long, requires = "local")]
    pub force: bool,

    /// Copyright holder named in local output (defaults to the configured holder, then the owner)
    #[arg(long, requires = "local")]
    pub holder: Option<String>,
}

/// Visibility filter for `list`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum VisibilityFilter {
    #[default]
    All,
    Public,
    Private,
}

impl VisibilityFilter {
    pub fn to_visibility(self) -> Option<Visibility> {
        match self {
            VisibilityFilter::All => None,
            VisibilityFilter::Public => Some(Visibility::Public),
            VisibilityFilter::Private => Some(Visibility::Private),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Topic Commands
// ─────────────────────────────────────────────────────────────────────────────

/// Topic commands
#[derive(Parser, Debug)]
pub struct TopicsArgs {
    #[command(subcommand)]
    pub command: TopicsCommand,
}

#[derive(Subcommand, Debug)]
pub enum TopicsCommand {
    /// List topics
    List {
        /// Repository (OWNER/NAME, NAME, or URL); defaults to the current clone
        #[arg(long, short)]
        repo: Option<String>,
    },

    /// Add topics, keeping existing ones
    Add {
        /// Repository (OWNER/NAME, NAME, or URL); defaults to the current clone
        #[arg(long, short)]
        repo: Option<String>,

        /// Topics to add
        #[arg(required = true)]
        topics: Vec<String>,
    },

    /// Replace all topics
    Set {
        /// Repository (OWNER/NAME, NAME, or URL); defaults to the current clone
        #[arg(long, short)]
        repo: Option<String>,

        /// New topics (none clears them)
        topics: Vec<String>,
    },
}
