//! repokit - GitHub repository toolkit
//!
//! Create repositories, copy settings between them, add license files and
//! starter layouts, and manage topics from the command line.
//!
//! Available as the `repokit` and `rk` commands.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use repokit::cli::commands::{Cli, Commands};
use repokit::cli::{auth, config, repo, topics};
use repokit::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("warn,repokit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Auth(args) => auth::handle_auth(args.command).await,
        Commands::Config(args) => config::handle_config(args.command),
        Commands::Create(args) => repo::handle_create(args).await,
        Commands::Info { repo: target, json } => repo::handle_info(target, json).await,
        Commands::List {
            user,
            visibility,
            limit,
            json,
        } => repo::handle_list(user, visibility, limit, json).await,
        Commands::CloneSettings {
            source,
            target,
            no_topics,
        } => repo::handle_clone_settings(source, target, no_topics).await,
        Commands::License {
            repo: target,
            holder,
            year,
            branch,
        } => repo::handle_license(target, holder, year, branch).await,
        Commands::Scaffold(args) => repo::handle_scaffold(args).await,
        Commands::Topics(args) => topics::handle_topics(args.command).await,
        Commands::FromTemplate {
            template,
            name,
            owner,
            description,
            visibility,
            include_all_branches,
            json,
        } => {
            repo::handle_from_template(
                template,
                name,
                owner,
                description,
                visibility,
                include_all_branches,
                json,
            )
            .await
        }
        Commands::MarkTemplate { repo: target, unset } => {
            repo::handle_mark_template(target, unset).await
        }
    }
}
