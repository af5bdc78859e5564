//! Topic CLI command handlers

use crate::cli::commands::TopicsCommand;
use crate::cli::connect;
use crate::core::RepoSpec;
use crate::error::Result;
use crate::github::topics::normalize_topics;

/// Handle topic commands
pub async fn handle_topics(command: TopicsCommand) -> Result<()> {
    match command {
        TopicsCommand::List { repo } => {
            let spec = RepoSpec::parse_or_detect(repo.as_deref())?;
            let manager = connect().await?;
            let repo = manager.resolve(spec);

            let topics = manager.topics(&repo).await?;
            if topics.is_empty() {
                println!("{} has no topics.", repo);
            } else {
                println!("Topics for {}:", repo);
                for topic in topics {
                    println!("  {}", topic);
                }
            }
        }
        TopicsCommand::Add { repo, topics } => {
            // Fail on bad names before authenticating
            let topics = normalize_topics(&topics)?;
            let spec = RepoSpec::parse_or_detect(repo.as_deref())?;
            let manager = connect().await?;
            let repo = manager.resolve(spec);

            let updated = manager.add_topics(&repo, &topics).await?;
            println!("✓ Topics for {}: {}", repo, updated.join(", "));
        }
        TopicsCommand::Set { repo, topics } => {
            let topics = normalize_topics(&topics)?;
            let spec = RepoSpec::parse_or_detect(repo.as_deref())?;
            let manager = connect().await?;
            let repo = manager.resolve(spec);

            let updated = manager.replace_topics(&repo, &topics).await?;
            if updated.is_empty() {
                println!("✓ Cleared topics for {}", repo);
            } else {
                println!("✓ Topics for {}: {}", repo, updated.join(", "));
            }
        }
    }
    Ok(())
}
