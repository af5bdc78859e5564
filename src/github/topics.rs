//! Repository topics: listing, replacing and validation

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{RepokitError, Result};
use crate::github::client::GitHubClient;
use crate::github::models::{RepoRef, Topics};

/// GitHub's limit on topics per repository
pub const MAX_TOPICS: usize = 20;

static TOPIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9-]{0,49}$").expect("Invalid regex pattern for topic validation")
});

/// Normalize a topic and check it against GitHub's naming rules
pub fn normalize_topic(topic: &str) -> Result<String> {
    let normalized = topic.trim().to_lowercase();
    if TOPIC_PATTERN.is_match(&normalized) {
        Ok(normalized)
    } else {
        Err(RepokitError::InvalidTopic(topic.to_string()))
    }
}

/// Normalize every topic, dropping duplicates while keeping first-seen order
pub fn normalize_topics<S: AsRef<str>>(topics: &[S]) -> Result<Vec<String>> {
    let mut normalized: Vec<String> = Vec::with_capacity(topics.len());
    for topic in topics {
        let topic = normalize_topic(topic.as_ref())?;
        if !normalized.contains(&topic) {
            normalized.push(topic);
        }
    }
    ensure_topic_count(normalized.len())?;
    Ok(normalized)
}

/// Append `additions` to `existing`, skipping topics already present
pub fn merge_topics(existing: &[String], additions: &[String]) -> Result<Vec<String>> {
    let mut merged = existing.to_vec();
    for topic in additions {
        if !merged.contains(topic) {
            merged.push(topic.clone());
        }
    }
    ensure_topic_count(merged.len())?;
    Ok(merged)
}

fn ensure_topic_count(count: usize) -> Result<()> {
    if count > MAX_TOPICS {
        return Err(RepokitError::TooManyTopics {
            count,
            max: MAX_TOPICS,
        });
    }
    Ok(())
}

/// Topics API handler
pub struct TopicsHandler<'a> {
    client: &'a GitHubClient,
}

impl<'a> TopicsHandler<'a> {
    /// Create a new handler
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// List the topics of a repository
    pub async fn list(&self, repo: &RepoRef) -> Result<Vec<String>> {
        // GitHub API: GET /repos/{owner}/{repo}/topics
        let route = format!("{}/topics", repo.route());
        debug!(%route, "listing topics");

        let topics: Topics = self.client.octocrab().get(&route, None::<&()>).await?;
        Ok(topics.names)
    }

    /// Replace all topics of a repository
    pub async fn replace(&self, repo: &RepoRef, names: &[String]) -> Result<Vec<String>> {
        // GitHub API: PUT /repos/{owner}/{repo}/topics
        let route = format!("{}/topics", repo.route());
        debug!(%route, count = names.len(), "replacing topics");

        let body = Topics {
            names: names.to_vec(),
        };
        let topics: Topics = self.client.octocrab().put(&route, Some(&body)).await?;
        Ok(topics.names)
    }
}
