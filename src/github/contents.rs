//! Repository contents: create or update single files

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::github::client::GitHubClient;
use crate::github::models::{ContentEntry, FileCommit, FileUpload, RepoRef};

#[derive(Debug, Serialize)]
struct RefQuery<'a> {
    #[serde(rename = "ref")]
    reference: &'a str,
}

/// Contents API handler
pub struct ContentsHandler<'a> {
    client: &'a GitHubClient,
}

impl<'a> ContentsHandler<'a> {
    /// Create a new handler
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Blob sha of the file at `path`, or `None` when it does not exist
    pub async fn file_sha(
        &self,
        repo: &RepoRef,
        path: &str,
        branch: Option<&str>,
    ) -> Result<Option<String>> {
        // GitHub API: GET /repos/{owner}/{repo}/contents/{path}
        let route = contents_route(repo, path);
        debug!(%route, ?branch, "looking up file");

        let octocrab = self.client.octocrab();
        let response: octocrab::Result<ContentEntry> = match branch {
            Some(reference) => octocrab.get(&route, Some(&RefQuery { reference })).await,
            None => octocrab.get(&route, None::<&()>).await,
        };

        match response {
            Ok(entry) => Ok(Some(entry.sha)),
            Err(octocrab::Error::GitHub { source, .. }) if source.status_code.as_u16() == 404 => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write one file; `upload.sha` must be set when the file already exists
    pub async fn put(&self, repo: &RepoRef, upload: &FileUpload) -> Result<FileCommit> {
        // GitHub API: PUT /repos/{owner}/{repo}/contents/{path}
        let route = contents_route(repo, &upload.path);
        debug!(%route, update = upload.sha.is_some(), "writing file");

        let commit: FileCommit = self.client.octocrab().put(&route, Some(upload)).await?;
        Ok(commit)
    }
}

fn contents_route(repo: &RepoRef, path: &str) -> String {
    format!("{}/contents/{}", repo.route(), path.trim_start_matches('/'))
}
