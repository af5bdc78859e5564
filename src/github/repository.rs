//! Repository endpoints: create, get, list, update and generate

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::github::client::GitHubClient;
use crate::github::models::{
    ListRepositories, NewRepository, RepoInfo, RepoOwnerFilter, RepoRef, RepoSettings,
    TemplateRepository,
};

/// Query string of the list endpoints
#[derive(Debug, Serialize)]
struct ListQuery<'a> {
    per_page: u8,
    sort: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    visibility: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
}

/// Repository operations handler
pub struct RepositoryHandler<'a> {
    client: &'a GitHubClient,
}

impl<'a> RepositoryHandler<'a> {
    /// Create a new handler
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Create a repository for the authenticated user or an organization
    pub async fn create(&self, request: &NewRepository) -> Result<RepoInfo> {
        // GitHub API: POST /user/repos or POST /orgs/{org}/repos
        let route = match &request.org {
            Some(org) => format!("/orgs/{}/repos", org),
            None => "/user/repos".to_string(),
        };
        debug!(%route, name = %request.name, "creating repository");

        let repo: RepoInfo = self.client.octocrab().post(&route, Some(request)).await?;
        Ok(repo)
    }

    /// Fetch a single repository
    pub async fn get(&self, repo: &RepoRef) -> Result<RepoInfo> {
        let route = repo.route();
        debug!(%route, "fetching repository");

        let info: RepoInfo = self.client.octocrab().get(&route, None::<&()>).await?;
        Ok(info)
    }

    /// List repositories, most recently updated first
    pub async fn list(&self, query: &ListRepositories) -> Result<Vec<RepoInfo>> {
        let (route, params) = match &query.owner {
            RepoOwnerFilter::Authenticated => (
                "/user/repos".to_string(),
                ListQuery {
                    per_page: query.limit,
                    sort: "updated",
                    visibility: query.visibility.as_ref().map(|v| v.as_str()),
                    kind: None,
                },
            ),
            // Visibility is not a filter on another user's list; only public repos come back
            RepoOwnerFilter::User(user) => (
                format!("/users/{}/repos", user),
                ListQuery {
                    per_page: query.limit,
                    sort: "updated",
                    visibility: None,
                    kind: Some("owner"),
                },
            ),
        };
        debug!(%route, limit = query.limit, "listing repositories");

        let repos: Vec<RepoInfo> = self.client.octocrab().get(&route, Some(&params)).await?;
        Ok(repos)
    }

    /// Apply settings to a repository
    pub async fn update(&self, repo: &RepoRef, settings: &RepoSettings) -> Result<RepoInfo> {
        // GitHub API: PATCH /repos/{owner}/{repo}
        let route = repo.route();
        debug!(%route, "updating repository settings");

        let info: RepoInfo = self
            .client
            .octocrab()
            .patch(&route, Some(settings))
            .await?;
        Ok(info)
    }

    /// Create a repository from a template repository
    pub async fn generate(
        &self,
        template: &RepoRef,
        request: &TemplateRepository,
    ) -> Result<RepoInfo> {
        // GitHub API: POST /repos/{template_owner}/{template_repo}/generate
        let route = format!("{}/generate", template.route());
        debug!(%route, name = %request.name, "generating repository from template");

        let info: RepoInfo = self.client.octocrab().post(&route, Some(request)).await?;
        Ok(info)
    }
}
