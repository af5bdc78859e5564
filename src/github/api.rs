//! The set of remote endpoints the workflows call
//!
//! `RepoManager` talks to GitHub only through this trait so each workflow can
//! be checked against the exact calls it issues.

use async_trait::async_trait;

use crate::error::Result;
use crate::github::client::GitHubClient;
use crate::github::contents::ContentsHandler;
use crate::github::models::{
    FileCommit, FileUpload, ListRepositories, NewRepository, RepoInfo, RepoRef, RepoSettings,
    TemplateRepository,
};
use crate::github::repository::RepositoryHandler;
use crate::github::topics::TopicsHandler;

/// One method per GitHub REST endpoint used by repokit
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// `GET /user`, returning the login
    async fn current_user(&self) -> Result<String>;

    /// `POST /user/repos` or `POST /orgs/{org}/repos`
    async fn create_repo(&self, request: &NewRepository) -> Result<RepoInfo>;

    /// `GET /repos/{owner}/{repo}`
    async fn get_repo(&self, repo: &RepoRef) -> Result<RepoInfo>;

    /// `GET /user/repos` or `GET /users/{user}/repos`
    async fn list_repos(&self, query: &ListRepositories) -> Result<Vec<RepoInfo>>;

    /// `PATCH /repos/{owner}/{repo}`
    async fn update_repo(&self, repo: &RepoRef, settings: &RepoSettings) -> Result<RepoInfo>;

    /// `GET /repos/{owner}/{repo}/contents/{path}`; `None` when absent
    async fn get_file_sha(
        &self,
        repo: &RepoRef,
        path: &str,
        branch: Option<String>,
    ) -> Result<Option<String>>;

    /// `PUT /repos/{owner}/{repo}/contents/{path}`
    async fn put_file(&self, repo: &RepoRef, upload: &FileUpload) -> Result<FileCommit>;

    /// `GET /repos/{owner}/{repo}/topics`
    async fn get_topics(&self, repo: &RepoRef) -> Result<Vec<String>>;

    /// `PUT /repos/{owner}/{repo}/topics`
    async fn replace_topics(&self, repo: &RepoRef, names: &[String]) -> Result<Vec<String>>;

    /// `POST /repos/{template_owner}/{template_repo}/generate`
    async fn generate_from_template(
        &self,
        template: &RepoRef,
        request: &TemplateRepository,
    ) -> Result<RepoInfo>;
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn current_user(&self) -> Result<String> {
        let user = self.octocrab().current().user().await?;
        Ok(user.login)
    }

    async fn create_repo(&self, request: &NewRepository) -> Result<RepoInfo> {
        RepositoryHandler::new(self).create(request).await
    }

    async fn get_repo(&self, repo: &RepoRef) -> Result<RepoInfo> {
        RepositoryHandler::new(self).get(repo).await
    }

    async fn list_repos(&self, query: &ListRepositories) -> Result<Vec<RepoInfo>> {
        RepositoryHandler::new(self).list(query).await
    }

    async fn update_repo(&self, repo: &RepoRef, settings: &RepoSettings) -> Result<RepoInfo> {
        RepositoryHandler::new(self).update(repo, settings).await
    }

    async fn get_file_sha(
        &self,
        repo: &RepoRef,
        path: &str,
        branch: Option<String>,
    ) -> Result<Option<String>> {
        ContentsHandler::new(self)
            .file_sha(repo, path, branch.as_deref())
            .await
    }

    async fn put_file(&self, repo: &RepoRef, upload: &FileUpload) -> Result<FileCommit> {
        ContentsHandler::new(self).put(repo, upload).await
    }

    async fn get_topics(&self, repo: &RepoRef) -> Result<Vec<String>> {
        TopicsHandler::new(self).list(repo).await
    }

    async fn replace_topics(&self, repo: &RepoRef, names: &[String]) -> Result<Vec<String>> {
        TopicsHandler::new(self).replace(repo, names).await
    }

    async fn generate_from_template(
        &self,
        template: &RepoRef,
        request: &TemplateRepository,
    ) -> Result<RepoInfo> {
        RepositoryHandler::new(self).generate(template, request).await
    }
}
