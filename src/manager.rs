//! Repository workflows
//!
//! `RepoManager` authenticates once, caches the login, and exposes one method
//! per workflow. Each method issues its remote calls strictly one after the
//! other and returns the response, or the first error, unchanged.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Utc};
use tracing::{info, warn};

use crate::core::{Config, RepoSpec};
use crate::error::{RepokitError, Result};
use crate::github::models::{
    FileCommit, FileUpload, ListRepositories, NewRepository, RepoInfo, RepoRef, RepoSettings,
    TemplateRepository,
};
use crate::github::topics::{merge_topics, normalize_topics};
use crate::github::GitHubApi;
use crate::templates::{scaffold, ProjectKind, ScaffoldFile, TemplateContext, DUAL_LICENSE_FILES};

/// Outcome of writing one file through the contents API
#[derive(Debug, Clone)]
pub struct FileWrite {
    pub path: String,
    /// `false` when an existing file was replaced
    pub created: bool,
    pub commit: FileCommit,
}

/// Outcome of `clone_settings`
#[derive(Debug, Clone)]
pub struct ClonedSettings {
    /// Target repository after the update
    pub repository: RepoInfo,
    /// Settings that were applied
    pub settings: RepoSettings,
    /// Topics written to the target, when copied
    pub topics: Option<Vec<String>>,
}

/// Authenticated entry point for every repository workflow
pub struct RepoManager<A: GitHubApi> {
    api: A,
    config: Config,
    username: String,
}

impl<A: GitHubApi> RepoManager<A> {
    /// Authenticate and cache the login of the token's user
    pub async fn connect(api: A, config: Config) -> Result<Self> {
        let username = api.current_user().await?;
        info!(%username, "authenticated with GitHub");

        Ok(Self {
            api,
            config,
            username,
        })
    }

    /// Login of the authenticated user
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Configuration the manager was created with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Owner used for bare repository names
    pub fn default_owner(&self) -> &str {
        self.config
            .default_owner
            .as_deref()
            .unwrap_or(&self.username)
    }

    /// Apply owner defaults to a parsed repository argument
    pub fn resolve(&self, spec: RepoSpec) -> RepoRef {
        spec.with_owner(self.default_owner())
    }

    /// Create a repository
    ///
    /// Without an explicit organization the configured default owner is used
    /// when it is not the authenticated user. Visibility falls back to the
    /// configured default.
    pub async fn create_repository(&self, mut request: NewRepository) -> Result<RepoInfo> {
        if request.org.is_none() {
            if let Some(owner) = &self.config.default_owner {
                if !owner.eq_ignore_ascii_case(&self.username) {
                    request.org = Some(owner.clone());
                }
            }
        }
        if request.private.is_none() {
            request.private = Some(self.config.visibility.is_private());
        }

        let repo = self.api.create_repo(&request).await?;
        info!(repo = %repo.full_name, "created repository");
        Ok(repo)
    }

    /// Fetch repository details
    pub async fn info(&self, repo: &RepoRef) -> Result<RepoInfo> {
        self.api.get_repo(repo).await
    }

    /// List repositories
    pub async fn list_repositories(&self, query: &ListRepositories) -> Result<Vec<RepoInfo>> {
        self.api.list_repos(query).await
    }

    /// Copy feature flags, merge settings and optionally topics from `source` to `target`
    pub async fn clone_settings(
        &self,
        source: &RepoRef,
        target: &RepoRef,
        copy_topics: bool,
    ) -> Result<ClonedSettings> {
        if source.is_same_repo(target) {
            return Err(RepokitError::InvalidInput(
                "Source and target repositories are the same".to_string(),
            ));
        }

        let source_info = self.api.get_repo(source).await?;
        let settings = RepoSettings::cloned_from(&source_info);
        if source_info.allow_squash_merge.is_none() {
            warn!(%source, "merge settings not visible; admin access to the source is required to copy them");
        }

        let repository = self.api.update_repo(target, &settings).await?;

        let topics = if copy_topics && !source_info.topics.is_empty() {
            Some(self.api.replace_topics(target, &source_info.topics).await?)
        } else {
            None
        };

        info!(%source, %target, "cloned repository settings");
        Ok(ClonedSettings {
            repository,
            settings,
            topics,
        })
    }

    /// Values for template rendering, with holder and year defaults applied
    pub fn template_context(
        &self,
        repo: &RepoRef,
        description: Option<String>,
        holder: Option<String>,
        year: Option<i32>,
    ) -> TemplateContext {
        let holder = holder
            .or_else(|| self.config.license_holder.clone())
            .unwrap_or_else(|| self.username.clone());
        build_context(repo, description, holder, year)
    }

    /// Write `LICENSE-MIT` and `LICENSE-APACHE`
    pub async fn setup_dual_license(
        &self,
        repo: &RepoRef,
        holder: Option<String>,
        year: Option<i32>,
        branch: Option<String>,
    ) -> Result<Vec<FileWrite>> {
        let ctx = self.template_context(repo, None, holder, year);

        let mut writes = Vec::with_capacity(DUAL_LICENSE_FILES.len());
        for file in DUAL_LICENSE_FILES {
            let subject = format!("{} license", file.spdx());
            let write = self
                .write_file(repo, file.path(), file.render(&ctx), &subject, branch.clone())
                .await?;
            writes.push(write);
        }

        info!(%repo, "dual license files written");
        Ok(writes)
    }

    /// Write the starter layout of `kind` into the repository
    pub async fn scaffold(
        &self,
        repo: &RepoRef,
        kind: ProjectKind,
        description: Option<String>,
        branch: Option<String>,
    ) -> Result<Vec<FileWrite>> {
        let ctx = self.template_context(repo, description, None, None);
        let files = scaffold::files(kind, &ctx)?;

        let mut writes = Vec::with_capacity(files.len());
        for file in files {
            let write = self
                .write_file(repo, &file.path, file.contents, &file.path, branch.clone())
                .await?;
            writes.push(write);
        }

        info!(%repo, %kind, "scaffolded project layout");
        Ok(writes)
    }

    /// Create the file, or update it when it already exists
    async fn write_file(
        &self,
        repo: &RepoRef,
        path: &str,
        contents: String,
        subject: &str,
        branch: Option<String>,
    ) -> Result<FileWrite> {
        let sha = self.api.get_file_sha(repo, path, branch.clone()).await?;
        let created = sha.is_none();
        let message = if created {
            format!("Add {}", subject)
        } else {
            format!("Update {}", subject)
        };

        let upload = FileUpload::new(path, message, contents)
            .on_branch(branch)
            .replacing(sha);
        let commit = self.api.put_file(repo, &upload).await?;

        Ok(FileWrite {
            path: path.to_string(),
            created,
            commit,
        })
    }

    /// List the topics of a repository
    pub async fn topics(&self, repo: &RepoRef) -> Result<Vec<String>> {
        self.api.get_topics(repo).await
    }

    /// Add topics, keeping the existing ones
    ///
    /// Skips the write when every topic is already present.
    pub async fn add_topics(&self, repo: &RepoRef, topics: &[String]) -> Result<Vec<String>> {
        let additions = normalize_topics(topics)?;
        let existing = self.api.get_topics(repo).await?;
        let merged = merge_topics(&existing, &additions)?;

        if merged == existing {
            info!(%repo, "topics already present");
            return Ok(existing);
        }

        self.api.replace_topics(repo, &merged).await
    }

    /// Replace all topics
    pub async fn replace_topics(&self, repo: &RepoRef, topics: &[String]) -> Result<Vec<String>> {
        let names = normalize_topics(topics)?;
        self.api.replace_topics(repo, &names).await
    }

    /// Create a repository from a template repository
    pub async fn create_from_template(
        &self,
        template: &RepoRef,
        mut request: TemplateRepository,
    ) -> Result<RepoInfo> {
        if request.owner.is_none() {
            request.owner = Some(self.default_owner().to_string());
        }
        if request.private.is_none() {
            request.private = Some(self.config.visibility.is_private());
        }

        let repo = self.api.generate_from_template(template, &request).await?;
        info!(%template, repo = %repo.full_name, "generated repository from template");
        Ok(repo)
    }

    /// Set or clear the template flag
    pub async fn mark_template(&self, repo: &RepoRef, is_template: bool) -> Result<RepoInfo> {
        let settings = RepoSettings {
            is_template: Some(is_template),
            ..RepoSettings::default()
        };
        self.api.update_repo(repo, &settings).await
    }
}

/// Template values with the copyright year defaulting to the current year
pub fn build_context(
    repo: &RepoRef,
    description: Option<String>,
    holder: String,
    year: Option<i32>,
) -> TemplateContext {
    TemplateContext {
        name: repo.name.clone(),
        owner: repo.owner.clone(),
        description,
        holder,
        year: year.unwrap_or_else(|| Utc::now().year()),
    }
}

/// Render files into `dir` instead of a remote repository
///
/// Nothing is written when any target exists and `force` is false.
pub fn scaffold_local(dir: &Path, files: &[ScaffoldFile], force: bool) -> Result<Vec<PathBuf>> {
    let targets: Vec<PathBuf> = files
        .iter()
        .map(|file| dir.join(file.path.split('/').collect::<PathBuf>()))
        .collect();

    if !force {
        if let Some(existing) = targets.iter().find(|path| path.exists()) {
            return Err(RepokitError::FileExists(existing.clone()));
        }
    }

    for (file, target) in files.iter().zip(&targets) {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, &file.contents)?;
    }

    Ok(targets)
}
