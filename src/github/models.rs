//! Request and response bodies for the repository endpoints
//!
//! Responses deserialize only the fields the tool displays; unknown fields
//! are ignored so the structs keep working as GitHub adds keys.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::RepokitError;

/// A repository on GitHub, addressed by owner and name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// GitHub owner and repository names are case-insensitive
    pub fn is_same_repo(&self, other: &RepoRef) -> bool {
        self.owner.eq_ignore_ascii_case(&other.owner) && self.name.eq_ignore_ascii_case(&other.name)
    }

    /// `/repos/{owner}/{name}` API route
    pub fn route(&self) -> String {
        format!("/repos/{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Repository owner as embedded in API responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// Repository details returned by the get, list, create and update endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepoInfo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub owner: Owner,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub is_template: bool,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub has_issues: Option<bool>,
    #[serde(default)]
    pub has_projects: Option<bool>,
    #[serde(default)]
    pub has_wiki: Option<bool>,
    #[serde(default)]
    pub has_discussions: Option<bool>,
    /// Merge settings are only present for callers with admin access
    #[serde(default)]
    pub allow_squash_merge: Option<bool>,
    #[serde(default)]
    pub allow_merge_commit: Option<bool>,
    #[serde(default)]
    pub allow_rebase_merge: Option<bool>,
    #[serde(default)]
    pub allow_auto_merge: Option<bool>,
    #[serde(default)]
    pub delete_branch_on_merge: Option<bool>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}

impl RepoInfo {
    pub fn visibility(&self) -> Visibility {
        if self.private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

/// Repository visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    pub fn is_private(&self) -> bool {
        matches!(self, Visibility::Private)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = RepokitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            other => Err(RepokitError::InvalidInput(format!(
                "Invalid visibility '{}'. Use 'public' or 'private'.",
                other
            ))),
        }
    }
}

/// Body of `POST /user/repos` and `POST /orgs/{org}/repos`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewRepository {
    /// Target organization; `None` creates under the authenticated user
    #[serde(skip)]
    pub org: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// `None` falls back to the configured default visibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub auto_init: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitignore_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_template: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_template: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
}

/// Body of `PATCH /repos/{owner}/{repo}`; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RepoSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_template: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_discussions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_squash_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_merge_commit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_rebase_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_auto_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_branch_on_merge: Option<bool>,
}

impl RepoSettings {
    /// Feature flags and merge settings of `source`
    ///
    /// Identity fields (name, description, homepage, visibility) are not
    /// copied.
    pub fn cloned_from(source: &RepoInfo) -> Self {
        Self {
            has_issues: source.has_issues,
            has_projects: source.has_projects,
            has_wiki: source.has_wiki,
            has_discussions: source.has_discussions,
            allow_squash_merge: source.allow_squash_merge,
            allow_merge_commit: source.allow_merge_commit,
            allow_rebase_merge: source.allow_rebase_merge,
            allow_auto_merge: source.allow_auto_merge,
            delete_branch_on_merge: source.delete_branch_on_merge,
            ..Self::default()
        }
    }
}

/// Body of `POST /repos/{template_owner}/{template_repo}/generate`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateRepository {
    /// `None` falls back to the configured owner, then the authenticated user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    pub include_all_branches: bool,
}

/// Whose repositories to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoOwnerFilter {
    /// `GET /user/repos`
    Authenticated,
    /// `GET /users/{user}/repos`
    User(String),
}

/// Query of the list endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRepositories {
    pub owner: RepoOwnerFilter,
    /// `None` lists both; only honoured for the authenticated user
    pub visibility: Option<Visibility>,
    pub limit: u8,
}

impl Default for ListRepositories {
    fn default() -> Self {
        Self {
            owner: RepoOwnerFilter::Authenticated,
            visibility: None,
            limit: 30,
        }
    }
}

/// A file to write through the contents API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileUpload {
    #[serde(skip)]
    pub path: String,
    pub message: String,
    #[serde(serialize_with = "serialize_base64")]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Blob sha of the file being replaced; required by GitHub for updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

impl FileUpload {
    pub fn new(path: impl Into<String>, message: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            content: content.into(),
            branch: None,
            sha: None,
        }
    }

    pub fn on_branch(mut self, branch: Option<String>) -> Self {
        self.branch = branch;
        self
    }

    pub fn replacing(mut self, sha: Option<String>) -> Self {
        self.sha = sha;
        self
    }
}

fn serialize_base64<S: Serializer>(content: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&encode_content(content))
}

/// Standard padded base64, as the contents API expects
pub fn encode_content(content: &str) -> String {
    STANDARD.encode(content.as_bytes())
}

/// Response of `PUT /repos/{owner}/{repo}/contents/{path}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileCommit {
    pub content: Option<FileContent>,
    pub commit: CommitRef,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileContent {
    pub path: String,
    pub sha: String,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitRef {
    pub sha: String,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// `GET /repos/{owner}/{repo}/contents/{path}` for a single file
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub sha: String,
}

/// Body and response of the topics endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topics {
    pub names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_info_deserializes_api_payload() {
        let json = r#"{
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "owner": { "login": "octocat", "id": 1 },
            "private": false,
            "html_url": "https://github.com/octocat/Hello-World",
            "description": "This your first repo!",
            "fork": false,
            "homepage": null,
            "default_branch": "main",
            "topics": ["octocat", "api"],
            "has_issues": true,
            "has_wiki": false,
            "is_template": true,
            "stargazers_count": 80,
            "created_at": "2011-01-26T19:01:12Z",
            "unknown_field": { "nested": true }
        }"#;

        let info: RepoInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.full_name, "octocat/Hello-World");
        assert_eq!(info.owner.login, "octocat");
        assert_eq!(info.visibility(), Visibility::Public);
        assert!(info.is_template);
        assert_eq!(info.topics, vec!["octocat", "api"]);
        assert_eq!(info.has_wiki, Some(false));
        assert_eq!(info.allow_squash_merge, None);
        assert!(info.created_at.is_some());
    }

    #[test]
    fn test_same_repo_ignores_case() {
        let repo = RepoRef::new("Acme", "Widget");
        assert!(repo.is_same_repo(&RepoRef::new("acme", "widget")));
        assert!(!repo.is_same_repo(&RepoRef::new("acme", "widgets")));
        assert!(!repo.is_same_repo(&RepoRef::new("other", "Widget")));
    }

    #[test]
    fn test_new_repository_omits_unset_fields() {
        let repo = NewRepository {
            org: Some("acme".to_string()),
            name: "widget".to_string(),
            private: Some(true),
            ..Default::default()
        };
        let value = serde_json::to_value(&repo).unwrap();
        assert_eq!(value, serde_json::json!({ "name": "widget", "private": true }));
    }

    #[test]
    fn test_cloned_settings_skip_identity_fields() {
        let source = RepoInfo {
            name: "src".to_string(),
            description: Some("do not copy".to_string()),
            private: true,
            has_issues: Some(true),
            has_wiki: Some(false),
            allow_squash_merge: Some(true),
            allow_merge_commit: Some(false),
            delete_branch_on_merge: Some(true),
            ..Default::default()
        };
        let settings = RepoSettings::cloned_from(&source);
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "has_issues": true,
                "has_wiki": false,
                "allow_squash_merge": true,
                "allow_merge_commit": false,
                "delete_branch_on_merge": true
            })
        );
        assert_eq!(
            RepoSettings::cloned_from(&RepoInfo::default()),
            RepoSettings::default()
        );
    }

    #[test]
    fn test_file_upload_body_is_base64() {
        let upload = FileUpload::new("README.md", "Add readme", "hello\n")
            .on_branch(Some("main".to_string()))
            .replacing(None);
        let value = serde_json::to_value(&upload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message": "Add readme",
                "content": "aGVsbG8K",
                "branch": "main"
            })
        );
    }

    #[test]
    fn test_encode_content_utf8() {
        assert_eq!(encode_content(""), "");
        assert_eq!(encode_content("©"), "wqk=");
    }

    #[test]
    fn test_visibility_parse() {
        assert_eq!("Public".parse::<Visibility>().unwrap(), Visibility::Public);
        assert_eq!(" private ".parse::<Visibility>().unwrap(), Visibility::Private);
        assert!("internal".parse::<Visibility>().is_err());
    }
}
