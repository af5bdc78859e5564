//! Repository CLI command handlers

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cli::commands::{CreateArgs, ScaffoldArgs, VisibilityFilter};
use crate::cli::connect;
use crate::core::{Config, RepoSpec};
use crate::error::{RepokitError, Result};
use crate::github::{
    ListRepositories, NewRepository, RepoInfo, RepoOwnerFilter, TemplateRepository, Visibility,
};
use crate::manager::{build_context, scaffold_local, FileWrite};
use crate::templates::{scaffold, ProjectKind, ScaffoldFile, DUAL_LICENSE_FILES};

/// Handle `create`
pub async fn handle_create(args: CreateArgs) -> Result<()> {
    let request = NewRepository {
        org: args.org.clone(),
        name: args.name.clone(),
        description: args.description.clone(),
        homepage: args.homepage.clone(),
        private: args.private_flag(),
        auto_init: args.auto_init,
        gitignore_template: args.gitignore.clone(),
        license_template: args.license.clone(),
        is_template: args.template,
        has_issues: args.no_issues.then_some(false),
        has_projects: args.no_projects.then_some(false),
        has_wiki: args.no_wiki.then_some(false),
    };

    let manager = connect().await?;
    let repo = manager.create_repository(request).await?;

    if args.json {
        return print_json(&repo);
    }

    println!("✓ Created {} repository {}", repo.visibility(), repo.full_name);
    println!("  {}", repo.html_url);
    Ok(())
}

/// Handle `info`
pub async fn handle_info(repo: Option<String>, json: bool) -> Result<()> {
    let spec = RepoSpec::parse_or_detect(repo.as_deref())?;
    let manager = connect().await?;
    let repo = manager.resolve(spec);

    let info = manager.info(&repo).await?;
    if json {
        return print_json(&info);
    }

    print_details(&info);
    Ok(())
}

/// Handle `list`
pub async fn handle_list(
    user: Option<String>,
    visibility: VisibilityFilter,
    limit: u8,
    json: bool,
) -> Result<()> {
    if user.is_some() && visibility != VisibilityFilter::All {
        return Err(RepokitError::InvalidInput(
            "--visibility only applies to your own repositories".to_string(),
        ));
    }

    let query = ListRepositories {
        owner: match user {
            Some(user) => RepoOwnerFilter::User(user),
            None => RepoOwnerFilter::Authenticated,
        },
        visibility: visibility.to_visibility(),
        limit: limit.clamp(1, 100),
    };

    let manager = connect().await?;
    let repos = manager.list_repositories(&query).await?;

    if json {
        return print_json(&repos);
    }

    if repos.is_empty() {
        println!("No repositories found.");
        return Ok(());
    }

    for repo in &repos {
        let marker = if repo.private { "🔒" } else { "○" };
        let mut flags = Vec::new();
        if repo.fork {
            flags.push("fork");
        }
        if repo.archived {
            flags.push("archived");
        }
        if repo.is_template {
            flags.push("template");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };

        println!("{} {}{}", marker, repo.full_name, flags);
        if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
            println!("   {}", description);
        }
        if let Some(updated) = repo.updated_at {
            println!("   updated {}", format_relative_time(updated));
        }
    }

    Ok(())
}

/// Handle `clone-settings`
pub async fn handle_clone_settings(source: String, target: String, no_topics: bool) -> Result<()> {
    let source = RepoSpec::parse(&source)?;
    let target = RepoSpec::parse(&target)?;

    let manager = connect().await?;
    let source = manager.resolve(source);
    let target = manager.resolve(target);

    let cloned = manager.clone_settings(&source, &target, !no_topics).await?;

    println!("✓ Copied settings from {} to {}", source, target);
    if cloned.settings.allow_squash_merge.is_none() {
        println!("  Merge settings were not visible on {} and were left unchanged.", source);
    }
    if let Some(topics) = cloned.topics {
        println!("  Topics: {}", topics.join(", "));
    }
    Ok(())
}

/// Handle `license`
pub async fn handle_license(
    repo: Option<String>,
    holder: Option<String>,
    year: Option<i32>,
    branch: Option<String>,
) -> Result<()> {
    let spec = RepoSpec::parse_or_detect(repo.as_deref())?;
    let manager = connect().await?;
    let repo = manager.resolve(spec);

    let writes = manager.setup_dual_license(&repo, holder, year, branch).await?;

    println!("✓ Dual MIT/Apache-2.0 license set up for {}", repo);
    print_writes(&writes);
    Ok(())
}

/// Handle `scaffold`
pub async fn handle_scaffold(args: ScaffoldArgs) -> Result<()> {
    if let Some(dir) = args.local.as_deref() {
        return scaffold_into_dir(dir, &args);
    }

    let spec = RepoSpec::parse_or_detect(args.repo.as_deref())?;
    let manager = connect().await?;
    let repo = manager.resolve(spec);
    let kind = args.kind.unwrap_or(manager.config().project_kind);

    let writes = manager
        .scaffold(&repo, kind, args.description.clone(), args.branch.clone())
        .await?;

    println!("✓ Scaffolded {} layout in {}", kind, repo);
    print_writes(&writes);
    if kind != ProjectKind::Generic {
        println!();
        println!("Run 'repokit license {}' to add the license files the README refers to.", repo);
    }
    Ok(())
}

/// Render the layout, plus license files for Rust kinds, into a local directory
fn scaffold_into_dir(dir: &Path, args: &ScaffoldArgs) -> Result<()> {
    let config = Config::load()?;

    let repo = match RepoSpec::parse_or_detect(args.repo.as_deref())? {
        RepoSpec::Full(repo) => repo,
        RepoSpec::NameOnly(name) => {
            let owner = config.default_owner.clone().ok_or_else(|| {
                RepokitError::InvalidInput(format!(
                    "Cannot tell who owns '{}'.\n  → Pass OWNER/{} or run 'repokit config set owner <OWNER>'",
                    name, name
                ))
            })?;
            RepoSpec::NameOnly(name).with_owner(&owner)
        }
    };

    let kind = args.kind.unwrap_or(config.project_kind);
    let holder = args
        .holder
        .clone()
        .or_else(|| config.license_holder.clone())
        .unwrap_or_else(|| repo.owner.clone());
    let ctx = build_context(&repo, args.description.clone(), holder, None);

    let mut files = scaffold::files(kind, &ctx)?;
    if kind != ProjectKind::Generic {
        files.extend(DUAL_LICENSE_FILES.iter().map(|license| ScaffoldFile {
            path: license.path().to_string(),
            contents: license.render(&ctx),
        }));
    }

    let written = scaffold_local(dir, &files, args.force)?;

    println!("✓ Scaffolded {} layout for {} in {}", kind, repo, dir.display());
    for path in written {
        println!("  {}", path.display());
    }
    Ok(())
}

/// Handle `from-template`
pub async fn handle_from_template(
    template: String,
    name: String,
    owner: Option<String>,
    description: Option<String>,
    visibility: Option<Visibility>,
    include_all_branches: bool,
    json: bool,
) -> Result<()> {
    let template = RepoSpec::parse(&template)?;
    let manager = connect().await?;
    let template = manager.resolve(template);

    let request = TemplateRepository {
        owner,
        name,
        description,
        private: visibility.map(|v| v.is_private()),
        include_all_branches,
    };
    let repo = manager.create_from_template(&template, request).await?;

    if json {
        return print_json(&repo);
    }

    println!("✓ Created {} from template {}", repo.full_name, template);
    println!("  {}", repo.html_url);
    Ok(())
}

/// Handle `mark-template`
pub async fn handle_mark_template(repo: Option<String>, unset: bool) -> Result<()> {
    let spec = RepoSpec::parse_or_detect(repo.as_deref())?;
    let manager = connect().await?;
    let repo = manager.resolve(spec);

    let info = manager.mark_template(&repo, !unset).await?;

    if info.is_template {
        println!("✓ {} is now a template repository", repo);
    } else {
        println!("✓ {} is no longer a template repository", repo);
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_writes(writes: &[FileWrite]) {
    for write in writes {
        let action = if write.created { "created" } else { "updated" };
        let sha = &write.commit.commit.sha;
        println!("  {} {} ({})", action, write.path, &sha[..sha.len().min(7)]);
    }
}

fn print_details(info: &RepoInfo) {
    println!("{}", info.full_name);
    if let Some(description) = info.description.as_deref().filter(|d| !d.is_empty()) {
        println!("  {}", description);
    }
    println!();
    println!("  URL:            {}", info.html_url);
    if let Some(homepage) = info.homepage.as_deref().filter(|h| !h.is_empty()) {
        println!("  Homepage:       {}", homepage);
    }
    println!("  Visibility:     {}", info.visibility());
    if let Some(branch) = &info.default_branch {
        println!("  Default branch: {}", branch);
    }
    if let Some(language) = &info.language {
        println!("  Language:       {}", language);
    }
    println!(
        "  Stars: {}  Forks: {}  Open issues: {}",
        info.stargazers_count, info.forks_count, info.open_issues_count
    );
    if info.is_template {
        println!("  Template:       yes");
    }
    if info.archived {
        println!("  Archived:       yes");
    }
    if !info.topics.is_empty() {
        println!("  Topics:         {}", info.topics.join(", "));
    }
    if let Some(pushed) = info.pushed_at {
        println!("  Last push:      {}", format_relative_time(pushed));
    }
}

fn format_relative_time(dt: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(dt);

    if duration.num_days() > 30 {
        dt.format("%Y-%m-%d").to_string()
    } else if duration.num_days() > 0 {
        format!("{} days ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{} hours ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{} minutes ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}
