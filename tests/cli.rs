//! Offline behavior of the `repokit` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the user's config and credentials
fn repokit(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("repokit").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("GITHUB_TOKEN")
        .env_remove("GH_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_workflows() {
    let home = TempDir::new().unwrap();
    repokit(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("create")
                .and(predicate::str::contains("clone-settings"))
                .and(predicate::str::contains("license"))
                .and(predicate::str::contains("scaffold"))
                .and(predicate::str::contains("topics"))
                .and(predicate::str::contains("from-template"))
                .and(predicate::str::contains("mark-template")),
        );
}

#[test]
fn create_requires_a_name() {
    let home = TempDir::new().unwrap();
    repokit(home.path())
        .arg("create")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<NAME>"));
}

#[test]
fn invalid_topic_fails_before_authenticating() {
    let home = TempDir::new().unwrap();
    repokit(home.path())
        .args(["topics", "add", "-r", "acme/widget", "rust", "bad!topic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid topic 'bad!topic'"));
}

#[test]
fn invalid_repository_argument_is_rejected() {
    let home = TempDir::new().unwrap();
    repokit(home.path())
        .args(["info", "acme/widget/extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid repository 'acme/widget/extra'"));
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    repokit(home.path())
        .args(["config", "set", "owner", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default owner set to: acme"));

    repokit(home.path())
        .args(["config", "get", "owner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default owner: acme"));
}

#[test]
fn config_rejects_unknown_visibility() {
    let home = TempDir::new().unwrap();
    repokit(home.path())
        .args(["config", "set", "visibility", "internal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid visibility 'internal'"));
}

#[test]
fn scaffold_local_writes_rust_layout_and_licenses() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    repokit(home.path())
        .args(["scaffold", "acme/widget", "--holder", "Acme Corp", "--local"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scaffolded rust-lib layout for acme/widget"));

    let cargo = fs::read_to_string(out.path().join("Cargo.toml")).unwrap();
    assert!(cargo.contains("name = \"widget\""));
    assert!(out.path().join("src/lib.rs").exists());
    assert!(out.path().join(".gitignore").exists());

    let mit = fs::read_to_string(out.path().join("LICENSE-MIT")).unwrap();
    assert!(mit.contains("Acme Corp"));
    assert!(out.path().join("LICENSE-APACHE").exists());
}

#[test]
fn scaffold_local_refuses_to_overwrite_without_force() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(out.path().join("README.md"), "keep me").unwrap();

    repokit(home.path())
        .args(["scaffold", "acme/widget", "--kind", "generic", "--local"])
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("File already exists"));
    assert_eq!(
        fs::read_to_string(out.path().join("README.md")).unwrap(),
        "keep me"
    );
    assert!(!out.path().join("docs").exists());

    repokit(home.path())
        .args(["scaffold", "acme/widget", "--kind", "generic", "--force", "--local"])
        .arg(out.path())
        .assert()
        .success();
    let readme = fs::read_to_string(out.path().join("README.md")).unwrap();
    assert!(readme.starts_with("# widget"));
    assert!(!out.path().join("LICENSE-MIT").exists());
}

#[test]
fn scaffold_local_bare_name_needs_an_owner() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    repokit(home.path())
        .args(["scaffold", "widget", "--local"])
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config set owner"));

    repokit(home.path())
        .args(["config", "set", "owner", "acme"])
        .assert()
        .success();

    repokit(home.path())
        .args(["scaffold", "widget", "--kind", "rust-bin", "--local"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("acme/widget"));
    assert!(out.path().join("src/main.rs").exists());
}
