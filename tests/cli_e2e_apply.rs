//! End-to-end tests for the `apply` command.
//!
//! Cloning targets local git repositories created inside the fixture, so
//! these tests need a `git` binary but no network access.

mod common;

use assert_fs::prelude::*;
use common::{configs, init_source_repo, TestFixture};
use predicates::prelude::*;

/// Build a config whose single repository clones from a local source repo.
fn local_repo_config(fixture: &TestFixture) -> String {
    let source = fixture.path().join("upstream/api");
    init_source_repo(&source);
    format!(
        r#"{{
  "config": {{ "path": "./ws", "envfiles": "./envs" }},
  "projects": [
    {{
      "name": "demo",
      "path": "app",
      "repositories": [ {{ "path": "api", "repository": "{}" }} ],
      "tasks": [
        {{ "label": "install", "command": "npm install" }},
        {{ "label": "run", "command": "npm start", "group": "backend", "dependsOn": ["install"] }}
      ]
    }}
  ]
}}"#,
        source.display()
    )
}

/// The full pipeline: folders, clone, env restore, descriptor.
#[test]
fn test_apply_materializes_workspace() {
    let fixture = TestFixture::new().with_dir("envs");
    let config = local_repo_config(&fixture);
    let fixture = fixture.with_config(&config);

    // Pre-seed an archived env file for the repository.
    fixture
        .child("envs/demo-api.env")
        .write_str("TOKEN=abc\n")
        .unwrap();

    fixture
        .command()
        .arg("apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("cloned api"));

    // Cloned working copy.
    assert!(fixture.path().join("ws/app/api/README.md").exists());
    // Restored env file.
    let env = std::fs::read_to_string(fixture.path().join("ws/app/api/.env")).unwrap();
    assert_eq!(env, "TOKEN=abc\n");

    // Task descriptor with the synthetic aggregator.
    let descriptor: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(fixture.path().join("ws/app/.vscode/tasks.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(descriptor["tasks"][1]["dependsOn"][0], "install");
    assert_eq!(descriptor["tasks"][1]["presentationGroup"], "backend");
    assert_eq!(
        descriptor["aggregator"]["dependsOn"],
        serde_json::json!(["install", "run"])
    );
    assert_eq!(descriptor["aggregator"]["runOptions"]["runOn"], "folderOpen");
}

/// Re-running apply over an existing workspace must not fail on folder
/// creation; the re-clone refusal comes from git and is reported, not fatal.
#[test]
fn test_apply_twice_exits_zero() {
    let fixture = TestFixture::new();
    let config = local_repo_config(&fixture);
    let fixture = fixture.with_config(&config);

    fixture.command().arg("apply").assert().success();
    fixture.command().arg("apply").assert().success();

    assert!(fixture.path().join("ws/app/api/README.md").exists());
}

/// A project without repositories is skipped without failing the run.
#[test]
fn test_apply_skips_project_without_repositories() {
    let fixture = TestFixture::new().with_config(configs::NO_REPOSITORIES);

    fixture
        .command()
        .arg("apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("no repositories defined"));

    // The workspace root is still created for the skipped project.
    assert!(fixture.path().join("ws").exists());
}

/// A failing clone is isolated: the run exits zero and reports the failure.
#[test]
fn test_apply_clone_failure_is_isolated() {
    let fixture = TestFixture::new().with_config(configs::MINIMAL);

    // https://example.com/api.git is unreachable; the clone fails, the run
    // does not.
    fixture
        .command()
        .arg("apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clone failed"));

    // The descriptor is still produced for the project.
    assert!(fixture.path().join("ws/app/.vscode/tasks.json").exists());
}

/// The --envfiles flag takes precedence over the config file's value.
#[test]
fn test_apply_envfiles_override() {
    let fixture = TestFixture::new().with_dir("other-envs");
    let config = local_repo_config(&fixture);
    let fixture = fixture.with_config(&config);

    fixture
        .child("other-envs/demo-api.env")
        .write_str("FROM=override\n")
        .unwrap();

    fixture
        .command()
        .arg("apply")
        .arg("--envfiles")
        .arg("./other-envs")
        .assert()
        .success();

    let env = std::fs::read_to_string(fixture.path().join("ws/app/api/.env")).unwrap();
    assert_eq!(env, "FROM=override\n");
}

/// A self-referential task dependency rejects the descriptor but not the run.
#[test]
fn test_apply_bad_task_graph_reported_not_fatal() {
    let fixture = TestFixture::new();
    let source = fixture.path().join("upstream/api");
    init_source_repo(&source);
    let config = format!(
        r#"{{
  "projects": [
    {{
      "name": "demo", "path": "app",
      "repositories": [ {{ "path": "api", "repository": "{}" }} ],
      "tasks": [ {{ "label": "run", "command": "x", "dependsOn": ["run"] }} ]
    }}
  ]
}}"#,
        source.display()
    );
    let fixture = fixture.with_config(&config);

    fixture
        .command()
        .arg("apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task graph error"));

    assert!(fixture.path().join("projects/app/api/README.md").exists());
    assert!(!fixture.path().join("projects/app/.vscode/tasks.json").exists());
}
