//! End-to-end tests for the `validate` command.

mod common;

use common::{configs, TestFixture};
use predicates::prelude::*;

/// A valid config reports its contents.
#[test]
fn test_validate_reports_counts() {
    let fixture = TestFixture::new().with_config(configs::MINIMAL);

    fixture
        .command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("1 project(s)"))
        .stdout(predicate::str::contains("1 repository(ies)"))
        .stdout(predicate::str::contains("1 task(s)"));
}

/// A project without repositories gets a warning, not an error.
#[test]
fn test_validate_warns_on_missing_repositories() {
    let fixture = TestFixture::new().with_config(configs::NO_REPOSITORIES);

    fixture
        .command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("has no repositories"));
}

/// Duplicate task labels are a configuration error.
#[test]
fn test_validate_rejects_duplicate_labels() {
    let fixture = TestFixture::new().with_config(
        r#"{
  "projects": [
    {
      "name": "demo", "path": "app",
      "repositories": [ { "path": "api", "repository": "https://example.com/api.git" } ],
      "tasks": [
        { "label": "run", "command": "a" },
        { "label": "run", "command": "b" }
      ]
    }
  ]
}"#,
    );

    fixture
        .command()
        .arg("validate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("duplicate task label"));
}

/// The config path can come from the DEVNEST_CONFIG environment variable.
#[test]
fn test_validate_config_from_env_var() {
    let fixture = TestFixture::new().with_file("custom.json", configs::MINIMAL);

    fixture
        .command()
        .arg("validate")
        .env("DEVNEST_CONFIG", fixture.path().join("custom.json"))
        .assert()
        .success();
}
