//! Shared test utilities for E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::TestFixture;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_config(common::configs::MINIMAL);
//!     fixture.command().arg("validate").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;
use std::process::Command;

/// Common configuration JSON snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Minimal valid configuration with one project and one repository.
    pub const MINIMAL: &str = r#"{
  "config": { "path": "./ws", "envfiles": "./envs" },
  "projects": [
    {
      "name": "demo",
      "path": "app",
      "repositories": [ { "path": "api", "repository": "https://example.com/api.git" } ],
      "tasks": [ { "label": "run", "command": "npm start" } ]
    }
  ]
}"#;

    /// A project with no repositories (skipped by apply, not fatal).
    pub const NO_REPOSITORIES: &str = r#"{
  "config": { "path": "./ws" },
  "projects": [ { "name": "empty", "path": "e" } ]
}"#;

    /// Invalid JSON for error testing.
    pub const INVALID_JSON: &str = "{ not json";

    /// Content-free configuration (fatal).
    pub const EMPTY_OBJECT: &str = "{}";
}

/// A test fixture that provides a temporary directory with optional config.
///
/// Simplifies the common pattern of creating a temp directory and populating
/// it with a `config.json` file and workspace/archive folders.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `config.json` file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("config.json")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add an empty directory at the given path.
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("config.json")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    ///
    /// Git credential prompts are disabled so a failing clone fails fast
    /// instead of waiting for input.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("devnest").expect("binary exists");
        cmd.current_dir(self.path());
        cmd.env("GIT_TERMINAL_PROMPT", "0");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize a local git repository with one commit at `path`.
///
/// Clone URLs pointing at a local path need no network, which keeps the
/// apply E2E tests hermetic.
#[allow(dead_code)]
pub fn init_source_repo(path: &Path) {
    std::fs::create_dir_all(path).expect("create source repo dir");
    let git = |args: &[&str]| {
        let status = Command::new("git")
            .args(args)
            .current_dir(path)
            .status()
            .expect("git must be installed for this test");
        assert!(status.success(), "git {:?} failed", args);
    };
    git(&["init", "--quiet"]);
    git(&["config", "user.email", "test@test.invalid"]);
    git(&["config", "user.name", "Test"]);
    std::fs::write(path.join("README.md"), "# source\n").expect("write README");
    git(&["add", "."]);
    git(&["commit", "--quiet", "-m", "init"]);
}
