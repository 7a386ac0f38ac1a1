//! # Configuration Schema and Parsing
//!
//! This module defines the data structures that represent the `config.json`
//! workspace configuration file, as well as the logic for loading and
//! validating it.
//!
//! ## Key Components
//!
//! - **`Config`**: the whole configuration: global settings plus an ordered
//!   list of projects. Parsed once per invocation and immutable afterwards
//!   (the CLI resolves flag overrides before handing it to the core).
//!
//! - **`Project`**: a named group of repositories and tasks materialized under
//!   its own folder inside the workspace root.
//!
//! - **`Repository`** / **`Task`**: the per-project leaves. Repository paths
//!   and task labels must be unique within their owning project.
//!
//! ## File Shape
//!
//! ```json
//! {
//!   "config": { "path": "./ws", "envfiles": "./envs" },
//!   "projects": [
//!     {
//!       "name": "demo",
//!       "path": "app",
//!       "repositories": [ { "path": "api", "repository": "https://example/api.git" } ],
//!       "tasks": [ { "label": "run", "command": "npm start", "dependsOn": [] } ]
//!     }
//!   ]
//! }
//! ```
//!
//! An absent, empty, or malformed file is a fatal [`Error::Config`]; the run
//! aborts before any project is touched. Structural duplicates (project
//! names, repository paths, task labels) are also fatal. Dangling `dependsOn`
//! references are deliberately *not* checked here; they surface per project
//! at synthesis time so one bad task graph cannot block sibling projects.

use crate::defaults;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Global settings, the `"config"` key of the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Workspace root folder. Defaults to `./projects` when absent.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Env archive folder. Defaults to `./envfiles` when absent.
    #[serde(default)]
    pub envfiles: Option<PathBuf>,
}

/// One repository to clone into a project folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Destination folder, relative to the project folder. Unique within the
    /// owning project.
    pub path: String,
    /// Clone URL handed to the external git client.
    #[serde(rename = "repository")]
    pub url: String,
}

/// One labeled task of a project's task graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task label. Unique within the owning project.
    pub label: String,
    /// Shell command the task runs.
    pub command: String,
    /// Optional presentation grouping.
    #[serde(default)]
    pub group: Option<String>,
    /// Labels of tasks that must run before this one. Must reference labels
    /// defined in the same project.
    #[serde(default, rename = "dependsOn")]
    pub depends_on: Vec<String>,
}

/// A named project: a folder of repositories plus a task graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project name, unique within the config. Part of the env archive key.
    pub name: String,
    /// Project folder, relative to the workspace root.
    pub path: String,
    /// Repositories to clone. A project with no repositories is skipped at
    /// materialization time (per-project error, not fatal).
    #[serde(default)]
    pub repositories: Option<Vec<Repository>>,
    /// Tasks fed to the task graph synthesizer.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// The parsed configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, rename = "config")]
    pub settings: Settings,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Config {
    /// Workspace root folder, falling back to the default when unset.
    pub fn workspace_root(&self) -> PathBuf {
        self.settings
            .path
            .clone()
            .unwrap_or_else(defaults::default_workspace_root)
    }

    /// Env archive folder, falling back to the default when unset.
    pub fn env_archive(&self) -> PathBuf {
        self.settings
            .envfiles
            .clone()
            .unwrap_or_else(defaults::default_env_archive)
    }

    /// Validate structural invariants: unique project names, unique
    /// repository paths per project, unique task labels per project, and
    /// minimally sane clone URLs.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for project in &self.projects {
            if !names.insert(project.name.as_str()) {
                return Err(Error::Config {
                    message: format!("duplicate project name '{}'", project.name),
                    hint: Some("project names must be unique within the config".to_string()),
                });
            }

            let mut repo_paths = HashSet::new();
            for repo in project.repositories.as_deref().unwrap_or_default() {
                if !repo_paths.insert(repo.path.as_str()) {
                    return Err(Error::Config {
                        message: format!(
                            "duplicate repository path '{}' in project '{}'",
                            repo.path, project.name
                        ),
                        hint: None,
                    });
                }
                validate_clone_url(&repo.url, &project.name)?;
            }

            let mut labels = HashSet::new();
            for task in &project.tasks {
                if !labels.insert(task.label.as_str()) {
                    return Err(Error::Config {
                        message: format!(
                            "duplicate task label '{}' in project '{}'",
                            task.label, project.name
                        ),
                        hint: None,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Check that a clone URL is plausible. Scheme-style URLs must parse; scp-like
/// (`git@host:path`) and plain local paths are passed through untouched, since
/// the external git client accepts them.
fn validate_clone_url(clone_url: &str, project: &str) -> Result<()> {
    if clone_url.trim().is_empty() {
        return Err(Error::Config {
            message: format!("empty repository URL in project '{}'", project),
            hint: None,
        });
    }
    if clone_url.contains("://") {
        url::Url::parse(clone_url).map_err(|e| Error::Config {
            message: format!(
                "invalid repository URL '{}' in project '{}': {}",
                clone_url, project, e
            ),
            hint: None,
        })?;
    }
    Ok(())
}

/// Parse a configuration from a JSON string.
///
/// An empty or content-free document (`{}`) is rejected so a truncated
/// config file cannot silently materialize nothing.
pub fn parse(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Err(empty_config_error());
    }

    let value: serde_json::Value = serde_json::from_str(content).map_err(|e| Error::Config {
        message: format!("not valid JSON: {}", e),
        hint: Some("check that the file is not truncated and is well formatted".to_string()),
    })?;

    match value.as_object() {
        Some(map) if !map.is_empty() => {}
        _ => return Err(empty_config_error()),
    }

    let config: Config = serde_json::from_value(value).map_err(|e| Error::Config {
        message: format!("unexpected structure: {}", e),
        hint: None,
    })?;

    config.validate()?;
    Ok(config)
}

/// Load and parse a configuration file from disk.
pub fn from_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(Error::Config {
            message: format!("configuration file {} not found", path.display()),
            hint: Some("pass --config or create config.json in the current directory".to_string()),
        });
    }
    let content = fs::read_to_string(path)?;
    parse(&content)
}

fn empty_config_error() -> Error {
    Error::Config {
        message: "the configuration file is empty".to_string(),
        hint: Some("provide a config with at least one project entry".to_string()),
    }
}
