//! # Env File Backup Orchestration
//!
//! The reverse flow of materialization: walks the same project/repository
//! iteration, but reads from an already-existing workspace and copies each
//! repository's `.env` out into the config-addressed archive folder. Nothing
//! is created in the workspace itself.
//!
//! The archive folder is ensured exactly once, before any project is
//! visited, not per repository.

use std::fs;
use std::path::Path;

use log::warn;

use crate::config::{Config, Project};
use crate::envfiles::{self, Transfer};
use crate::error::{Error, Result};

/// Per-repository record of one backup attempt.
#[derive(Debug)]
pub struct BackupOutcome {
    /// Repository folder, relative to the project folder.
    pub path: String,
    pub transfer: Result<Transfer>,
}

/// Aggregate backup record for one project.
#[derive(Debug)]
pub struct ProjectBackup {
    pub name: String,
    /// `Err` when the project defines no repositories.
    pub repositories: Result<Vec<BackupOutcome>>,
}

/// Back up every repository's env file across all projects.
///
/// Returns `Err` only when the archive folder itself cannot be created,
/// since without it no backup can be written. Per-repository copy failures
/// are recorded and do not stop the run.
pub fn backup_all(config: &Config, base_dir: &Path) -> Result<Vec<ProjectBackup>> {
    let workspace_root = base_dir.join(config.workspace_root());
    let archive_dir = base_dir.join(config.env_archive());
    fs::create_dir_all(&archive_dir)?;

    Ok(config
        .projects
        .iter()
        .map(|project| ProjectBackup {
            name: project.name.clone(),
            repositories: backup_project(project, &workspace_root, &archive_dir),
        })
        .collect())
}

fn backup_project(
    project: &Project,
    workspace_root: &Path,
    archive_dir: &Path,
) -> Result<Vec<BackupOutcome>> {
    let repositories = match project.repositories.as_deref() {
        Some(repos) if !repos.is_empty() => repos,
        _ => {
            let e = Error::Project {
                project: project.name.clone(),
                message: "no repositories defined".to_string(),
            };
            warn!("{}", e);
            return Err(e);
        }
    };

    let project_dir = workspace_root.join(&project.path);
    Ok(repositories
        .iter()
        .map(|repo| {
            let repo_dir = project_dir.join(&repo.path);
            let transfer = envfiles::backup(project, repo, &repo_dir, archive_dir);
            if let Err(e) = &transfer {
                warn!("{}", e);
            }
            BackupOutcome {
                path: repo.path.clone(),
                transfer,
            }
        })
        .collect())
}
