//! # Workspace Materialization
//!
//! The top-level orchestrator. For each configured project, in declaration
//! order:
//!
//! 1. Ensure the workspace root exists (idempotent).
//! 2. Skip the project (recording a per-project error) when it defines no
//!    repositories; the workspace root is still created.
//! 3. Ensure the project folder exists.
//! 4. For every repository: ensure its destination folder, then acquire it.
//! 5. Only after the whole clone phase: restore every repository's env file.
//!    The ordering is deliberate: a later repository's clone failure must
//!    not prevent an earlier repository's env file from being restored.
//! 6. Synthesize the task descriptor and persist it under the project's
//!    descriptor folder.
//!
//! One broken repository must not block the healthy ones, and one broken
//! project must not block the rest of the run: every fallible step lands in
//! the returned outcome records instead of aborting.
//!
//! All paths resolve against the explicit `base_dir` parameter; the
//! orchestrator never reads the process working directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::{Config, Project};
use crate::defaults;
use crate::envfiles::{self, Transfer};
use crate::error::{Error, Result};
use crate::git::RepositoryAcquirer;
use crate::tasks;

/// Per-repository record of the acquire and env restore steps.
#[derive(Debug)]
pub struct RepositoryOutcome {
    /// Repository folder, relative to the project folder.
    pub path: String,
    /// Clone URL.
    pub url: String,
    /// Result of folder creation + clone.
    pub acquired: Result<()>,
    /// Result of the env restore pass.
    pub env: Result<Transfer>,
}

impl RepositoryOutcome {
    /// True when the acquire or the env restore step failed.
    pub fn failed(&self) -> bool {
        self.acquired.is_err() || self.env.is_err()
    }
}

/// What happened to one project.
#[derive(Debug)]
pub enum ProjectStatus {
    /// The project was skipped entirely (e.g. no repositories defined).
    Skipped(Error),
    /// A folder step failed before any repository could be processed.
    Failed(Error),
    /// The project was processed; individual steps may still have failed.
    Processed {
        repositories: Vec<RepositoryOutcome>,
        /// Path of the written descriptor, or why writing it failed.
        descriptor: Result<PathBuf>,
    },
}

/// Aggregate outcome for one project, returned to the caller for reporting.
#[derive(Debug)]
pub struct ProjectOutcome {
    pub name: String,
    pub status: ProjectStatus,
}

impl ProjectOutcome {
    /// Number of failed steps recorded for this project.
    pub fn error_count(&self) -> usize {
        match &self.status {
            ProjectStatus::Skipped(_) | ProjectStatus::Failed(_) => 1,
            ProjectStatus::Processed {
                repositories,
                descriptor,
            } => {
                repositories.iter().filter(|r| r.failed()).count()
                    + usize::from(descriptor.is_err())
            }
        }
    }
}

/// Materialize every project of the config under `base_dir`.
///
/// Always visits all projects; the only way to abort a run early is a fatal
/// configuration error, which happens before this function is called.
pub fn materialize(
    config: &Config,
    acquirer: &dyn RepositoryAcquirer,
    base_dir: &Path,
) -> Vec<ProjectOutcome> {
    let workspace_root = base_dir.join(config.workspace_root());
    let archive_dir = base_dir.join(config.env_archive());

    config
        .projects
        .iter()
        .map(|project| ProjectOutcome {
            name: project.name.clone(),
            status: materialize_project(project, acquirer, &workspace_root, &archive_dir),
        })
        .collect()
}

fn materialize_project(
    project: &Project,
    acquirer: &dyn RepositoryAcquirer,
    workspace_root: &Path,
    archive_dir: &Path,
) -> ProjectStatus {
    if let Err(e) = create_folder(workspace_root) {
        return ProjectStatus::Failed(e);
    }

    let repositories = match project.repositories.as_deref() {
        Some(repos) if !repos.is_empty() => repos,
        _ => {
            let e = Error::Project {
                project: project.name.clone(),
                message: "no repositories defined".to_string(),
            };
            warn!("{}", e);
            return ProjectStatus::Skipped(e);
        }
    };

    let project_dir = workspace_root.join(&project.path);
    if let Err(e) = create_folder(&project_dir) {
        return ProjectStatus::Failed(e);
    }

    // Clone phase: every repository, before any env restore.
    let mut outcomes: Vec<RepositoryOutcome> = repositories
        .iter()
        .map(|repo| {
            let destination = project_dir.join(&repo.path);
            let acquired = create_folder(&destination).and_then(|_| {
                info!("cloning {} into {}", repo.url, destination.display());
                acquirer.acquire(&repo.url, &destination)
            });
            if let Err(e) = &acquired {
                warn!("{}", e);
            }
            RepositoryOutcome {
                path: repo.path.clone(),
                url: repo.url.clone(),
                acquired,
                env: Ok(Transfer::Skipped),
            }
        })
        .collect();

    // Env restore phase.
    for (repo, outcome) in repositories.iter().zip(outcomes.iter_mut()) {
        let repo_dir = project_dir.join(&repo.path);
        outcome.env = envfiles::restore(project, repo, archive_dir, &repo_dir);
        if let Err(e) = &outcome.env {
            warn!("{}", e);
        }
    }

    let descriptor = write_descriptor(project, &project_dir);
    if let Err(e) = &descriptor {
        warn!("{}", e);
    }

    ProjectStatus::Processed {
        repositories: outcomes,
        descriptor,
    }
}

/// Synthesize and persist the project's task descriptor.
fn write_descriptor(project: &Project, project_dir: &Path) -> Result<PathBuf> {
    let descriptor = tasks::synthesize(&project.tasks)?;

    let descriptor_dir = project_dir.join(defaults::DESCRIPTOR_DIR);
    create_folder(&descriptor_dir)?;

    let path = descriptor_dir.join(defaults::DESCRIPTOR_FILE);
    let json = serde_json::to_string_pretty(&descriptor)?;
    fs::write(&path, json)?;
    info!("task descriptor written to {}", path.display());
    Ok(path)
}

/// Idempotent folder creation: succeeds when the folder already exists.
fn create_folder(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}
