//! # Env File Transfer
//!
//! Moves `.env` files between a config-addressed archive folder and the
//! repository working folders of a materialized workspace, in either
//! direction.
//!
//! Archive entries are not stored with explicit metadata; an entry is
//! identified purely by its file name, derived from the owning project and
//! repository: `"{project.name}-{repository.path}.env"`. The derivation is a
//! pure function, so backing up and restoring the same `(project,
//! repository)` pair always addresses the same archive file.
//!
//! A missing env file is an expected case, not an error: a repository simply
//! may not need one. Both directions report it as [`Transfer::Skipped`].
//!
//! Constraint: because the key flattens `(name, path)` into one string, two
//! distinct repositories may collide on the same archive file (e.g. project
//! `a` repo `b-c` vs project `a-b` repo `c`). Collisions are not detected;
//! avoiding them is the config author's responsibility.

use std::fs;
use std::path::Path;

use log::info;

use crate::config::{Project, Repository};
use crate::error::{Error, Result};

/// Outcome of a transfer in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// The file was copied (overwriting any previous destination content).
    Copied,
    /// Nothing to do: the source file or destination folder does not exist.
    Skipped,
}

/// Derive the archive file name for a `(project, repository)` pair.
pub fn archive_key(project: &Project, repo: &Repository) -> String {
    format!("{}-{}.env", project.name, repo.path)
}

/// Restore a repository's env file from the archive.
///
/// Copies `<archive>/<key>` to `<repo dir>/.env`. Returns `Skipped` when the
/// archive file or the destination folder is missing, leaving any existing
/// `.env` untouched.
pub fn restore(
    project: &Project,
    repo: &Repository,
    archive_dir: &Path,
    repo_dir: &Path,
) -> Result<Transfer> {
    let key = archive_key(project, repo);
    let src = archive_dir.join(&key);
    if !src.exists() || !repo_dir.exists() {
        info!("no archived env file for {}/{}", project.name, repo.path);
        return Ok(Transfer::Skipped);
    }

    let dst = repo_dir.join(".env");
    fs::copy(&src, &dst).map_err(|e| transfer_error(&src, &dst, e))?;
    info!("{} copied to {}", key, dst.display());
    Ok(Transfer::Copied)
}

/// Back up a repository's env file into the archive.
///
/// Copies `<repo dir>/.env` to `<archive>/<key>`. Returns `Skipped` when the
/// repository has no `.env`. The archive folder is the caller's concern: the
/// backup orchestrator creates it exactly once per run, not per repository.
pub fn backup(
    project: &Project,
    repo: &Repository,
    repo_dir: &Path,
    archive_dir: &Path,
) -> Result<Transfer> {
    let src = repo_dir.join(".env");
    if !src.exists() {
        return Ok(Transfer::Skipped);
    }

    let dst = archive_dir.join(archive_key(project, repo));
    fs::copy(&src, &dst).map_err(|e| transfer_error(&src, &dst, e))?;
    info!("{} backed up to {}", src.display(), dst.display());
    Ok(Transfer::Copied)
}

fn transfer_error(src: &Path, dst: &Path, e: std::io::Error) -> Error {
    Error::Transfer {
        src: src.display().to_string(),
        dst: dst.display().to_string(),
        message: e.to_string(),
    }
}
