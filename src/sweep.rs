//! # Cleanup Sweeper
//!
//! Recursively locates dependency-cache folders (`node_modules`, `vendor`)
//! and lock files (`package-lock.json`, `yarn.lock`, `composer.lock`) under a
//! root path, then deletes them. Locating and deleting are separate steps so
//! the CLI can show a dry-run listing without mutating anything.
//!
//! The walk never descends into a folder that is itself a sweep target: its
//! contents go away with the folder.
//!
//! This is entirely independent of the materialization core; it only ever
//! removes by name, under the root it is given.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use walkdir::WalkDir;

use crate::defaults;
use crate::error::Result;

/// Paths scheduled for deletion, found by [`find_targets`].
#[derive(Debug, Default)]
pub struct SweepTargets {
    pub folders: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl SweepTargets {
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.folders.len() + self.files.len()
    }
}

/// Counts from one deletion pass.
#[derive(Debug, Default)]
pub struct SweepReport {
    pub removed: usize,
    pub failed: usize,
}

/// Walk `root` and collect every cache folder and lock file to delete.
///
/// Unreadable directory entries are skipped rather than failing the sweep.
pub fn find_targets(root: &Path) -> Result<SweepTargets> {
    let mut targets = SweepTargets::default();
    if !root.exists() {
        return Ok(targets);
    }

    let mut walker = WalkDir::new(root).into_iter();
    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy();
        if entry.file_type().is_dir() {
            if defaults::SWEEP_FOLDERS.contains(&name.as_ref()) {
                targets.folders.push(entry.path().to_path_buf());
                // Contents go away with the folder.
                walker.skip_current_dir();
            }
        } else if defaults::SWEEP_LOCK_FILES.contains(&name.as_ref()) {
            targets.files.push(entry.path().to_path_buf());
        }
    }

    Ok(targets)
}

/// Delete the collected targets, counting per-item failures instead of
/// aborting on the first one.
pub fn remove_targets(targets: &SweepTargets) -> SweepReport {
    let mut report = SweepReport::default();

    for folder in &targets.folders {
        match fs::remove_dir_all(folder) {
            Ok(()) => {
                info!("folder removed: {}", folder.display());
                report.removed += 1;
            }
            Err(e) => {
                warn!("failed to remove {}: {}", folder.display(), e);
                report.failed += 1;
            }
        }
    }

    for file in &targets.files {
        match fs::remove_file(file) {
            Ok(()) => {
                info!("file removed: {}", file.display());
                report.removed += 1;
            }
            Err(e) => {
                warn!("failed to remove {}: {}", file.display(), e);
                report.failed += 1;
            }
        }
    }

    report
}
