//! # Repository Acquisition
//!
//! Cloning is delegated to the system `git` command, which automatically
//! handles:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Personal access tokens
//! - Any authentication configured in ~/.gitconfig
//!
//! The [`RepositoryAcquirer`] trait is the seam between the orchestrator and
//! the external tool: the orchestrator only ever sees a `Result`, so a fake
//! acquirer can simulate success or failure in tests without network access.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Acquires one repository into an existing destination folder.
///
/// Contract: the destination folder must exist before invocation, the call
/// blocks until the transfer finishes, and any failure of the external tool
/// is returned as [`Error::Acquire`]; implementations never panic on a
/// failed clone.
pub trait RepositoryAcquirer {
    fn acquire(&self, url: &str, destination: &Path) -> Result<()>;
}

/// The default acquirer, shelling out to `git clone`.
///
/// Cloning into a non-empty destination (e.g. on a re-run over an already
/// materialized workspace) fails fast inside git itself; the orchestrator
/// records the failure and moves on.
#[derive(Debug, Default)]
pub struct GitAcquirer;

impl RepositoryAcquirer for GitAcquirer {
    fn acquire(&self, url: &str, destination: &Path) -> Result<()> {
        let output = Command::new("git")
            .arg("clone")
            .arg(url)
            .arg(destination)
            .output()
            .map_err(|e| Error::Acquire {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);

            // Provide helpful error message for common auth failures
            let message = if stderr.contains("Authentication failed")
                || stderr.contains("Permission denied")
                || stderr.contains("Could not read from remote repository")
            {
                format!(
                    "Authentication failed. Make sure you have access to the repository.\n\
                    For private repos, ensure you have:\n\
                    - SSH key added to ssh-agent\n\
                    - Git credentials configured\n\
                    - Personal access token set up\n\
                    Error: {}",
                    stderr
                )
            } else {
                stderr.to_string()
            };

            return Err(Error::Acquire {
                url: url.to_string(),
                message,
            });
        }

        Ok(())
    }
}
