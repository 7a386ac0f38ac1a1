//! Default values for devnest configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Default configuration file name, resolved against the invocation
/// directory when `--config` is not given.
pub const CONFIG_FILE: &str = "config.json";

/// Folder name inside a project folder that holds the task descriptor.
pub const DESCRIPTOR_DIR: &str = ".vscode";

/// File name of the task descriptor inside [`DESCRIPTOR_DIR`].
pub const DESCRIPTOR_FILE: &str = "tasks.json";

/// Dependency-cache folder names pruned by the `clean` command.
pub const SWEEP_FOLDERS: &[&str] = &["node_modules", "vendor"];

/// Lock file names pruned by the `clean` command.
pub const SWEEP_LOCK_FILES: &[&str] = &["package-lock.json", "yarn.lock", "composer.lock"];

/// Returns the default workspace root, used when the config file omits
/// `config.path`. Relative, resolved against the invocation directory.
pub fn default_workspace_root() -> PathBuf {
    PathBuf::from("./projects")
}

/// Returns the default env archive folder, used when neither `--envfiles`
/// nor `config.envfiles` is given.
pub fn default_env_archive() -> PathBuf {
    PathBuf::from("./envfiles")
}
