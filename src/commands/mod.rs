//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `devnest` command-line tool. Each subcommand is defined in its own file to
//! keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.
//!
//! The `execute` function is the main entry point for the command and is
//! responsible for orchestrating the necessary operations, calling into the
//! `devnest` library to perform the core logic.

pub mod apply;
pub mod backup;
pub mod clean;
pub mod completions;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;
use devnest::config::Config;
use devnest::{config, defaults};

/// Resolve the config file path and load the configuration.
///
/// A load or validation failure here is the fatal error class: commands bail
/// out before touching any project.
pub(crate) fn load_config(config_arg: Option<PathBuf>, base_dir: &std::path::Path) -> Result<Config> {
    let config_path = config_arg.unwrap_or_else(|| base_dir.join(defaults::CONFIG_FILE));
    Ok(config::from_file(&config_path)?)
}
