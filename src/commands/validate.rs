//! Validate command implementation
//!
//! Loads the configuration file, runs structural validation, and reports
//! what the config declares without touching the filesystem. Gives the
//! fatal-config error path a fast, network-free surface.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use devnest::output::{emoji, OutputConfig};

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the JSON configuration file
    #[arg(short, long, value_name = "PATH", env = "DEVNEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the validate command
pub fn execute(args: ValidateArgs, output: &OutputConfig) -> Result<()> {
    let base_dir = std::env::current_dir()?;
    let config = super::load_config(args.config, &base_dir)?;

    if args.quiet {
        return Ok(());
    }

    let repo_count: usize = config
        .projects
        .iter()
        .map(|p| p.repositories.as_deref().map_or(0, |r| r.len()))
        .sum();
    let task_count: usize = config.projects.iter().map(|p| p.tasks.len()).sum();

    println!(
        "{} Configuration is valid",
        emoji(output, "✅", "[VALID]")
    );
    println!(
        "   {} project(s), {} repository(ies), {} task(s)",
        config.projects.len(),
        repo_count,
        task_count
    );
    println!(
        "   workspace root: {}  env archive: {}",
        config.workspace_root().display(),
        config.env_archive().display()
    );

    for project in &config.projects {
        if project.repositories.as_deref().map_or(true, |r| r.is_empty()) {
            println!(
                "{} project '{}' has no repositories and will be skipped by apply",
                emoji(output, "⚠️ ", "[WARN]"),
                project.name
            );
        }
    }

    Ok(())
}
