//! Clean command implementation
//!
//! Prunes dependency-cache folders (`node_modules`, `vendor`) and lock files
//! (`package-lock.json`, `yarn.lock`, `composer.lock`) under the configured
//! workspace root. The sweep lists its targets first, so `--dry-run` can show
//! what would be deleted without touching anything.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use devnest::output::{emoji, OutputConfig};
use devnest::sweep;

/// Arguments for the clean command
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Path to the JSON configuration file
    #[arg(short, long, value_name = "PATH", env = "DEVNEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show what would be deleted without actually deleting anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the clean command
pub fn execute(args: CleanArgs, output: &OutputConfig) -> Result<()> {
    let base_dir = std::env::current_dir()?;

    let config = super::load_config(args.config, &base_dir)?;
    let root = base_dir.join(config.workspace_root());

    let targets = sweep::find_targets(&root)?;

    if targets.is_empty() {
        if !args.quiet {
            println!("Nothing to clean under {}", root.display());
        }
        return Ok(());
    }

    if !args.quiet {
        println!("Targets under {}:\n", root.display());
        for folder in &targets.folders {
            println!("  {}/", folder.display());
        }
        for file in &targets.files {
            println!("  {}", file.display());
        }
        println!("\nTotal: {} target(s)", targets.len());
    }

    if args.dry_run {
        if !args.quiet {
            println!(
                "\n{} Dry run mode - no changes were made.",
                emoji(output, "🔎", "[DRY-RUN]")
            );
        }
        return Ok(());
    }

    let report = sweep::remove_targets(&targets);

    if !args.quiet {
        println!();
        if report.removed > 0 {
            println!(
                "{} Removed {} target(s).",
                emoji(output, "🗑️ ", "[CLEAN]"),
                report.removed
            );
        }
    }
    if report.failed > 0 {
        eprintln!(
            "{} Failed to remove {} target(s).",
            emoji(output, "⚠️ ", "[WARN]"),
            report.failed
        );
    }

    Ok(())
}
