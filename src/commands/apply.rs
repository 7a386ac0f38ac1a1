//! Apply command implementation
//!
//! The apply command executes the full materialization pipeline per project:
//! 1. Folder creation (workspace root, project, repository destinations)
//! 2. Repository cloning via the system git client
//! 3. Env file restore from the archive folder
//! 4. Task descriptor synthesis and write
//!
//! Per-project and per-repository failures are printed and counted but never
//! abort the run; only a fatal configuration error exits non-zero.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use devnest::envfiles::Transfer;
use devnest::git::GitAcquirer;
use devnest::output::{emoji, OutputConfig};
use devnest::workspace::{self, ProjectStatus};

/// Arguments for the apply command
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Path to the JSON configuration file
    #[arg(short, long, value_name = "PATH", env = "DEVNEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the .env files archive folder (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    pub envfiles: Option<PathBuf>,

    /// Show detailed progress information
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the apply command
pub fn execute(args: ApplyArgs, output: &OutputConfig) -> Result<()> {
    let start_time = Instant::now();

    // Ambient cwd is resolved once here; the core only sees explicit paths.
    let base_dir = std::env::current_dir()?;

    let mut config = super::load_config(args.config, &base_dir)?;

    // The command-line override takes precedence over the config file value.
    if let Some(envfiles) = args.envfiles {
        config.settings.envfiles = Some(envfiles);
    }

    if !args.quiet {
        println!("{} Materializing workspace", emoji(output, "📦", "[APPLY]"));
        if args.verbose {
            println!(
                "   root: {}  envfiles: {}",
                base_dir.join(config.workspace_root()).display(),
                base_dir.join(config.env_archive()).display()
            );
        }
        println!();
    }

    let acquirer = GitAcquirer;
    let outcomes = workspace::materialize(&config, &acquirer, &base_dir);

    let mut failures = 0;
    for outcome in &outcomes {
        failures += outcome.error_count();
        if args.quiet {
            continue;
        }

        match &outcome.status {
            ProjectStatus::Skipped(e) => {
                println!("{} {}", emoji(output, "⚠️ ", "[SKIP]"), e);
            }
            ProjectStatus::Failed(e) => {
                println!("{} {}: {}", emoji(output, "❌", "[FAIL]"), outcome.name, e);
            }
            ProjectStatus::Processed {
                repositories,
                descriptor,
            } => {
                println!("{}:", outcome.name);
                for repo in repositories {
                    match &repo.acquired {
                        Ok(()) => {
                            println!("  {} cloned {}", emoji(output, "✅", "[OK]"), repo.path)
                        }
                        Err(e) => println!("  {} {}", emoji(output, "❌", "[FAIL]"), e),
                    }
                    match &repo.env {
                        Ok(Transfer::Copied) => {
                            println!("     .env restored for {}", repo.path)
                        }
                        Ok(Transfer::Skipped) => {
                            if args.verbose {
                                println!("     no archived .env for {}", repo.path)
                            }
                        }
                        Err(e) => println!("  {} {}", emoji(output, "❌", "[FAIL]"), e),
                    }
                }
                match descriptor {
                    Ok(path) => println!(
                        "  {} task descriptor: {}",
                        emoji(output, "📝", "[TASKS]"),
                        path.display()
                    ),
                    Err(e) => println!("  {} {}", emoji(output, "❌", "[FAIL]"), e),
                }
            }
        }
    }

    if !args.quiet {
        let duration = start_time.elapsed();
        println!();
        if failures == 0 {
            println!(
                "{} Materialized {} projects in {:.2}s",
                emoji(output, "✅", "[DONE]"),
                outcomes.len(),
                duration.as_secs_f64()
            );
        } else {
            println!(
                "{} Visited {} projects in {:.2}s, {} step(s) failed; re-run after fixing",
                emoji(output, "⚠️ ", "[DONE]"),
                outcomes.len(),
                duration.as_secs_f64(),
                failures
            );
        }
    }

    // Only config errors are fatal; partial failures still exit zero.
    Ok(())
}
