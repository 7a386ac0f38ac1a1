//! Backup command implementation
//!
//! The reverse of `apply`: reads `.env` files out of the already-existing
//! workspace and copies them into the config-addressed archive folder. The
//! archive folder is created on demand, once per run.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use devnest::backup;
use devnest::envfiles::Transfer;
use devnest::output::{emoji, OutputConfig};

/// Arguments for the backup command
#[derive(Args, Debug)]
pub struct BackupArgs {
    /// Path to the JSON configuration file
    #[arg(short, long, value_name = "PATH", env = "DEVNEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the .env files archive folder (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    pub envfiles: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the backup command
pub fn execute(args: BackupArgs, output: &OutputConfig) -> Result<()> {
    let base_dir = std::env::current_dir()?;

    let mut config = super::load_config(args.config, &base_dir)?;
    if let Some(envfiles) = args.envfiles {
        config.settings.envfiles = Some(envfiles);
    }

    if !args.quiet {
        println!(
            "{} Backing up .env files to {}",
            emoji(output, "🗄️ ", "[BACKUP]"),
            base_dir.join(config.env_archive()).display()
        );
        println!();
    }

    let outcomes = backup::backup_all(&config, &base_dir)?;

    let mut copied = 0;
    let mut failures = 0;
    for project in &outcomes {
        match &project.repositories {
            Err(e) => {
                failures += 1;
                if !args.quiet {
                    println!("{} {}", emoji(output, "⚠️ ", "[SKIP]"), e);
                }
            }
            Ok(repos) => {
                for repo in repos {
                    match &repo.transfer {
                        Ok(Transfer::Copied) => {
                            copied += 1;
                            if !args.quiet {
                                println!(
                                    "  {} {}/{}",
                                    emoji(output, "✅", "[OK]"),
                                    project.name,
                                    repo.path
                                );
                            }
                        }
                        Ok(Transfer::Skipped) => {}
                        Err(e) => {
                            failures += 1;
                            if !args.quiet {
                                println!("  {} {}", emoji(output, "❌", "[FAIL]"), e);
                            }
                        }
                    }
                }
            }
        }
    }

    if !args.quiet {
        println!();
        println!(
            "{} {} env file(s) backed up, {} failure(s)",
            emoji(output, "✅", "[DONE]"),
            copied,
            failures
        );
    }

    Ok(())
}
