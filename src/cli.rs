//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use devnest::output::OutputConfig;

/// Devnest - Materialize multi-repository development workspaces
#[derive(Parser, Debug)]
#[command(name = "devnest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Materialize the configured workspace: folders, clones, env files, task descriptors
    Apply(commands::apply::ApplyArgs),

    /// Back up .env files from an existing workspace into the archive folder
    Backup(commands::backup::BackupArgs),

    /// Remove dependency-cache folders and lock files from the workspace
    Clean(commands::clean::CleanArgs),

    /// Validate the configuration file and report its contents
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .init();

        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Apply(args) => commands::apply::execute(args, &output),
            Commands::Backup(args) => commands::backup::execute(args, &output),
            Commands::Clean(args) => commands::clean::execute(args, &output),
            Commands::Validate(args) => commands::validate::execute(args, &output),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
