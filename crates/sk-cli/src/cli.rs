//! CLI argument definitions using clap derive API

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Skein - run database migrations
#[derive(Parser, Debug)]
#[command(name = "skein")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; `update` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (location of skein.yml)
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Database driver
    #[arg(long, global = true, env = "SKEIN_DRIVER")]
    pub driver: Option<String>,

    /// Connection string, `user:pass@proto(host:port)/schema?params` form
    #[arg(long, global = true, env = "SKEIN_DSN")]
    pub dsn: Option<String>,

    /// Workspace directory for synthesized sources and binaries
    #[arg(long, global = true, env = "SKEIN_WORKSPACE_DIR")]
    pub workspace_dir: Option<String>,

    /// Bound each external compile/run step to this many seconds
    /// (unbounded by default, matching historical behavior)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run all outstanding migrations
    Update,

    /// Rollback the last migration operation
    Rollback,

    /// Rollback all migrations
    Reset,

    /// Rollback all migrations and run them all again
    Refresh,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
