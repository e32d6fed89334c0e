//! Skein CLI - a migration execution orchestrator
//!
//! Ensures the migrations tracking table exists in the expected shape,
//! synthesizes an ephemeral runner for the selected command, builds and
//! runs it, and guarantees the temporary workspace is removed afterwards.

use clap::Parser;

mod backend;
mod cli;
mod commands;
mod pipeline;

use cli::{Cli, Commands};
use commands::{refresh, reset, rollback, update};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.global.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let result = match &cli.command {
        None | Some(Commands::Update) => update::execute(&cli.global).await,
        Some(Commands::Rollback) => rollback::execute(&cli.global).await,
        Some(Commands::Reset) => reset::execute(&cli.global).await,
        Some(Commands::Refresh) => refresh::execute(&cli.global).await,
    };

    match result {
        Ok(()) => log::info!("Migration successful!"),
        Err(e) => {
            // Every fatal class maps to the same exit code; the log line
            // carries the specifics. Workspace cleanup has already run by
            // the time the error reaches this handler.
            log::error!("{e:#}");
            std::process::exit(2);
        }
    }
}
