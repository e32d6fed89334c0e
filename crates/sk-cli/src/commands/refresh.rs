//! Refresh command implementation

use anyhow::Result;

use sk_core::MigrationTask;

use crate::cli::GlobalArgs;
use crate::commands::common::run_task;

/// Execute the refresh command: roll back all migrations, then apply them
/// all again. Two independent pipeline runs, each with its own workspace
/// lifecycle.
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    log::info!("Refreshing all migrations");
    run_task(global, MigrationTask::ResetAll).await?;
    run_task(global, MigrationTask::ApplyPending).await
}
