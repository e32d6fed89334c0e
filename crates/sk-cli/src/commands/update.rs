//! Update command implementation

use anyhow::Result;

use sk_core::MigrationTask;

use crate::cli::GlobalArgs;
use crate::commands::common::run_task;

/// Execute the update command: apply all outstanding migrations.
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    log::info!("Running all outstanding migrations");
    run_task(global, MigrationTask::ApplyPending).await
}
