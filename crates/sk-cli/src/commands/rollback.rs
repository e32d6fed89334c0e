//! Rollback command implementation

use anyhow::Result;

use sk_core::MigrationTask;

use crate::cli::GlobalArgs;
use crate::commands::common::run_task;

/// Execute the rollback command: undo the last migration operation.
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    log::info!("Rolling back the last migration operation");
    run_task(global, MigrationTask::RollbackLast).await
}
