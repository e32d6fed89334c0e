//! Reset command implementation

use anyhow::Result;

use sk_core::MigrationTask;

use crate::cli::GlobalArgs;
use crate::commands::common::run_task;

/// Execute the reset command: roll back all migrations.
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    log::info!("Rolling back all migrations");
    run_task(global, MigrationTask::ResetAll).await
}
