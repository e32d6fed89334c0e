//! Shared utilities for CLI commands

use std::time::Duration;

use anyhow::{bail, Context, Result};

use sk_core::{
    synthesize, Config, ConnectionDescriptor, Driver, MigrationTask, TemplateParams, Workspace,
    DEFAULT_WORKSPACE_DIR,
};
use sk_db::MySqlStore;

use crate::backend::GoBackend;
use crate::cli::GlobalArgs;
use crate::pipeline;

/// Resolved invocation settings. CLI flags and env vars override
/// `skein.yml`, which overrides the built-in defaults.
#[derive(Debug)]
pub(crate) struct Settings {
    pub descriptor: ConnectionDescriptor,
    pub workspace_dir: String,
    pub timeout: Option<Duration>,
}

pub(crate) fn resolve_settings(global: &GlobalArgs) -> Result<Settings> {
    let config = Config::load(&global.project_dir).context("Failed to load project config")?;

    let driver_name = global
        .driver
        .clone()
        .or(config.driver)
        .unwrap_or_else(|| "mysql".to_string());
    let driver: Driver = driver_name.parse()?;

    let Some(dsn) = global.dsn.clone().or(config.dsn) else {
        bail!("No connection string configured. Hint: pass --dsn or set `dsn` in skein.yml");
    };
    let descriptor = ConnectionDescriptor::parse(driver, &dsn)?;

    let workspace_dir = global
        .workspace_dir
        .clone()
        .or(config.workspace_dir)
        .unwrap_or_else(|| DEFAULT_WORKSPACE_DIR.to_string());

    Ok(Settings {
        descriptor,
        workspace_dir,
        timeout: global.timeout_secs.map(Duration::from_secs),
    })
}

/// One full pipeline invocation for the selected task.
///
/// Strictly sequential: toolchain discovery, connect, tracking-table
/// ensure, synthesis, then build-execute-cleanup. Each stage fully
/// completes or fatally aborts before the next begins; no workspace is
/// created until the schema state has been validated.
pub(crate) async fn run_task(global: &GlobalArgs, task: MigrationTask) -> Result<()> {
    let settings = resolve_settings(global)?;

    // Toolchain discovery comes first so a misconfigured environment
    // fails before any database side effects.
    let backend = GoBackend::from_env(settings.timeout)?;

    let store = MySqlStore::connect(&settings.descriptor.url()).await?;
    sk_db::ensure(&store).await?;

    let workspace = Workspace::create(&settings.workspace_dir)?;
    let params = TemplateParams::new(&settings.descriptor, task);
    let unit = synthesize(&workspace, &params)?;

    pipeline::run(&backend, workspace, &unit).await?;
    Ok(())
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
