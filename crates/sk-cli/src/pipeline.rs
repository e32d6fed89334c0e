//! Build-execute-cleanup pipeline.
//!
//! Compiles the synthesized unit, runs the resulting binary with captured
//! output, and removes the workspace on every exit path. That last part is
//! the one invariant this whole design exists to protect: no temporary
//! build artifacts survive a pipeline invocation, success or failure.

use thiserror::Error;

use sk_core::{SynthesizedUnit, Workspace};

use crate::backend::BuildBackend;

/// Pipeline errors
#[derive(Error, Debug)]
pub enum PipelineError {
    /// P001: the external compiler rejected the synthesized unit
    #[error("[P001] Could not build migration binary:\n{diagnostics}")]
    Build { diagnostics: String },

    /// P002: the migration binary exited non-zero
    #[error("[P002] Migration run failed (exit {exit_code}):\n{output}")]
    Run { exit_code: i32, output: String },

    /// P003: an external process could not be invoked at all
    #[error("[P003] Failed to invoke {what}: {source}")]
    Spawn {
        what: String,
        source: std::io::Error,
    },

    /// P004: an external step exceeded the configured bound
    #[error("[P004] {what} did not finish within {secs}s")]
    Timeout { what: String, secs: u64 },

    /// P005: workspace cleanup failed after a successful run
    #[error(transparent)]
    Cleanup(#[from] sk_core::CoreError),
}

/// Result type alias for PipelineError
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Captured outcome of executing the migration binary.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub exit_code: i32,
    /// Combined stdout/stderr of the run.
    pub output: String,
}

/// Compile and execute the unit, then remove the workspace.
///
/// Cleanup runs regardless of whether compile or execute failed. When both
/// the run and the cleanup fail, the run error wins (it is the actionable
/// one) and the cleanup failure is logged; a cleanup failure after a
/// successful run is itself fatal, since a leaked workspace would collide
/// with the next invocation's create-new-only synthesis.
pub async fn run(
    backend: &dyn BuildBackend,
    mut workspace: Workspace,
    unit: &SynthesizedUnit,
) -> PipelineResult<RunOutput> {
    let result = run_inner(backend, unit).await;
    match workspace.remove() {
        Ok(()) => result,
        Err(cleanup) => match result {
            Err(primary) => {
                log::warn!("{cleanup}");
                Err(primary)
            }
            Ok(_) => Err(PipelineError::Cleanup(cleanup)),
        },
    }
}

async fn run_inner(
    backend: &dyn BuildBackend,
    unit: &SynthesizedUnit,
) -> PipelineResult<RunOutput> {
    log::debug!(
        "Building migration binary from {} with {}",
        unit.source_path.display(),
        backend.name()
    );
    backend.compile(&unit.source_path, &unit.binary_path).await?;

    let run = backend.execute(&unit.binary_path).await?;
    log::debug!("Migration binary exited with code {}", run.exit_code);
    // The runner's own logging is the only visibility into which
    // individual migrations ran, so surface it even on success.
    if !run.output.trim().is_empty() {
        log::info!("{}", run.output.trim_end());
    }
    Ok(run)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
