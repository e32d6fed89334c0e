//! Pluggable build backend.
//!
//! The pipeline core only knows how to sequence compile, execute, and
//! cleanup; the actual toolchain lives behind [`BuildBackend`] so the
//! orchestration logic is testable with a fake. The production backend is
//! the Go toolchain, discovered via `$GOPATH`.

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use sk_core::{CoreError, CoreResult};

use crate::pipeline::{PipelineError, PipelineResult, RunOutput};

/// Compile-and-execute capability for synthesized units.
#[async_trait]
pub trait BuildBackend: Send + Sync {
    /// Compile `source` into `binary`. Compiler diagnostics travel in the
    /// error.
    async fn compile(&self, source: &Path, binary: &Path) -> PipelineResult<()>;

    /// Execute `binary`, capturing combined stdout/stderr.
    async fn execute(&self, binary: &Path) -> PipelineResult<RunOutput>;

    /// Backend identifier for logging
    fn name(&self) -> &'static str;
}

/// Go toolchain backend: `go build`, then direct execution of the binary.
#[derive(Debug)]
pub struct GoBackend {
    timeout: Option<Duration>,
}

impl GoBackend {
    /// Discover the toolchain from the environment.
    ///
    /// `$GOPATH` must be set and non-empty; its absence is a configuration
    /// error, reported before any database work happens.
    pub fn from_env(timeout: Option<Duration>) -> CoreResult<Self> {
        match std::env::var("GOPATH") {
            Ok(gopath) if !gopath.is_empty() => {
                log::debug!("gopath: {gopath}");
                Ok(Self { timeout })
            }
            _ => Err(CoreError::ToolchainNotFound),
        }
    }

    async fn run_command(&self, mut cmd: Command, what: &str) -> PipelineResult<Output> {
        let spawn_err = |source: std::io::Error| PipelineError::Spawn {
            what: what.to_string(),
            source,
        };
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| PipelineError::Timeout {
                    what: what.to_string(),
                    secs: limit.as_secs(),
                })?
                .map_err(spawn_err),
            None => cmd.output().await.map_err(spawn_err),
        }
    }
}

#[async_trait]
impl BuildBackend for GoBackend {
    async fn compile(&self, source: &Path, binary: &Path) -> PipelineResult<()> {
        let mut cmd = Command::new("go");
        cmd.arg("build").arg("-o").arg(binary).arg(source);

        let output = self.run_command(cmd, "go build").await?;
        if !output.status.success() {
            return Err(PipelineError::Build {
                diagnostics: diagnostics_from(&output.stdout, &output.stderr),
            });
        }
        Ok(())
    }

    async fn execute(&self, binary: &Path) -> PipelineResult<RunOutput> {
        let cmd = Command::new(binary);
        let output = self.run_command(cmd, "migration binary").await?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let exit_code = output.status.code().unwrap_or(-1);

        if !output.status.success() {
            return Err(PipelineError::Run {
                exit_code,
                output: combined,
            });
        }
        Ok(RunOutput {
            exit_code,
            output: combined,
        })
    }

    fn name(&self) -> &'static str {
        "go"
    }
}

/// Compiler diagnostics usually arrive on stderr, but some toolchain
/// failures report on stdout only; fall back so the error is never blank.
fn diagnostics_from(stdout: &[u8], stderr: &[u8]) -> String {
    let diagnostics = String::from_utf8_lossy(stderr);
    if diagnostics.trim().is_empty() {
        String::from_utf8_lossy(stdout).into_owned()
    } else {
        diagnostics.into_owned()
    }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
