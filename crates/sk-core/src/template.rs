//! Synthesis of the ephemeral runner source.
//!
//! The runner is a small Go program that registers the database with the
//! beego ORM and invokes exactly one migration entry point. Synthesis is
//! pure text substitution: a typed parameter struct is validated, rendered
//! into the fixed template, and written once into the workspace. Nothing
//! here touches the database.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use minijinja::{context, Environment};

use crate::descriptor::ConnectionDescriptor;
use crate::error::{CoreError, CoreResult};
use crate::workspace::Workspace;

/// The runner template. Versioned resource constant owned by this module;
/// placeholders are filled from [`TemplateParams`] only.
const RUNNER_TEMPLATE: &str = r#"package main

import (
	"github.com/astaxie/beego/orm"
	"github.com/astaxie/beego/migration"
)

func init() {
	orm.RegisterDb("default", "{{ driver }}", "{{ conn_str }}")
}

func main() {
	migration.{{ entrypoint }}
}
"#;

/// Which migration entry point the synthesized runner invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationTask {
    /// Apply all outstanding migrations.
    ApplyPending,
    /// Roll back the last migration operation.
    RollbackLast,
    /// Roll back all migrations.
    ResetAll,
}

impl MigrationTask {
    /// The entry point call embedded in the runner's `main`.
    fn entrypoint(self, version: i64) -> String {
        match self {
            MigrationTask::ApplyPending => format!("Upgrade({version})"),
            MigrationTask::RollbackLast => "Rollback()".to_string(),
            MigrationTask::ResetAll => "Reset()".to_string(),
        }
    }
}

/// Typed parameters for one synthesis.
#[derive(Debug, Clone)]
pub struct TemplateParams {
    pub driver: String,
    pub conn_str: String,
    /// Monotonic version token; also keys the generated file names so a
    /// leftover workspace from a crashed run cannot collide silently.
    pub version: i64,
    pub task: MigrationTask,
}

impl TemplateParams {
    /// Build params from a descriptor, stamping the current instant (in
    /// microseconds) as the version token.
    pub fn new(descriptor: &ConnectionDescriptor, task: MigrationTask) -> Self {
        Self {
            driver: descriptor.driver().to_string(),
            conn_str: descriptor.dsn().to_string(),
            version: chrono::Utc::now().timestamp_micros(),
            task,
        }
    }

    /// Reject values that would inject into the generated source.
    fn validate(&self) -> CoreResult<()> {
        for (field, value) in [
            ("driver", self.driver.as_str()),
            ("connection string", self.conn_str.as_str()),
        ] {
            if value.contains("{{") || value.contains("}}") || value.contains('"') {
                return Err(CoreError::TemplateDelimiter { field });
            }
        }
        Ok(())
    }
}

/// A rendered source unit on disk, ready to be compiled.
#[derive(Debug)]
pub struct SynthesizedUnit {
    /// Path of the generated source file inside the workspace.
    pub source_path: PathBuf,
    /// Path the compiled binary should be written to.
    pub binary_path: PathBuf,
}

/// Render the runner source text. Deterministic: identical params produce
/// byte-identical output.
pub fn render(params: &TemplateParams) -> CoreResult<String> {
    params.validate()?;
    let env = Environment::new();
    let source = env.render_str(
        RUNNER_TEMPLATE,
        context! {
            driver => &params.driver,
            conn_str => &params.conn_str,
            entrypoint => params.task.entrypoint(params.version),
        },
    )?;
    Ok(source)
}

/// Render and write the runner into the workspace.
///
/// The write uses create-new semantics: an existing file of the same name
/// (leftover state from a prior crashed run) fails the synthesis instead
/// of being overwritten.
pub fn synthesize(workspace: &Workspace, params: &TemplateParams) -> CoreResult<SynthesizedUnit> {
    let source = render(params)?;

    let stem = format!("runner_{}", params.version);
    let source_path = workspace.path().join(format!("{stem}.go"));
    let binary_path = workspace.path().join(stem);

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&source_path)
        .map_err(|e| CoreError::SourceCollision {
            path: source_path.display().to_string(),
            source: e,
        })?;
    file.write_all(source.as_bytes())?;

    Ok(SynthesizedUnit {
        source_path,
        binary_path,
    })
}

#[cfg(test)]
#[path = "template_test.rs"]
mod tests;
