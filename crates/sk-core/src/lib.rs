//! sk-core - Core library for Skein
//!
//! Shared building blocks for the migration-execution orchestrator:
//! project configuration, the parsed connection descriptor, synthesis of
//! the ephemeral runner source, and the scoped workspace guard that
//! guarantees temporary build artifacts never outlive an invocation.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod template;
pub mod workspace;

pub use config::Config;
pub use descriptor::{ConnectionDescriptor, Driver};
pub use error::{CoreError, CoreResult};
pub use template::{synthesize, MigrationTask, SynthesizedUnit, TemplateParams};
pub use workspace::{Workspace, DEFAULT_WORKSPACE_DIR};
