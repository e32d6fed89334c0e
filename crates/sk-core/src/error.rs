//! Error types for sk-core

use thiserror::Error;

/// Core error type for Skein
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Build toolchain discovery variable missing
    #[error("[E001] $GOPATH not found. Hint: set $GOPATH in your environment variables")]
    ToolchainNotFound,

    /// E002: Unsupported database driver
    #[error("[E002] Unsupported database driver: {name}")]
    UnknownDriver { name: String },

    /// E003: Malformed connection string
    #[error("[E003] Malformed connection string '{dsn}': {reason}")]
    MalformedDsn { dsn: String, reason: String },

    /// E004: Template parameter carries the template's own delimiter syntax
    #[error("[E004] Refusing to substitute {field}: value contains the template delimiter syntax")]
    TemplateDelimiter { field: &'static str },

    /// E005: Template rendering failed
    #[error("[E005] Failed to render runner source: {0}")]
    Render(#[from] minijinja::Error),

    /// E006: Generated source file already exists (leftover from a crashed run)
    #[error("[E006] Refusing to overwrite existing generated source '{path}': {source}")]
    SourceCollision {
        path: String,
        source: std::io::Error,
    },

    /// E007: Could not create the workspace directory
    #[error("[E007] Could not create workspace '{path}': {source}")]
    WorkspaceCreate {
        path: String,
        source: std::io::Error,
    },

    /// E008: Could not remove the workspace directory
    #[error("[E008] Could not remove workspace '{path}': {source}")]
    WorkspaceRemove {
        path: String,
        source: std::io::Error,
    },

    /// E009: Config file parse error
    #[error("[E009] Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// E010: IO error
    #[error("[E010] IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
