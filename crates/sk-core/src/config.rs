//! Project configuration loaded from `skein.yml`.
//!
//! The config file is optional and only supplies defaults; command-line
//! flags and environment variables always win.

use std::path::Path;

use serde::Deserialize;

use crate::error::CoreResult;

/// Name of the optional project config file.
pub const CONFIG_FILE: &str = "skein.yml";

/// Optional project-level defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database driver name (e.g. `mysql`).
    pub driver: Option<String>,

    /// Connection string in `user:pass@proto(host:port)/schema?params` form.
    pub dsn: Option<String>,

    /// Workspace directory used for synthesized sources and binaries.
    pub workspace_dir: Option<String>,
}

impl Config {
    /// Load `skein.yml` from the given directory.
    ///
    /// A missing file is not an error; it yields an empty config.
    pub fn load(project_dir: &Path) -> CoreResult<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
