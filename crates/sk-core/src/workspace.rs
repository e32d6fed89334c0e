//! Scoped temporary workspace for one pipeline invocation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Default workspace directory name.
pub const DEFAULT_WORKSPACE_DIR: &str = "temp";

/// A scoped temporary directory holding a synthesized source and its
/// compiled binary during a single pipeline run.
///
/// The pipeline removes it explicitly via [`Workspace::remove`] so removal
/// failures can be reported; the `Drop` impl removes it best-effort so an
/// early fatal abort still leaves no artifacts behind.
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
    removed: bool,
}

impl Workspace {
    /// Create the workspace directory, parents as needed.
    pub fn create(path: impl Into<PathBuf>) -> CoreResult<Self> {
        let path = path.into();
        fs::create_dir_all(&path).map_err(|e| CoreError::WorkspaceCreate {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self {
            path,
            removed: false,
        })
    }

    /// Path of the workspace directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the workspace and everything in it.
    ///
    /// Idempotent: calling it twice, or after the directory is already
    /// gone, is not an error.
    pub fn remove(&mut self) -> CoreResult<()> {
        if self.removed {
            return Ok(());
        }
        match fs::remove_dir_all(&self.path) {
            Ok(()) => {
                self.removed = true;
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.removed = true;
                Ok(())
            }
            Err(e) => Err(CoreError::WorkspaceRemove {
                path: self.path.display().to_string(),
                source: e,
            }),
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(e) = fs::remove_dir_all(&self.path) {
            if e.kind() != ErrorKind::NotFound {
                log::warn!("Leaked workspace '{}': {}", self.path.display(), e);
            }
        }
    }
}

#[cfg(test)]
#[path = "workspace_test.rs"]
mod tests;
