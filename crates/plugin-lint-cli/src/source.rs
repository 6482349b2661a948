//! Locating and decoding the manifest the CLI was pointed at.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use plugin_lint_core::{Manifest, ManifestError};

use crate::AppError;

pub(crate) trait ManifestSource {
    /// Resolves a user-supplied path, anchoring relative paths at the
    /// working directory.
    fn resolve(&self, path: &Path) -> Result<PathBuf, AppError>;

    /// Reads and decodes the manifest at an already resolved path.
    fn load(&self, path: &Path) -> Result<Manifest, ManifestError>;
}

pub(crate) struct FsManifestSource;

impl ManifestSource for FsManifestSource {
    fn resolve(&self, path: &Path) -> Result<PathBuf, AppError> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        let cwd = std::env::current_dir().map_err(|error| AppError::CurrentDir(Arc::new(error)))?;
        Ok(cwd.join(path))
    }

    fn load(&self, path: &Path) -> Result<Manifest, ManifestError> {
        Manifest::load(path)
    }
}
