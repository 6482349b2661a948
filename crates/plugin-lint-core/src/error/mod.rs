//! Errors raised while loading a manifest document.
//!
//! These are the only fatal conditions in the crate: rule violations are
//! never errors in this sense, they are findings accumulated in a
//! [`crate::ValidationResult`]. I/O errors are wrapped in `Arc` to satisfy
//! the `result_large_err` Clippy lint.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Errors arising from reading or decoding a manifest file.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("Error reading manifest file '{}': {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The manifest file is not a JSON object of the expected shape.
    #[error("Error parsing manifest.json: {source}")]
    Parse {
        /// Path whose contents failed to decode.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl ManifestError {
    /// Returns the path of the manifest that failed to load.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path.as_path(),
        }
    }
}
