//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use plugin_lint_core::ManifestError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("Error getting current directory: {0}")]
    CurrentDir(Arc<io::Error>),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error("failed to initialise logging: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("failed to serialise validation report: {0}")]
    SerialiseReport(serde_json::Error),
    #[error("failed to write validation report: {0}")]
    WriteReport(io::Error),
}

impl From<crate::output::ReportError> for AppError {
    fn from(error: crate::output::ReportError) -> Self {
        match error {
            crate::output::ReportError::Serialise(source) => Self::SerialiseReport(source),
            crate::output::ReportError::Io(source) => Self::WriteReport(source),
        }
    }
}
