//! Rendering of validation results for operators and machines.
//!
//! Text output groups errors and warnings under headings and closes with a
//! pass/fail verdict. JSON output is a pretty-printed envelope carrying a
//! validity flag and the two finding lists, omitting whichever list is
//! empty.

mod models;
mod render;

use std::io::{self, Write};

use plugin_lint_core::ValidationResult;
use thiserror::Error;

pub use self::models::JsonReport;

/// Report format selected on the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// Human-readable headings and bullets.
    #[default]
    Text,
    /// Machine-readable JSON envelope.
    Json,
}

impl OutputFormat {
    /// Maps the `--json` flag onto a format.
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Errors raised while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The JSON envelope could not be serialised.
    #[error("failed to serialise report: {0}")]
    Serialise(#[source] serde_json::Error),
    /// The destination rejected the write.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Writes `result` to `writer` in the requested format.
///
/// # Errors
///
/// Returns [`ReportError`] if serialisation or the underlying write fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    result: &ValidationResult,
    format: OutputFormat,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Text => render::write_text(writer, result)?,
        OutputFormat::Json => {
            let report = JsonReport::from(result);
            serde_json::to_writer_pretty(&mut *writer, &report).map_err(ReportError::Serialise)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
