//! Serialisable envelope for JSON reports.

use plugin_lint_core::ValidationResult;
use serde::{Deserialize, Serialize};

/// JSON shape emitted by `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonReport {
    /// True when no errors were found.
    pub valid: bool,
    /// Blocking findings, omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Advisory findings, omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl From<&ValidationResult> for JsonReport {
    fn from(result: &ValidationResult) -> Self {
        Self {
            valid: result.is_valid(),
            errors: result.errors().to_vec(),
            warnings: result.warnings().to_vec(),
        }
    }
}
