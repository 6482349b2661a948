//! Human-readable rendering of validation results.

use std::io::{self, Write};

use plugin_lint_core::{Severity, ValidationResult};

pub(crate) fn write_text<W: Write>(writer: &mut W, result: &ValidationResult) -> io::Result<()> {
    let mut section = None;
    for (severity, message) in result.findings() {
        if section != Some(severity) {
            writeln!(writer, "\n{}", heading(severity))?;
            section = Some(severity);
        }
        writeln!(writer, "  • {message}")?;
    }

    let warnings = result.warnings().len();
    if result.is_valid() {
        writeln!(writer, "\n✅ Manifest validation passed!")?;
        if warnings > 0 {
            writeln!(writer, "   (but has {warnings} warning(s) to consider)")?;
        }
    } else {
        writeln!(
            writer,
            "\n❌ Validation failed with {} error(s) and {warnings} warning(s)",
            result.errors().len()
        )?;
    }
    Ok(())
}

const fn heading(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "❌ Errors:",
        Severity::Warning => "⚠️  Warnings:",
    }
}
