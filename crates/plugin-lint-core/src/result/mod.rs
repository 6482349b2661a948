//! Finding classification and the validation result accumulator.

/// Classification of a single finding.
///
/// # Example
///
/// ```
/// use plugin_lint_core::Severity;
///
/// assert_eq!(Severity::Warning.as_str(), "warning");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A policy violation that blocks acceptance.
    Error,
    /// A stylistic concern that does not affect validity.
    Warning,
}

impl Severity {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered findings produced by one validation run.
///
/// Findings are appended in the order the validators ran and cannot be
/// removed. A result is valid exactly when it holds no errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    /// Builds a result from pre-computed findings.
    ///
    /// Reporters and tests use this to render results that did not come
    /// from the rule engine.
    #[must_use]
    pub const fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self { errors, warnings }
    }

    pub(crate) fn push(&mut self, severity: Severity, message: impl Into<String>) {
        match severity {
            Severity::Error => self.errors.push(message.into()),
            Severity::Warning => self.warnings.push(message.into()),
        }
    }

    pub(crate) fn push_error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    pub(crate) fn push_warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message);
    }

    /// Returns the blocking findings in the order they were raised.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns the advisory findings in the order they were raised.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns true when no errors were raised.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over every finding with its severity, errors first.
    pub fn findings(&self) -> impl Iterator<Item = (Severity, &str)> {
        let errors = self
            .errors
            .iter()
            .map(|message| (Severity::Error, message.as_str()));
        let warnings = self
            .warnings
            .iter()
            .map(|message| (Severity::Warning, message.as_str()));
        errors.chain(warnings)
    }
}
