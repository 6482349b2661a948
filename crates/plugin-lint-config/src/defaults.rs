//! Default values for validator settings.

use crate::logging::LogFormat;

/// Environment variable overriding the log filter.
pub const LOG_FILTER_ENV: &str = "PLUGIN_LINT_LOG_FILTER";

/// Environment variable overriding the log format.
pub const LOG_FORMAT_ENV: &str = "PLUGIN_LINT_LOG_FORMAT";

/// Default log filter expression. Kept quiet so a normal run prints only
/// the report.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}
