//! Runtime settings shared by the manifest validator binary.
//!
//! Settings resolve from command-line flags first and fall back to the
//! `PLUGIN_LINT_*` environment variables, then to the defaults in
//! [`defaults`]. The validation rules themselves are fixed policy and are
//! intentionally absent from this crate.

pub mod defaults;
mod logging;

use clap::Args;

pub use defaults::{
    DEFAULT_LOG_FILTER, LOG_FILTER_ENV, LOG_FORMAT_ENV, default_log_filter, default_log_format,
};
pub use logging::LogFormat;

/// Diagnostic settings for a validator run.
///
/// `Config` is a [`clap::Args`] group so the binary can flatten it into its
/// own parser.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct Config {
    /// Tracing filter directives for diagnostic logs written to stderr.
    #[arg(
        long = "log-filter",
        value_name = "FILTER",
        env = "PLUGIN_LINT_LOG_FILTER",
        default_value = DEFAULT_LOG_FILTER
    )]
    pub log_filter: String,
    /// Format of diagnostic logs (`json` or `compact`).
    #[arg(
        long = "log-format",
        value_name = "FORMAT",
        env = "PLUGIN_LINT_LOG_FORMAT",
        default_value_t = default_log_format()
    )]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: String::from(default_log_filter()),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Returns the tracing filter expression.
    #[must_use]
    pub const fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}
