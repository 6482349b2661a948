//! Compiled match patterns shared by the field validators.
//!
//! Patterns compile on first use and are read-only afterwards.

use once_cell::sync::Lazy;
use regex::Regex;

#[expect(clippy::expect_used, reason = "pattern literals are fixed at compile time")]
static PLUGIN_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("plugin id pattern compiles"));

#[expect(clippy::expect_used, reason = "pattern literals are fixed at compile time")]
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$").expect("email pattern compiles")
});

#[expect(clippy::expect_used, reason = "pattern literals are fixed at compile time")]
static DOTTED_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9.]+$").expect("version pattern compiles"));

/// Lowercase ASCII letters, digits, dashes and underscores only.
pub(crate) fn is_plugin_id(value: &str) -> bool {
    PLUGIN_ID.is_match(value)
}

/// `local@domain.tld` shape; deliberately loose.
pub(crate) fn looks_like_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Digits and dots only, so `1.0.0-beta` does not qualify.
pub(crate) fn is_dotted_numeric(value: &str) -> bool {
    DOTTED_NUMERIC.is_match(value)
}
