//! The fixed community policy applied to plugin manifests.
//!
//! Seven field validators run in a fixed order. Each one inspects its own
//! field, appends findings to the shared accumulator, and returns early once
//! it has reported that a required field is empty. Substring and suffix
//! checks are case-insensitive and independent of one another, so a single
//! field can collect several errors.
//!
//! | Field | Errors | Warnings |
//! |-------|--------|----------|
//! | `id` | required, contains "obsidian", ends with "plugin", outside `[a-z0-9_-]` | |
//! | `name` | required, contains "obsidian", ends with "plugin" | |
//! | `description` | required, contains "obsidian", over 250 characters | mentions "this plugin" |
//! | `author` | required | looks like an email address |
//! | `version` | required, not digits and dots | |
//! | `authorUrl` / `fundingUrl` | points at the Obsidian website / pricing page | |
//! | `minAppVersion` | required, not digits and dots | |

mod patterns;

use tracing::debug;

use crate::manifest::Manifest;
use crate::result::ValidationResult;

/// Longest description accepted, counted in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 250;

/// Author homepage that plugins must not claim.
pub const DISALLOWED_AUTHOR_URL: &str = "https://obsidian.md";

/// Funding link that plugins must not claim.
pub const DISALLOWED_FUNDING_URL: &str = "https://obsidian.md/pricing";

const RESERVED_WORD: &str = "obsidian";
const REDUNDANT_SUFFIX: &str = "plugin";
const SELF_REFERENCE: &str = "this plugin";

type FieldValidator = fn(&Manifest, &mut ValidationResult);

/// Validators in execution order; findings are reported in this order.
const VALIDATORS: [(&str, FieldValidator); 7] = [
    ("id", validate_id),
    ("name", validate_name),
    ("description", validate_description),
    ("author", validate_author),
    ("version", validate_version),
    ("urls", validate_urls),
    ("minAppVersion", validate_min_app_version),
];

/// Checks `manifest` against every policy rule.
///
/// The result always reflects a complete run over all validators.
///
/// # Example
///
/// ```
/// use plugin_lint_core::{Manifest, validate};
///
/// let result = validate(&Manifest::default());
/// assert!(!result.is_valid());
/// assert_eq!(result.errors().first().map(String::as_str), Some("Plugin ID is required"));
/// ```
#[must_use]
pub fn validate(manifest: &Manifest) -> ValidationResult {
    let mut result = ValidationResult::default();
    for (field, validator) in VALIDATORS {
        let (errors_before, warnings_before) = (result.errors().len(), result.warnings().len());
        validator(manifest, &mut result);
        debug!(
            field,
            errors = result.errors().len() - errors_before,
            warnings = result.warnings().len() - warnings_before,
            "field validated"
        );
    }
    debug!(
        plugin_id = manifest.id(),
        errors = result.errors().len(),
        warnings = result.warnings().len(),
        valid = result.is_valid(),
        "manifest validated"
    );
    result
}

/// Lowercases one character at a time using the simple mapping, so every
/// input character maps to exactly one output character (`İ` becomes `i`).
fn fold_case(value: &str) -> String {
    value
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

fn contains_ignore_case(value: &str, needle: &str) -> bool {
    fold_case(value).contains(needle)
}

fn ends_with_ignore_case(value: &str, suffix: &str) -> bool {
    fold_case(value).ends_with(suffix)
}

fn validate_id(manifest: &Manifest, result: &mut ValidationResult) {
    let id = manifest.id();
    if id.is_empty() {
        result.push_error("Plugin ID is required");
        return;
    }
    if contains_ignore_case(id, RESERVED_WORD) {
        result.push_error("Plugin ID should not contain the word 'obsidian'");
    }
    if ends_with_ignore_case(id, REDUNDANT_SUFFIX) {
        result.push_error("Plugin ID should not end with 'plugin'");
    }
    if !patterns::is_plugin_id(id) {
        result.push_error(
            "Plugin ID must contain only lowercase alphanumeric characters, dashes, and underscores",
        );
    }
}

fn validate_name(manifest: &Manifest, result: &mut ValidationResult) {
    let name = manifest.name();
    if name.is_empty() {
        result.push_error("Plugin name is required");
        return;
    }
    if contains_ignore_case(name, RESERVED_WORD) {
        result.push_error("Plugin name should not contain the word 'Obsidian'");
    }
    if ends_with_ignore_case(name, REDUNDANT_SUFFIX) {
        result.push_error("Plugin name should not end with 'Plugin'");
    }
}

fn validate_description(manifest: &Manifest, result: &mut ValidationResult) {
    let description = manifest.description();
    if description.is_empty() {
        result.push_error("Description is required");
        return;
    }
    if contains_ignore_case(description, RESERVED_WORD) {
        result.push_error("Description should not contain the word 'Obsidian'");
    }
    if contains_ignore_case(description, SELF_REFERENCE) {
        result.push_warning("Avoid phrases like 'this plugin' in the description");
    }
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_CHARS {
        result.push_error(format!(
            "Description should be under {MAX_DESCRIPTION_CHARS} characters (currently {length})"
        ));
    }
}

fn validate_author(manifest: &Manifest, result: &mut ValidationResult) {
    let author = manifest.author();
    if author.is_empty() {
        result.push_error("Author is required");
        return;
    }
    if patterns::looks_like_email(author) {
        result.push_warning("Email addresses are discouraged in the author field");
    }
}

fn validate_version(manifest: &Manifest, result: &mut ValidationResult) {
    let version = manifest.version();
    if version.is_empty() {
        result.push_error("Version is required");
        return;
    }
    if !patterns::is_dotted_numeric(version) {
        result.push_error("Invalid version number format (should only contain numbers and dots)");
    }
}

fn validate_urls(manifest: &Manifest, result: &mut ValidationResult) {
    if manifest.author_url() == Some(DISALLOWED_AUTHOR_URL) {
        result.push_error("Author URL should not point to Obsidian website");
    }
    if manifest
        .funding_url()
        .is_some_and(|url| !url.is_empty() && url == DISALLOWED_FUNDING_URL)
    {
        result.push_error("Funding URL should not point to Obsidian pricing");
    }
}

fn validate_min_app_version(manifest: &Manifest, result: &mut ValidationResult) {
    let min_app_version = manifest.min_app_version();
    if min_app_version.is_empty() {
        result.push_error("MinAppVersion is required");
        return;
    }
    if !patterns::is_dotted_numeric(min_app_version) {
        result.push_error("Invalid minAppVersion format (should only contain numbers and dots)");
    }
}
