//! Community policy checks for Obsidian plugin manifests.
//!
//! The `plugin-lint-core` crate implements the rule engine behind the
//! `validate-plugin-manifest` binary. A [`Manifest`] is decoded once from a
//! `manifest.json` document and handed to [`validate`], which runs a fixed,
//! ordered set of field validators and returns a [`ValidationResult`]
//! holding two ordered lists of findings: blocking errors and advisory
//! warnings.
//!
//! # Architecture
//!
//! Validation is a single pure pass. Each field validator receives the whole
//! manifest and appends to a result accumulator owned by the call; no
//! validator observes another's findings. The compiled match patterns used
//! by the validators are shared, read-only process state, so the engine may
//! be called from several threads at once without coordination.
//!
//! # Example
//!
//! ```rust
//! use plugin_lint_core::{Manifest, validate};
//!
//! let manifest = Manifest::default()
//!     .with_id("daily-notes-extra")
//!     .with_name("Daily Notes Extra")
//!     .with_description("Adds templates to daily notes.")
//!     .with_author("Jo Doe")
//!     .with_version("1.2.0")
//!     .with_min_app_version("0.15.0");
//!
//! let result = validate(&manifest);
//! assert!(result.is_valid());
//! assert!(result.warnings().is_empty());
//! ```

pub mod error;
pub mod manifest;
pub mod result;
pub mod rules;

#[cfg(test)]
mod tests;

pub use self::error::ManifestError;
pub use self::manifest::Manifest;
pub use self::result::{Severity, ValidationResult};
pub use self::rules::validate;
