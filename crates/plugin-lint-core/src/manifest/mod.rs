//! The manifest record under validation and its JSON decoder.
//!
//! A [`Manifest`] mirrors the `manifest.json` file shipped with every
//! Obsidian community plugin. Decoding is lenient about absent keys and
//! `null` values, which both fall back to the zero value so the rule engine
//! can report them as missing fields. Unknown keys are ignored. Anything
//! other than a JSON object is rejected.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ManifestError;
use crate::result::ValidationResult;

/// Decoded contents of a plugin's `manifest.json`.
///
/// Manifests are built either by [`Manifest::load`] or through the `with_*`
/// builder methods, and are not mutated once built.
///
/// # Example
///
/// ```
/// use plugin_lint_core::Manifest;
///
/// let manifest = Manifest::from_json_slice(
///     br#"{"id": "quick-switcher-plus", "name": "Quick Switcher Plus", "isDesktopOnly": true}"#,
/// )
/// .expect("decode");
///
/// assert_eq!(manifest.id(), "quick-switcher-plus");
/// assert!(manifest.is_desktop_only());
/// assert_eq!(manifest.author_url(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Manifest {
    #[serde(deserialize_with = "null_as_default")]
    id: String,
    #[serde(deserialize_with = "null_as_default")]
    name: String,
    #[serde(deserialize_with = "null_as_default")]
    description: String,
    #[serde(deserialize_with = "null_as_default")]
    author: String,
    #[serde(deserialize_with = "null_as_default")]
    version: String,
    #[serde(deserialize_with = "null_as_default")]
    min_app_version: String,
    #[serde(deserialize_with = "null_as_default")]
    is_desktop_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    funding_url: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Manifest {
    /// Reads and decodes the manifest stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Read`] if the file cannot be read and
    /// [`ManifestError::Parse`] if its contents are not a JSON object with
    /// correctly typed fields.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source: Arc::new(source),
        })?;
        Self::from_json_slice(&bytes).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Decodes a manifest from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the bytes are not
    /// valid JSON, the document is not an object, or a field has the wrong
    /// type.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "manifest must be a JSON object",
            ));
        }
        serde_json::from_value(value)
    }

    /// Runs the community policy rules against this manifest.
    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        crate::rules::validate(self)
    }

    /// Sets the plugin identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the user-facing description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the plugin release version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the minimum supported app version.
    #[must_use]
    pub fn with_min_app_version(mut self, min_app_version: impl Into<String>) -> Self {
        self.min_app_version = min_app_version.into();
        self
    }

    /// Marks the plugin as desktop-only.
    #[must_use]
    pub const fn with_desktop_only(mut self, is_desktop_only: bool) -> Self {
        self.is_desktop_only = is_desktop_only;
        self
    }

    /// Sets the author homepage.
    #[must_use]
    pub fn with_author_url(mut self, author_url: impl Into<String>) -> Self {
        self.author_url = Some(author_url.into());
        self
    }

    /// Sets the funding link.
    #[must_use]
    pub fn with_funding_url(mut self, funding_url: impl Into<String>) -> Self {
        self.funding_url = Some(funding_url.into());
        self
    }

    /// Returns the plugin identifier.
    #[must_use]
    pub const fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the description.
    #[must_use]
    pub const fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the author.
    #[must_use]
    pub const fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Returns the plugin release version.
    #[must_use]
    pub const fn version(&self) -> &str {
        self.version.as_str()
    }

    /// Returns the minimum supported app version.
    #[must_use]
    pub const fn min_app_version(&self) -> &str {
        self.min_app_version.as_str()
    }

    /// Returns whether the plugin only runs on desktop.
    #[must_use]
    pub const fn is_desktop_only(&self) -> bool {
        self.is_desktop_only
    }

    /// Returns the author homepage, if declared.
    #[must_use]
    pub fn author_url(&self) -> Option<&str> {
        self.author_url.as_deref()
    }

    /// Returns the funding link, if declared.
    #[must_use]
    pub fn funding_url(&self) -> Option<&str> {
        self.funding_url.as_deref()
    }
}
