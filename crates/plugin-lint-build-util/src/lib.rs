//! Build-time utilities for the validator's build script.
//!
//! The CLI build script renders a manual page; these helpers keep the page
//! reproducible and place it where packagers expect it.

use std::{
    fs, io,
    path::{Path, PathBuf},
};
use time::{OffsetDateTime, format_description::well_known::Iso8601};

const FALLBACK_DATE: &str = "1970-01-01";

enum SourceDateError {
    Missing,
    InvalidInteger { raw: String },
    InvalidTimestamp { raw: String },
}

/// Derives the manual page date from a `SOURCE_DATE_EPOCH` value.
///
/// Falls back to `1970-01-01` so builds stay reproducible. Warnings are
/// collected without the `cargo:warning=` prefix so the caller decides how
/// to emit them.
///
/// # Examples
/// ```
/// use plugin_lint_build_util::manual_date;
///
/// let mut warnings = Vec::new();
/// assert_eq!(manual_date(Some("86400"), &mut warnings), "1970-01-02");
/// assert_eq!(manual_date(None, &mut warnings), "1970-01-01");
/// assert!(warnings.is_empty());
/// ```
pub fn manual_date(source_date_epoch: Option<&str>, warnings: &mut Vec<String>) -> String {
    let value = match parse_source_date(source_date_epoch) {
        Ok(value) => value,
        Err(error) => {
            push_source_date_warning(warnings, &error);
            return FALLBACK_DATE.into();
        }
    };

    value.format(&Iso8601::DATE).unwrap_or_else(|_| {
        warnings.push(format!(
            "SOURCE_DATE_EPOCH could not be formatted; falling back to {FALLBACK_DATE}"
        ));
        FALLBACK_DATE.into()
    })
}

/// Reads `SOURCE_DATE_EPOCH` from the environment and derives the date.
pub fn manual_date_from_env(warnings: &mut Vec<String>) -> String {
    let raw = std::env::var("SOURCE_DATE_EPOCH").ok();
    manual_date(raw.as_deref(), warnings)
}

fn parse_source_date(raw: Option<&str>) -> Result<OffsetDateTime, SourceDateError> {
    let Some(raw) = raw else {
        return Err(SourceDateError::Missing);
    };

    let Ok(timestamp) = raw.parse::<i64>() else {
        return Err(SourceDateError::InvalidInteger { raw: raw.into() });
    };

    OffsetDateTime::from_unix_timestamp(timestamp)
        .map_err(|_| SourceDateError::InvalidTimestamp { raw: raw.into() })
}

fn push_source_date_warning(warnings: &mut Vec<String>, error: &SourceDateError) {
    match error {
        SourceDateError::Missing => {}
        SourceDateError::InvalidInteger { raw } => warnings.push(format!(
            "Invalid SOURCE_DATE_EPOCH '{raw}'; expected integer seconds since Unix epoch; \
             falling back to {FALLBACK_DATE}"
        )),
        SourceDateError::InvalidTimestamp { raw } => warnings.push(format!(
            "Invalid SOURCE_DATE_EPOCH '{raw}'; not a valid Unix timestamp; falling back to \
             {FALLBACK_DATE}"
        )),
    }
}

/// Finds the workspace `target` directory above a build script's `OUT_DIR`.
///
/// `OUT_DIR` is `{workspace}/target/{profile}/build/{crate}-{hash}/out` for
/// native builds and has an extra `{target}` component when cross-compiling.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use plugin_lint_build_util::workspace_target_dir;
///
/// let out = Path::new("/ws/target/release/build/plugin-lint-cli-abc123/out");
/// assert_eq!(workspace_target_dir(out).as_deref(), Some(Path::new("/ws/target")));
/// ```
#[must_use]
pub fn workspace_target_dir(out_dir: &Path) -> Option<PathBuf> {
    out_dir
        .ancestors()
        .find(|dir| dir.file_name().and_then(|name| name.to_str()) == Some("target"))
        .map(Path::to_path_buf)
}

/// Computes `target/generated-man/<target>/<profile>` for the manual page.
///
/// Uses the workspace target directory when `out_dir` is known, otherwise a
/// relative `target` directory.
#[must_use]
pub fn out_dir_for_target_profile(target: &str, profile: &str, out_dir: Option<&Path>) -> PathBuf {
    let base = out_dir
        .and_then(workspace_target_dir)
        .unwrap_or_else(|| PathBuf::from("target"));
    base.join("generated-man").join(target).join(profile)
}

/// Writes a man page into `dir`, replacing any previous copy atomically.
///
/// # Errors
///
/// Returns any I/O error raised while creating the directory or writing the
/// file.
pub fn write_man_page(data: &[u8], dir: &Path, page_name: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let destination = dir.join(page_name);
    let tmp = dir.join(format!("{page_name}.tmp"));
    fs::write(&tmp, data)?;
    fs::rename(&tmp, &destination)?;
    Ok(destination)
}
