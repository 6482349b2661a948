//! CLI argument definitions for the manifest validator.
//!
//! This module defines the command-line interface structure used by
//! both the runtime parser and the build script for manpage generation.

use std::path::PathBuf;

use clap::Parser;
use plugin_lint_config::Config;

/// Default manifest location, resolved against the working directory.
pub(crate) const DEFAULT_MANIFEST_PATH: &str = "manifest.json";

/// Validates an Obsidian plugin manifest against community policy.
#[derive(Parser, Debug)]
#[command(
    name = "validate-plugin-manifest",
    version = concat!("v", env!("CARGO_PKG_VERSION"))
)]
pub(crate) struct Cli {
    /// Path to manifest.json file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MANIFEST_PATH)]
    pub(crate) manifest: PathBuf,
    /// Output results in JSON format.
    #[arg(long)]
    pub(crate) json: bool,
    /// Suppress informational output (only shows errors/warnings).
    #[arg(long, short)]
    pub(crate) quiet: bool,
    /// Diagnostic logging settings.
    #[command(flatten)]
    pub(crate) config: Config,
}
