//! Command-line runtime for the plugin manifest validator.
//!
//! The module owns argument parsing, telemetry bootstrapping, manifest
//! loading, and report rendering. The interface is designed to be exercised
//! both from the binary entrypoint and from tests, where the manifest source
//! and IO streams can be substituted.
//!
//! Exit status is success only when the manifest was loaded and produced no
//! errors. Read and decode failures are fatal: they are reported on stderr
//! and the policy checks never run.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::FromArgMatches;
use clap::error::ErrorKind;
use plugin_lint_core::validate;
use tracing::{debug, info};

mod args;
mod cli;
mod errors;
pub mod output;
mod source;
mod telemetry;

use cli::Cli;
pub(crate) use errors::AppError;
pub use output::{JsonReport, OutputFormat, ReportError, write_report};
use source::{FsManifestSource, ManifestSource};
pub use telemetry::TelemetryError;

/// Banner printed ahead of a text report unless `--quiet` is given.
const BANNER_PREFIX: &str = "📝 Validating manifest for plugin: ";

/// Product name shown by `--version`.
pub(crate) const PRODUCT_NAME: &str = "Obsidian Plugin Manifest Validator";

struct CliRunner<'a, W: Write, E: Write, S: ManifestSource> {
    stdout: &'a mut W,
    stderr: &'a mut E,
    source: &'a S,
}

impl<'a, W, E, S> CliRunner<'a, W, E, S>
where
    W: Write,
    E: Write,
    S: ManifestSource,
{
    fn new(stdout: &'a mut W, stderr: &'a mut E, source: &'a S) -> Self {
        Self {
            stdout,
            stderr,
            source,
        }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        match self.try_run(args) {
            Ok(exit_code) => exit_code,
            Err(AppError::CliUsage(error)) if is_informational(&error) => {
                match write!(self.stdout, "{}", error.render()) {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(_) => ExitCode::FAILURE,
                }
            }
            Err(error) => {
                if writeln!(self.stderr, "{error}").is_err() {
                    debug!(%error, "stderr unavailable while reporting failure");
                }
                ExitCode::FAILURE
            }
        }
    }

    fn try_run<I>(&mut self, args: I) -> Result<ExitCode, AppError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let command = args::command();
        let args = args::normalise_long_flags(&command, args);
        let matches = command
            .try_get_matches_from(args)
            .map_err(AppError::CliUsage)?;
        let cli = Cli::from_arg_matches(&matches).map_err(AppError::CliUsage)?;

        telemetry::initialise(&cli.config)?;

        let path = self.source.resolve(&cli.manifest)?;
        info!(path = %path.display(), "loading manifest");
        let manifest = self.source.load(&path).inspect_err(|error| {
            debug!(path = %error.path().display(), "manifest could not be loaded");
        })?;
        debug!(plugin_id = manifest.id(), "manifest decoded");

        let format = OutputFormat::from_json_flag(cli.json);
        if format == OutputFormat::Text && !cli.quiet {
            writeln!(self.stdout, "{BANNER_PREFIX}{}", manifest.name())
                .map_err(AppError::WriteReport)?;
        }

        let result = validate(&manifest);
        write_report(self.stdout, &result, format)?;

        if result.is_valid() {
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::FAILURE)
        }
    }
}

fn is_informational(error: &clap::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    run_with_source(args, stdout, stderr, &FsManifestSource)
}

/// Runs the CLI with a custom manifest source.
pub(crate) fn run_with_source<I, W, E, S>(
    args: I,
    stdout: &mut W,
    stderr: &mut E,
    source: &S,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    S: ManifestSource,
{
    CliRunner::new(stdout, stderr, source).run(args)
}

#[cfg(test)]
mod tests;
