//! CLI entrypoint for the plugin manifest validator.
//!
//! The binary delegates to [`plugin_lint_cli::run`], which parses arguments,
//! loads the manifest, runs the policy checks, and renders the report.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    plugin_lint_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
