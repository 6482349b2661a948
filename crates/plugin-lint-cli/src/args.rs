//! Command construction and argument preparation ahead of clap parsing.

use std::collections::HashSet;
use std::ffi::OsString;

use clap::{Arg, Command, CommandFactory};

use crate::PRODUCT_NAME;
use crate::cli::Cli;

/// Builds the runtime parser. The display name is what `--version` prints.
pub(crate) fn command() -> Command {
    let mut command = Cli::command().display_name(PRODUCT_NAME);
    command.build();
    command
}

/// Rewrites single-dash long flags such as `-manifest` or `-json` into
/// their double-dash form.
///
/// Only names of long flags the command defines are rewritten, so short
/// flags (`-q`, `-V`) and values are left alone. Everything after a `--`
/// terminator is passed through untouched.
pub(crate) fn normalise_long_flags<I>(command: &Command, args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let longs: HashSet<&str> = command.get_arguments().filter_map(Arg::get_long).collect();
    let mut terminated = false;
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || terminated {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                terminated = true;
                return arg;
            }
            let Some(body) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
                return arg;
            };
            let name = body.split_once('=').map_or(body, |(name, _)| name);
            if name.len() > 1 && longs.contains(name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}
