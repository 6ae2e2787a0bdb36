// SPDX-FileCopyrightText: 2021-2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::{path::PathBuf, sync::LazyLock};

use clap::{Arg, ArgAction, Command, ValueHint, command, crate_name, value_parser};
use cli_utils::logging;
use const_format::formatcp;
use describable::{
    constants::{DEFAULT_FILL, DEFAULT_INDENT_WIDTH},
    options::{IndentOptions, LineStart, RelayOptions},
    relay::Source,
};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

pub const A_L_FILL: &str = "fill";
pub const A_L_FRESH_LINE: &str = "fresh-line";
pub const A_S_FRESH_LINE: char = 'F';
pub const A_L_INDENTATION: &str = "indentation";
pub const A_S_INDENTATION: char = 'i';
pub const A_L_LEVELS: &str = "levels";
pub const A_S_LEVELS: char = 'l';
pub const A_L_QUIET: &str = "quiet";
pub const A_S_QUIET: char = 'q';
pub const A_L_VERBOSE: &str = "verbose";
pub const A_S_VERBOSE: char = 'v';
pub const A_L_VERSION: &str = "version";
pub const A_S_VERSION: char = 'V';
pub const A_L_SRC: &str = "src";

pub const DEFAULT_LEVELS: usize = 1;
static DEFAULT_INDENTATION_STR: LazyLock<String> =
    LazyLock::new(|| DEFAULT_INDENT_WIDTH.to_string());
static DEFAULT_LEVELS_STR: LazyLock<String> = LazyLock::new(|| DEFAULT_LEVELS.to_string());
static DEFAULT_FILL_STR: LazyLock<String> = LazyLock::new(|| DEFAULT_FILL.to_string());

fn arg_fill() -> Arg {
    Arg::new(A_L_FILL)
        .help("The character to indent with")
        .num_args(1)
        .long(A_L_FILL)
        .action(ArgAction::Set)
        .value_name("CHAR")
        .value_parser(value_parser!(char))
        .default_value(DEFAULT_FILL_STR.as_str())
}

fn arg_fresh_line() -> Arg {
    Arg::new(A_L_FRESH_LINE)
        .help("Indent the first line too")
        .long_help(
            "Indent the first line too. \
By default, the output is treated as continuing a line \
that is already in progress, \
so only the lines following the first line break get indented.",
        )
        .action(ArgAction::SetTrue)
        .short(A_S_FRESH_LINE)
        .long(A_L_FRESH_LINE)
}

fn arg_indentation() -> Arg {
    Arg::new(A_L_INDENTATION)
        .help("Number of fill characters per level of indentation")
        .num_args(1)
        .short(A_S_INDENTATION)
        .long(A_L_INDENTATION)
        .action(ArgAction::Set)
        .value_name("NUM")
        .value_parser(value_parser!(u8))
        .default_value(DEFAULT_INDENTATION_STR.as_str())
}

fn arg_levels() -> Arg {
    Arg::new(A_L_LEVELS)
        .help("Number of nested levels of indentation")
        .num_args(1)
        .short(A_S_LEVELS)
        .long(A_L_LEVELS)
        .action(ArgAction::Set)
        .value_name("NUM")
        .value_parser(value_parser!(u8))
        .default_value(DEFAULT_LEVELS_STR.as_str())
}

fn arg_quiet() -> Arg {
    Arg::new(A_L_QUIET)
        .help("Minimize or suppress output to stdout")
        .long_help("Minimize or suppress output to stdout, and only shows log output on stderr.")
        .action(ArgAction::SetTrue)
        .short(A_S_QUIET)
        .long(A_L_QUIET)
        .conflicts_with(A_L_VERBOSE)
}

fn arg_verbose() -> Arg {
    Arg::new(A_L_VERBOSE)
        .help("more verbose output (useful for debugging)")
        .short(A_S_VERBOSE)
        .long(A_L_VERBOSE)
        .action(ArgAction::SetTrue)
}

fn arg_version() -> Arg {
    Arg::new(A_L_VERSION)
        .help(formatcp!(
            "Print version information and exit. \
May be combined with -{A_S_QUIET},--{A_L_QUIET}, \
to really only output the version string."
        ))
        .short(A_S_VERSION)
        .long(A_L_VERSION)
        .action(ArgAction::SetTrue)
}

fn arg_src() -> Arg {
    Arg::new(A_L_SRC)
        .help("Text file(s) to indent; '-' for stdin")
        .num_args(1..)
        .value_name("FILE")
        .value_hint(ValueHint::FilePath)
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Set)
        .default_value("-")
}

fn args_matcher() -> Command {
    command!()
        .about("Indents text by nested levels")
        .long_about(
            "Copies text from the given files (or stdin) to stdout, \
indenting every non-empty line by the given number of nested levels. \
Empty lines are left empty, \
so no trailing whitespace gets introduced.",
        )
        .bin_name(clap::crate_name!())
        .help_expected(true)
        .disable_version_flag(true)
        .arg(arg_fill())
        .arg(arg_fresh_line())
        .arg(arg_indentation())
        .arg(arg_levels())
        .arg(arg_quiet())
        .arg(arg_verbose())
        .arg(arg_version())
        .arg(arg_src())
}

#[allow(clippy::print_stdout)]
fn print_version_and_exit(quiet: bool) {
    if !quiet {
        print!("{} ", clap::crate_name!());
    }
    println!("{}", describable::VERSION);
    std::process::exit(0);
}

#[derive(Error, Debug)]
pub enum InitError {
    #[error("Failed to init logging system: {0}")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),

    #[error("Failed to change the logging level: {0}")]
    LogChangeLevel(#[from] tracing_subscriber::reload::Error),
}

pub fn init() -> Result<(RelayOptions, Vec<Source>), InitError> {
    let log_reload_handle = logging::setup(crate_name!())?;
    let args = args_matcher().get_matches();

    let quiet = args.get_flag(A_L_QUIET);
    let version = args.get_flag(A_L_VERSION);
    if version {
        print_version_and_exit(quiet);
    }

    let verbose = args.get_flag(A_L_VERBOSE);
    let log_level = if verbose {
        LevelFilter::TRACE
    } else if quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    logging::set_log_level_tracing(&log_reload_handle, log_level)?;

    let width = args
        .get_one::<u8>(A_L_INDENTATION)
        .copied()
        .map_or(DEFAULT_INDENT_WIDTH, usize::from);
    let levels = args
        .get_one::<u8>(A_L_LEVELS)
        .copied()
        .map_or(DEFAULT_LEVELS, usize::from);
    let fill = args
        .get_one::<char>(A_L_FILL)
        .copied()
        .unwrap_or(DEFAULT_FILL);
    let line_start = if args.get_flag(A_L_FRESH_LINE) {
        LineStart::Fresh
    } else {
        LineStart::Continue
    };

    let src: Vec<Source> = args
        .get_many::<PathBuf>(A_L_SRC)
        .map(|paths| paths.cloned().map(Source::from_arg).collect())
        .unwrap_or_else(|| vec![Source::Stdin]);
    tracing::debug!("Indenting {} source(s) by {levels} x {width}", src.len());

    Ok((
        RelayOptions {
            levels,
            indent: IndentOptions::new(width)
                .with_fill(fill)
                .with_line_start(line_start),
        },
        src,
    ))
}
