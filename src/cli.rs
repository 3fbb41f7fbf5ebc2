// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::exec::Invocation;
use crate::printer::{PrinterMode, select_printer};
use crate::toolkit::{ReadOptions, ReadReject, RunOptions};

/// Command-line arguments for `workerkit`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "workerkit",
    version,
    about = "Run commands with tagged, timestamped output.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Workerkit.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Tag printed in front of every output line (overrides the config).
    #[arg(long, value_name = "NAME", global = true)]
    pub tag: Option<String>,

    /// Stream command output and print verbose log lines.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WORKERKIT_LOG` or a default level will be used. Named
    /// `--log` because any dash-prefixed word containing `v` selects the
    /// verbose printer.
    #[arg(long = "log", value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Run a command and exit with its exit code.
    Run(RunArgs),
    /// Run a command and print its trimmed output.
    Read(ReadArgs),
    /// Print a tagged log line.
    Log(LogArgs),
    /// Print the selected printer mode.
    Printer,
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Do not fail when the command exits non-zero.
    #[arg(long)]
    pub no_reject: bool,

    /// Do not timestamp streamed output.
    #[arg(long)]
    pub no_timestamp: bool,

    /// Working directory for the command.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// A single command line, or a program followed by its arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ReadArgs {
    /// When to fail: on exit status and stderr (true), never (false), on exit
    /// status only (status) or on stderr output only (stderr).
    #[arg(long, value_enum, value_name = "MODE")]
    pub reject: Option<RejectArg>,

    /// Working directory for the command.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// A single command line, or a program followed by its arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Write to stderr.
    #[arg(long, conflicts_with = "debug_only")]
    pub error: bool,

    /// Write to stderr only in verbose mode.
    #[arg(long)]
    pub debug_only: bool,

    #[arg(required = true)]
    pub message: Vec<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RejectArg {
    True,
    False,
    Status,
    Stderr,
}

impl From<RejectArg> for ReadReject {
    fn from(arg: RejectArg) -> Self {
        match arg {
            RejectArg::True => ReadReject::Always,
            RejectArg::False => ReadReject::Never,
            RejectArg::Status => ReadReject::Status,
            RejectArg::Stderr => ReadReject::Stderr,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// One word is a command line; more words are a program plus arguments.
pub fn invocation_from_words(words: &[String]) -> Invocation {
    match words {
        [line] => Invocation::line(line.as_str()),
        [file, args @ ..] => Invocation::program(file.as_str(), args.iter().cloned()),
        [] => Invocation::line(""),
    }
}

impl RunArgs {
    /// Apply the flags on top of the configured defaults.
    pub fn options(&self, defaults: &RunOptions) -> RunOptions {
        let mut options = defaults.clone();
        if self.no_reject {
            options.reject = false;
        }
        if self.no_timestamp {
            options.timestamp = false;
        }
        if let Some(cwd) = &self.cwd {
            options.cwd = Some(cwd.clone());
        }
        options
    }
}

impl ReadArgs {
    pub fn options(&self, defaults: &ReadOptions) -> ReadOptions {
        let mut options = defaults.clone();
        if let Some(reject) = self.reject {
            options.reject = reject.into();
        }
        if let Some(cwd) = &self.cwd {
            options.cwd = Some(cwd.clone());
        }
        options
    }
}

/// The arguments the printer mode is selected from: everything before a
/// `--` separator, so flags meant for the child command do not count.
pub fn printer_args(argv: &[String]) -> &[String] {
    let end = argv.iter().position(|a| a == "--").unwrap_or(argv.len());
    &argv[..end]
}

/// Printer mode for this invocation.
///
/// A parsed `-v`/`--verbose` and the configured force flag both win over the
/// argument scan.
pub fn printer_mode(args: &CliArgs, argv: &[String], force_verbose: bool) -> PrinterMode {
    select_printer(printer_args(argv), force_verbose || args.verbose)
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
