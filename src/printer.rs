// src/printer.rs

//! Printer mode selection.
//!
//! The printer mode decides whether a worker streams command output and
//! verbose log lines. It is picked once from the command-line arguments.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Output mode of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrinterMode {
    /// Stream command output and print verbose log lines.
    Verbose,
    /// Default, non-verbose mode.
    #[default]
    Vivid,
}

impl PrinterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrinterMode::Verbose => "verbose",
            PrinterMode::Vivid => "vivid",
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, PrinterMode::Verbose)
    }
}

impl fmt::Display for PrinterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrinterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "verbose" => Ok(PrinterMode::Verbose),
            "vivid" => Ok(PrinterMode::Vivid),
            other => Err(format!(
                "invalid printer mode: {other} (expected \"verbose\" or \"vivid\")"
            )),
        }
    }
}

/// `--verbose`, or any dash-prefixed argument containing a `v`.
static VERBOSITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-(-verbose|.*v.*)$").expect("verbosity pattern compiles"));

/// Pick the printer mode for a list of command-line arguments.
///
/// `force_verbose` wins over the arguments.
pub fn select_printer<S: AsRef<str>>(args: &[S], force_verbose: bool) -> PrinterMode {
    let verbose = force_verbose || args.iter().any(|arg| VERBOSITY.is_match(arg.as_ref()));
    if verbose {
        PrinterMode::Verbose
    } else {
        PrinterMode::Vivid
    }
}
