// src/exec/invocation.rs

//! The two ways a command can be specified.

use std::fmt;

use crate::errors::{Result, ToolkitError};

/// A command to execute.
///
/// - `Line("git status --short")` is split into program and arguments on
///   whitespace. A backslash keeps the next whitespace character literal.
///   No shell is involved.
/// - `Program { file, args }` is passed to the OS as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Line(String),
    Program { file: String, args: Vec<String> },
}

impl Invocation {
    pub fn line(line: impl Into<String>) -> Self {
        Invocation::Line(line.into())
    }

    pub fn program<I, S>(file: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::Program {
            file: file.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve to `(program, arguments)`.
    pub fn argv(&self) -> Result<(String, Vec<String>)> {
        match self {
            Invocation::Line(line) => {
                let mut words = split_command_line(line).into_iter();
                let program = words.next().ok_or(ToolkitError::EmptyCommand)?;
                Ok((program, words.collect()))
            }
            Invocation::Program { file, args } => {
                if file.is_empty() {
                    return Err(ToolkitError::EmptyCommand);
                }
                Ok((file.clone(), args.clone()))
            }
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invocation::Line(line) => f.write_str(line),
            Invocation::Program { file, args } => {
                f.write_str(file)?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Invocation {
    fn from(line: &str) -> Self {
        Invocation::Line(line.to_string())
    }
}

impl From<String> for Invocation {
    fn from(line: String) -> Self {
        Invocation::Line(line)
    }
}

impl From<&String> for Invocation {
    fn from(line: &String) -> Self {
        Invocation::Line(line.clone())
    }
}

fn split_command_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next) if next.is_whitespace() => current.push(next),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            },
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
