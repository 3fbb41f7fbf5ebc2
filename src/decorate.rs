// src/decorate.rs

//! Line decoration.
//!
//! Every line a worker prints is prefixed with `[tag]` and, optionally, a
//! local timestamp:
//!
//! ```text
//! [build] 14:03:27.512 Compiling workerkit v0.1.0
//! ```
//!
//! Empty lines are skipped, so a blank chunk never produces a bare prefix.

use std::io;
use std::sync::Arc;

use chrono::Local;

use crate::streams::OutputStream;

const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// How lines are prefixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub tag: String,
    pub timestamp: bool,
}

impl Decoration {
    pub fn new(tag: impl Into<String>, timestamp: bool) -> Self {
        Self {
            tag: tag.into(),
            timestamp,
        }
    }

    /// Decorate a single line (without its terminator).
    ///
    /// Returns `None` for an empty line.
    pub fn decorate_line(&self, line: &str) -> Option<String> {
        if line.is_empty() {
            return None;
        }
        if self.timestamp {
            let now = Local::now().format(TIMESTAMP_FORMAT);
            Some(format!("[{}] {} {}", self.tag, now, line))
        } else {
            Some(format!("[{}] {}", self.tag, line))
        }
    }
}

/// Decorate every non-empty line of `text` and write them to `target`.
///
/// The lines are written as one block. A trailing line without a newline is
/// still decorated and gets terminated. Returns the number of lines written.
pub fn decorate_lines(decoration: &Decoration, text: &str, target: &OutputStream) -> io::Result<usize> {
    let mut block = String::new();
    let mut count = 0;

    for line in text.lines() {
        if let Some(decorated) = decoration.decorate_line(line) {
            block.push_str(&decorated);
            block.push('\n');
            count += 1;
        }
    }

    if count > 0 {
        target.write_all(block.as_bytes())?;
    }
    Ok(count)
}

/// Line-at-a-time decorator bound to an output stream.
///
/// Used to forward subprocess output while it is being produced.
#[derive(Debug, Clone)]
pub struct DecoratedSink {
    decoration: Arc<Decoration>,
    target: OutputStream,
}

impl DecoratedSink {
    pub fn new(decoration: Decoration, target: OutputStream) -> Self {
        Self {
            decoration: Arc::new(decoration),
            target,
        }
    }

    pub fn decoration(&self) -> &Decoration {
        &self.decoration
    }

    /// Write one line; a trailing `\n` or `\r\n` is ignored.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        match self.decoration.decorate_line(line) {
            Some(mut decorated) => {
                decorated.push('\n');
                self.target.write_all(decorated.as_bytes())
            }
            None => Ok(()),
        }
    }
}
