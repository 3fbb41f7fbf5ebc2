// src/worker.rs

//! Worker capability interface.
//!
//! A worker is the scheduler's per-task context. The toolkit never creates or
//! drives one; it only asks for the tag, the printer mode, and forwards a
//! status line before running a command.

use std::sync::Mutex;

use colored::{Color, Colorize};
use tracing::info;

use crate::printer::PrinterMode;

/// Whether a tag may carry ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    Plain,
    Colored,
}

impl TagStyle {
    pub fn for_terminal(colored: bool) -> Self {
        if colored {
            TagStyle::Colored
        } else {
            TagStyle::Plain
        }
    }
}

/// Minimal set of worker methods the toolkit relies on.
pub trait Worker: Send + Sync {
    /// Tag identifying this worker in decorated output.
    fn tag(&self, style: TagStyle) -> String;

    fn printer(&self) -> PrinterMode;

    /// Human-readable status, e.g. the command about to run.
    fn report_status(&self, status: &str);

    /// Whether log lines carry a timestamp.
    fn timestamp(&self) -> bool {
        true
    }

    fn is_verbose(&self) -> bool {
        self.printer().is_verbose()
    }
}

/// Mark a tag as belonging to stderr output.
///
/// The `E` marker goes right before a trailing `@suffix` when there is one
/// (`build@2` becomes `buildE@2`), otherwise in front of the tag.
pub fn error_tag(tag: &str) -> String {
    match tag.rfind('@') {
        Some(at) if at > 0 => format!("{}E{}", &tag[..at], &tag[at..]),
        _ => format!("E{tag}"),
    }
}

/// A worker with a fixed tag, used when running outside a scheduler.
#[derive(Debug)]
pub struct StaticWorker {
    name: String,
    color: Option<Color>,
    printer: PrinterMode,
    timestamp: bool,
    last_status: Mutex<Option<String>>,
}

impl StaticWorker {
    pub fn new(name: impl Into<String>, printer: PrinterMode) -> Self {
        Self {
            name: name.into(),
            color: None,
            printer,
            timestamp: true,
            last_status: Mutex::new(None),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Most recent status passed to [`Worker::report_status`].
    pub fn last_status(&self) -> Option<String> {
        self.last_status
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Worker for StaticWorker {
    fn tag(&self, style: TagStyle) -> String {
        match (style, self.color) {
            (TagStyle::Colored, Some(color)) => self.name.as_str().color(color).to_string(),
            _ => self.name.clone(),
        }
    }

    fn printer(&self) -> PrinterMode {
        self.printer
    }

    fn report_status(&self, status: &str) {
        info!(worker = %self.name, status, "worker status");
        if let Ok(mut guard) = self.last_status.lock() {
            *guard = Some(status.to_string());
        }
    }

    fn timestamp(&self) -> bool {
        self.timestamp
    }
}
