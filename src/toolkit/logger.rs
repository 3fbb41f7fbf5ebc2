// src/toolkit/logger.rs

//! Tag-decorated logging on behalf of a worker.

use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::Arc;

use tracing::debug;

use crate::decorate::{Decoration, decorate_lines};
use crate::streams::{OutputStream, Streams};
use crate::worker::{TagStyle, Worker};

/// One argument of a log call.
///
/// Strings are printed verbatim; anything else is rendered with `Debug`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogArg<'a>(Cow<'a, str>);

impl LogArg<'static> {
    /// Render any value with its `Debug` representation.
    pub fn inspect<T: Debug + ?Sized>(value: &T) -> Self {
        LogArg(Cow::Owned(format!("{value:?}")))
    }
}

impl LogArg<'_> {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'a> From<&'a str> for LogArg<'a> {
    fn from(s: &'a str) -> Self {
        LogArg(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for LogArg<'a> {
    fn from(s: &'a String) -> Self {
        LogArg(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for LogArg<'static> {
    fn from(s: String) -> Self {
        LogArg(Cow::Owned(s))
    }
}

macro_rules! inspect_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LogArg<'static> {
                fn from(value: $t) -> Self {
                    LogArg::inspect(&value)
                }
            }
        )*
    };
}

inspect_from!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Logging surface of a [`super::Toolkit`].
#[derive(Clone)]
pub struct Logger {
    worker: Arc<dyn Worker>,
    streams: Streams,
}

impl Logger {
    pub(crate) fn new(worker: Arc<dyn Worker>, streams: Streams) -> Self {
        Self { worker, streams }
    }

    /// Log to stdout.
    pub fn out(&self, args: &[LogArg<'_>]) {
        self.print(&self.streams.stdout, args);
    }

    /// Log to stderr.
    pub fn error(&self, args: &[LogArg<'_>]) {
        self.print(&self.streams.stderr, args);
    }

    /// Log to stderr, only when the worker is verbose.
    pub fn verbose(&self, args: &[LogArg<'_>]) {
        if self.worker.is_verbose() {
            self.print(&self.streams.stderr, args);
        }
    }

    fn print(&self, target: &OutputStream, args: &[LogArg<'_>]) {
        let mut text = args
            .iter()
            .map(|arg| arg.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        text.push('\n');

        let tag = self.worker.tag(TagStyle::for_terminal(target.is_colored()));
        let decoration = Decoration::new(tag, self.worker.timestamp());
        if let Err(err) = decorate_lines(&decoration, &text, target) {
            debug!(error = %err, "dropping log line");
        }
    }
}

/// Log the arguments to the toolkit's stdout stream.
///
/// ```ignore
/// log_out!(toolkit.log(), "built", count, "targets");
/// ```
#[macro_export]
macro_rules! log_out {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.out(&[$($crate::LogArg::from($arg)),*])
    };
}

/// Log the arguments to the toolkit's stderr stream.
#[macro_export]
macro_rules! log_err {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(&[$($crate::LogArg::from($arg)),*])
    };
}

/// Log the arguments to stderr when the worker is verbose.
#[macro_export]
macro_rules! log_verbose {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.verbose(&[$($crate::LogArg::from($arg)),*])
    };
}
