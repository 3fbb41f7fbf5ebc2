// src/toolkit/mod.rs

//! The toolkit attached to a worker: `log`, `run` and `read`.
//!
//! - [`logger`] holds the tag-decorated logging surface.
//! - [`options`] holds `RunOptions` / `ReadOptions` and the read plan.

pub mod logger;
pub mod options;

use std::sync::Arc;

use tracing::debug;

use crate::decorate::{DecoratedSink, Decoration};
use crate::errors::{Result, ToolkitError};
use crate::exec::{ExecRequest, ExecutorBackend, Invocation, RealExecutorBackend, Tee, execute};
use crate::streams::Streams;
use crate::worker::{TagStyle, Worker, error_tag};

pub use logger::{LogArg, Logger};
pub use options::{ReadOptions, ReadPlan, ReadReject, RunOptions};

/// Attach a toolkit to `worker`, running commands as real processes.
pub fn attach(worker: Arc<dyn Worker>, streams: Streams) -> Toolkit {
    attach_with_backend(worker, streams, Arc::new(RealExecutorBackend::new()))
}

/// Attach a toolkit to `worker` using a custom executor backend.
pub fn attach_with_backend(
    worker: Arc<dyn Worker>,
    streams: Streams,
    backend: Arc<dyn ExecutorBackend>,
) -> Toolkit {
    let log = Logger::new(Arc::clone(&worker), streams.clone());
    Toolkit {
        worker,
        backend,
        streams,
        log,
    }
}

/// Logging and command helpers bound to one worker.
///
/// Holds no per-call state; one toolkit can serve concurrent calls.
#[derive(Clone)]
pub struct Toolkit {
    worker: Arc<dyn Worker>,
    backend: Arc<dyn ExecutorBackend>,
    streams: Streams,
    log: Logger,
}

impl Toolkit {
    pub fn log(&self) -> &Logger {
        &self.log
    }

    pub fn worker(&self) -> &dyn Worker {
        self.worker.as_ref()
    }

    /// Run a command and return its exit code.
    ///
    /// The command is reported to the worker as its status first. When the
    /// worker is verbose, stdout and stderr are streamed line by line with
    /// the worker's tag; stderr lines use the error-marked tag.
    ///
    /// With `reject` (the default) a non-zero exit fails with
    /// [`ToolkitError::CommandFailed`].
    pub async fn run(&self, invocation: impl Into<Invocation>, options: RunOptions) -> Result<i32> {
        let invocation = invocation.into();
        self.worker.report_status(&invocation.to_string());

        let tee = self
            .worker
            .is_verbose()
            .then(|| self.tee(options.timestamp));

        let request = ExecRequest {
            invocation,
            reject: options.reject,
            all: false,
            cwd: options.cwd,
            tee,
        };
        let output = execute(self.backend.as_ref(), request).await?;
        Ok(output.exit_code)
    }

    /// Run a command and return its trimmed output.
    ///
    /// See [`ReadOptions::plan`] for how `reject` selects between failing on
    /// exit status, failing on stderr output, and combined capture.
    pub async fn read(&self, invocation: impl Into<Invocation>, options: ReadOptions) -> Result<String> {
        let plan = options.plan();
        let request = ExecRequest {
            invocation: invocation.into(),
            reject: plan.reject,
            all: plan.all,
            cwd: options.cwd,
            tee: None,
        };
        let output = execute(self.backend.as_ref(), request).await?;

        if !plan.all {
            if !output.stderr.trim().is_empty() {
                let message = strip_final_newline(&output.stderr);
                debug!(stderr = %message, "rejecting read on stderr output");
                return Err(ToolkitError::Stderr(message.to_string()));
            }
            return Ok(output.stdout.trim().to_string());
        }

        Ok(output
            .all
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string())
    }

    fn tee(&self, timestamp: bool) -> Tee {
        let out = &self.streams.stdout;
        let err = &self.streams.stderr;

        let out_tag = self.worker.tag(TagStyle::for_terminal(out.is_colored()));
        let err_tag = error_tag(&self.worker.tag(TagStyle::for_terminal(err.is_colored())));

        Tee {
            stdout: DecoratedSink::new(Decoration::new(out_tag, timestamp), out.clone()),
            stderr: DecoratedSink::new(Decoration::new(err_tag, timestamp), err.clone()),
        }
    }
}

/// Drop one trailing `\n` or `\r\n`; earlier blank lines stay.
fn strip_final_newline(text: &str) -> &str {
    match text.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => text,
    }
}
