// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The toolkit talks to an `ExecutorBackend` instead of spawning processes
//! itself, so tests can swap in a scripted backend.
//!
//! - `RealExecutorBackend` spawns OS processes through `tokio::process`.
//! - Rejection of failed commands is applied on top of any backend by
//!   [`super::execute`].

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::{ExitStatus, Stdio};
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

use crate::decorate::DecoratedSink;
use crate::errors::{Result, ToolkitError};

use super::invocation::Invocation;

/// Sinks receiving subprocess output lines while the command runs.
#[derive(Debug, Clone)]
pub struct Tee {
    pub stdout: DecoratedSink,
    pub stderr: DecoratedSink,
}

/// Everything a backend needs to run one command.
#[derive(Debug, Clone)]
pub struct ExecRequest {
    pub invocation: Invocation,
    /// Fail when the command does not exit successfully.
    pub reject: bool,
    /// Capture stdout and stderr interleaved into [`ExecOutput::all`].
    pub all: bool,
    pub cwd: Option<PathBuf>,
    pub tee: Option<Tee>,
}

impl ExecRequest {
    pub fn new(invocation: Invocation) -> Self {
        Self {
            invocation,
            reject: true,
            all: false,
            cwd: None,
            tee: None,
        }
    }
}

/// Result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    /// Exit code, `-1` when terminated by a signal.
    pub exit_code: i32,
    pub signal: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// Combined output, present only when requested.
    pub all: Option<String>,
}

impl ExecOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0 && self.signal.is_none()
    }

    /// Turn an unsuccessful exit into an error.
    pub fn ensure_success(&self, invocation: &Invocation) -> Result<()> {
        if let Some(signal) = self.signal {
            return Err(ToolkitError::CommandKilled {
                command: invocation.to_string(),
                signal,
            });
        }
        if self.exit_code != 0 {
            return Err(ToolkitError::CommandFailed {
                command: invocation.to_string(),
                exit_code: self.exit_code,
                stderr: self.stderr.clone(),
            });
        }
        Ok(())
    }
}

/// Trait abstracting how commands are executed.
///
/// Implementations report what the process did; they do not apply the
/// `reject` policy themselves.
pub trait ExecutorBackend: Send + Sync {
    fn spawn(
        &self,
        request: ExecRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ExecOutput>> + Send + '_>>;
}

/// Backend spawning real OS processes.
#[derive(Debug, Clone, Default)]
pub struct RealExecutorBackend;

impl RealExecutorBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutorBackend for RealExecutorBackend {
    fn spawn(
        &self,
        request: ExecRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ExecOutput>> + Send + '_>> {
        Box::pin(run_process(request))
    }
}

type SharedCapture = Arc<Mutex<String>>;

async fn run_process(request: ExecRequest) -> Result<ExecOutput> {
    let command = request.invocation.to_string();
    let (program, args) = request.invocation.argv()?;

    debug!(
        cmd = %command,
        reject = request.reject,
        all = request.all,
        cwd = ?request.cwd,
        "spawning command"
    );

    let mut cmd = Command::new(&program);
    cmd.args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(cwd) = &request.cwd {
        cmd.current_dir(cwd);
    }

    let mut child = cmd.spawn().map_err(|source| ToolkitError::Spawn {
        command: command.clone(),
        source,
    })?;

    let all = request.all.then(SharedCapture::default);
    let (out_sink, err_sink) = match request.tee {
        Some(tee) => (Some(tee.stdout), Some(tee.stderr)),
        None => (None, None),
    };

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Drain both pipes while waiting so neither buffer fills up.
    let (status, stdout, stderr) = tokio::join!(
        child.wait(),
        pump(stdout, out_sink, all.clone()),
        pump(stderr, err_sink, all.clone()),
    );
    let status = status?;
    let (exit_code, signal) = exit_parts(status);

    info!(cmd = %command, exit_code, ?signal, "command exited");

    let all = match all {
        Some(shared) => Some(take_capture(&shared)?),
        None => None,
    };

    Ok(ExecOutput {
        exit_code,
        signal,
        stdout: stdout?,
        stderr: stderr?,
        all,
    })
}

/// Drain one pipe, returning everything read.
///
/// Each line is also appended to the combined capture and forwarded to the
/// sink, as soon as it is read.
async fn pump<R: AsyncRead + Unpin>(
    reader: Option<R>,
    sink: Option<DecoratedSink>,
    all: Option<SharedCapture>,
) -> Result<String> {
    let Some(reader) = reader else {
        return Ok(String::new());
    };

    let mut reader = BufReader::new(reader);
    let mut captured = String::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let chunk = String::from_utf8_lossy(&buf);
        captured.push_str(&chunk);

        if let Some(all) = &all {
            all.lock()
                .map_err(|_| anyhow::anyhow!("combined output lock poisoned"))?
                .push_str(&chunk);
        }
        if let Some(sink) = &sink {
            sink.write_line(&chunk)?;
        }
    }

    Ok(captured)
}

fn take_capture(shared: &SharedCapture) -> Result<String> {
    let mut guard = shared
        .lock()
        .map_err(|_| anyhow::anyhow!("combined output lock poisoned"))?;
    Ok(std::mem::take(&mut *guard))
}

#[cfg(unix)]
fn exit_parts(status: ExitStatus) -> (i32, Option<i32>) {
    use std::os::unix::process::ExitStatusExt;
    match status.code() {
        Some(code) => (code, None),
        None => (-1, status.signal()),
    }
}

#[cfg(not(unix))]
fn exit_parts(status: ExitStatus) -> (i32, Option<i32>) {
    (status.code().unwrap_or(-1), None)
}
