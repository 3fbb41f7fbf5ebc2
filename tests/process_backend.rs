// tests/process_backend.rs
//
// Runs real processes through `sh`.
#![cfg(unix)]

mod common;
use crate::common::{CapturedStreams, FakeWorker, init_tracing, sh, with_timeout};

use std::error::Error;
use std::sync::Arc;

use workerkit::exec::{ExecRequest, RealExecutorBackend, execute};
use workerkit::{Invocation, ReadOptions, RunOptions, Toolkit, ToolkitError, attach};

type TestResult = Result<(), Box<dyn Error>>;

fn toolkit(worker: FakeWorker) -> (Toolkit, CapturedStreams) {
    let captured = CapturedStreams::new();
    let toolkit = attach(Arc::new(worker), captured.streams());
    (toolkit, captured)
}

#[tokio::test]
async fn failing_command_is_rejected_with_its_exit_code() {
    init_tracing();
    let (toolkit, _) = toolkit(FakeWorker::quiet("p"));

    let result = with_timeout(toolkit.run(sh("exit 3"), RunOptions::default())).await;

    match result {
        Err(ToolkitError::CommandFailed { exit_code, .. }) => assert_eq!(exit_code, 3),
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn failing_command_returns_code_without_reject() -> TestResult {
    init_tracing();
    let (toolkit, _) = toolkit(FakeWorker::quiet("p"));

    let code = with_timeout(toolkit.run(sh("exit 3"), RunOptions::default().reject(false))).await?;

    assert_eq!(code, 3);
    Ok(())
}

#[tokio::test]
async fn verbose_run_streams_both_pipes() -> TestResult {
    init_tracing();
    let (toolkit, captured) = toolkit(FakeWorker::verbose("job@1"));

    let script = "echo one; echo oops >&2; printf two";
    with_timeout(toolkit.run(sh(script), RunOptions::default().timestamp(false))).await?;

    assert_eq!(captured.stdout.lines(), vec!["[job@1] one", "[job@1] two"]);
    assert_eq!(captured.stderr.lines(), vec!["[jobE@1] oops"]);
    Ok(())
}

#[tokio::test]
async fn read_returns_trimmed_stdout() -> TestResult {
    init_tracing();
    let (toolkit, _) = toolkit(FakeWorker::quiet("p"));

    let text = with_timeout(toolkit.read(
        Invocation::line("echo   hello   world"),
        ReadOptions::default().reject(true),
    ))
    .await?;

    assert_eq!(text, "hello world");
    Ok(())
}

#[tokio::test]
async fn read_rejects_on_stderr_text() {
    init_tracing();
    let (toolkit, _) = toolkit(FakeWorker::quiet("p"));

    let result = with_timeout(toolkit.read(
        sh("echo out; echo err >&2"),
        ReadOptions::default().reject(true),
    ))
    .await;

    match result {
        Err(ToolkitError::Stderr(msg)) => assert_eq!(msg, "err"),
        other => panic!("expected Stderr error, got {other:?}"),
    }
}

#[tokio::test]
async fn read_default_combines_both_pipes() -> TestResult {
    init_tracing();
    let (toolkit, _) = toolkit(FakeWorker::quiet("p"));

    let text = with_timeout(toolkit.read(sh("echo out; echo err >&2"), ReadOptions::default())).await?;

    let mut lines: Vec<&str> = text.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, vec!["err", "out"]);
    Ok(())
}

#[tokio::test]
async fn cwd_is_applied() -> TestResult {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let (toolkit, _) = toolkit(FakeWorker::quiet("p"));

    let text = with_timeout(toolkit.read("pwd", ReadOptions::default().cwd(dir.path()))).await?;

    assert_eq!(
        std::fs::canonicalize(text)?,
        std::fs::canonicalize(dir.path())?
    );
    Ok(())
}

#[tokio::test]
async fn missing_program_fails_to_spawn() {
    init_tracing();
    let backend = RealExecutorBackend::new();
    let mut request = ExecRequest::new(Invocation::line("workerkit-definitely-not-installed"));
    request.reject = false;

    let result = with_timeout(execute(&backend, request)).await;

    assert!(matches!(result, Err(ToolkitError::Spawn { .. })));
}

#[tokio::test]
async fn killed_process_reports_signal() -> TestResult {
    init_tracing();
    let backend = RealExecutorBackend::new();
    let mut request = ExecRequest::new(sh("kill -9 $$"));
    request.reject = false;

    let output = with_timeout(execute(&backend, request)).await?;

    assert_eq!(output.exit_code, -1);
    assert_eq!(output.signal, Some(9));
    Ok(())
}
