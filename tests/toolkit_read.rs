// tests/toolkit_read.rs

mod common;
use crate::common::{ExecOutputBuilder, FakeBackend, FakeWorker, fake_toolkit, init_tracing};

use std::error::Error;

use workerkit::{ReadOptions, ReadReject, ToolkitError};

type TestResult = Result<(), Box<dyn Error>>;

fn out_and_err() -> FakeBackend {
    FakeBackend::new().with_output(
        ExecOutputBuilder::new()
            .stdout("out\n")
            .stderr("err\n")
            .all("out\nerr\n")
            .build(),
    )
}

#[tokio::test]
async fn default_options_capture_combined_output() -> TestResult {
    init_tracing();
    let backend = out_and_err();
    let (toolkit, _, _) = fake_toolkit(FakeWorker::quiet("q"), &backend);

    let text = toolkit.read("tool", ReadOptions::default()).await?;

    assert_eq!(text, "out\nerr");
    let req = &backend.requests()[0];
    assert!(req.reject);
    assert!(req.all);
    assert!(!req.teed);
    Ok(())
}

#[tokio::test]
async fn reject_true_fails_on_stderr_text() {
    init_tracing();
    let backend = out_and_err();
    let (toolkit, _, _) = fake_toolkit(FakeWorker::quiet("q"), &backend);

    let result = toolkit
        .read("tool", ReadOptions::default().reject(true))
        .await;

    match result {
        Err(ToolkitError::Stderr(msg)) => assert_eq!(msg, "err"),
        other => panic!("expected Stderr error, got {other:?}"),
    }
}

#[tokio::test]
async fn stderr_error_keeps_all_but_the_final_newline() {
    init_tracing();
    let backend = FakeBackend::new().with_output(
        ExecOutputBuilder::new().stderr("first\nsecond\n\n").build(),
    );
    let (toolkit, _, _) = fake_toolkit(FakeWorker::quiet("q"), &backend);

    let result = toolkit
        .read("tool", ReadOptions::default().reject(true))
        .await;

    match result {
        Err(ToolkitError::Stderr(msg)) => assert_eq!(msg, "first\nsecond\n"),
        other => panic!("expected Stderr error, got {other:?}"),
    }
}

#[tokio::test]
async fn reject_false_returns_trimmed_output() -> TestResult {
    init_tracing();
    let backend = FakeBackend::new().with_output(
        ExecOutputBuilder::new().exit_code(1).stdout("hello\n").build(),
    );
    let (toolkit, _, _) = fake_toolkit(FakeWorker::quiet("q"), &backend);

    let text = toolkit
        .read("tool", ReadOptions::default().reject(false))
        .await?;

    assert_eq!(text, "hello");
    Ok(())
}

#[tokio::test]
async fn stderr_mode_ignores_exit_status() -> TestResult {
    init_tracing();
    let backend = FakeBackend::new().with_output(
        ExecOutputBuilder::new()
            .exit_code(1)
            .stdout("  a\n  b  \n")
            .stderr(" \n")
            .build(),
    );
    let (toolkit, _, _) = fake_toolkit(FakeWorker::quiet("q"), &backend);

    let text = toolkit
        .read("tool", ReadOptions::default().reject(ReadReject::Stderr))
        .await?;

    // Only the outer whitespace goes.
    assert_eq!(text, "a\n  b");
    Ok(())
}

#[tokio::test]
async fn status_mode_fails_on_exit_but_keeps_stderr() -> TestResult {
    init_tracing();
    let ok = FakeBackend::new().with_output(
        ExecOutputBuilder::new().stderr("progress\n").stdout("done\n").build(),
    );
    let (toolkit, _, _) = fake_toolkit(FakeWorker::quiet("q"), &ok);
    let text = toolkit
        .read("tool", ReadOptions::default().reject(ReadReject::Status))
        .await?;
    assert_eq!(text, "done\nprogress");

    let failing =
        FakeBackend::new().with_output(ExecOutputBuilder::new().exit_code(4).build());
    let (toolkit, _, _) = fake_toolkit(FakeWorker::quiet("q"), &failing);
    let result = toolkit
        .read("tool", ReadOptions::default().reject(ReadReject::Status))
        .await;
    assert!(matches!(result, Err(ToolkitError::CommandFailed { exit_code: 4, .. })));
    Ok(())
}

#[tokio::test]
async fn exit_failure_wins_over_stderr_check() {
    init_tracing();
    let backend = FakeBackend::new().with_output(
        ExecOutputBuilder::new().exit_code(3).stderr("fatal\n").build(),
    );
    let (toolkit, _, _) = fake_toolkit(FakeWorker::quiet("q"), &backend);

    let result = toolkit
        .read("tool", ReadOptions::default().reject(true))
        .await;

    match result {
        Err(err) => assert_eq!(err.exit_code(), Some(3)),
        Ok(text) => panic!("expected failure, got {text:?}"),
    }
}

#[tokio::test]
async fn empty_output_reads_as_empty_string() -> TestResult {
    init_tracing();
    let backend = FakeBackend::new();
    let (toolkit, _, _) = fake_toolkit(FakeWorker::quiet("q"), &backend);

    assert_eq!(toolkit.read("true", ReadOptions::default()).await?, "");
    Ok(())
}
