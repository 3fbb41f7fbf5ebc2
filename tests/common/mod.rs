#![allow(dead_code)]

use std::sync::Arc;

pub use workerkit_test_utils::builders::ExecOutputBuilder;
pub use workerkit_test_utils::fake_backend::FakeBackend;
pub use workerkit_test_utils::{CapturedStreams, FakeWorker, init_tracing};

use workerkit::{Invocation, Toolkit, attach_with_backend};

/// A command run through `sh -c`.
pub fn sh(script: &str) -> Invocation {
    Invocation::program("sh", ["-c", script])
}

/// Toolkit wired to a fake worker, a fake backend and captured streams.
pub fn fake_toolkit(worker: FakeWorker, backend: &FakeBackend) -> (Toolkit, Arc<FakeWorker>, CapturedStreams) {
    let worker = Arc::new(worker);
    let captured = CapturedStreams::new();
    let toolkit = attach_with_backend(
        worker.clone(),
        captured.streams(),
        Arc::new(backend.clone()),
    );
    (toolkit, worker, captured)
}

/// Run a future with a 5-second timeout.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(5), f)
        .await
        .expect("Test timed out after 5 seconds")
}
