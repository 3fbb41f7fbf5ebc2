pub mod builders;
pub mod fake_backend;

use std::io;
use std::sync::{Arc, Mutex, Once};

use tracing_subscriber::{EnvFilter, fmt};
use workerkit::{OutputStream, PrinterMode, Streams, TagStyle, Worker};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// In-memory writer whose contents can be inspected after the fact.
#[derive(Debug, Clone, Default)]
pub struct CaptureStream {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CaptureStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// An `OutputStream` writing into this buffer.
    pub fn stream(&self) -> OutputStream {
        OutputStream::new(self.clone())
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl io::Write for CaptureStream {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A captured stdout/stderr pair.
#[derive(Debug, Clone, Default)]
pub struct CapturedStreams {
    pub stdout: CaptureStream,
    pub stderr: CaptureStream,
}

impl CapturedStreams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn streams(&self) -> Streams {
        Streams::new(self.stdout.stream(), self.stderr.stream())
    }
}

/// Worker that records every status it is given.
#[derive(Debug)]
pub struct FakeWorker {
    pub tag: String,
    pub printer: PrinterMode,
    pub timestamp: bool,
    statuses: Mutex<Vec<String>>,
}

impl FakeWorker {
    /// A worker with timestamps off, so output is deterministic.
    pub fn new(tag: &str, printer: PrinterMode) -> Self {
        Self {
            tag: tag.to_string(),
            printer,
            timestamp: false,
            statuses: Mutex::new(Vec::new()),
        }
    }

    pub fn verbose(tag: &str) -> Self {
        Self::new(tag, PrinterMode::Verbose)
    }

    pub fn quiet(tag: &str) -> Self {
        Self::new(tag, PrinterMode::Vivid)
    }

    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn statuses(&self) -> Vec<String> {
        self.statuses.lock().unwrap().clone()
    }
}

impl Worker for FakeWorker {
    fn tag(&self, _style: TagStyle) -> String {
        self.tag.clone()
    }

    fn printer(&self) -> PrinterMode {
        self.printer
    }

    fn report_status(&self, status: &str) {
        self.statuses.lock().unwrap().push(status.to_string());
    }

    fn timestamp(&self) -> bool {
        self.timestamp
    }
}
