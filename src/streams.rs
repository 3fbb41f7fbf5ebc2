// src/streams.rs

//! Injected output streams.
//!
//! The toolkit never writes to the process stdout/stderr directly. Callers
//! hand it a [`Streams`] pair, which is the real terminal in production and
//! an in-memory buffer in tests.

use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex};

/// Cloneable, thread-safe handle to a writable target.
#[derive(Clone)]
pub struct OutputStream {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
    colored: bool,
}

impl OutputStream {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
            colored: false,
        }
    }

    pub fn stdout() -> Self {
        let colored = io::stdout().is_terminal();
        Self::new(io::stdout()).with_color(colored)
    }

    pub fn stderr() -> Self {
        let colored = io::stderr().is_terminal();
        Self::new(io::stderr()).with_color(colored)
    }

    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Whether tags written here may carry ANSI colors.
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Write a whole block and flush it while holding the lock.
    pub fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("output stream lock poisoned"))?;
        writer.write_all(bytes)?;
        writer.flush()
    }
}

impl fmt::Debug for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputStream")
            .field("colored", &self.colored)
            .finish_non_exhaustive()
    }
}

/// The stdout/stderr pair a toolkit writes to.
#[derive(Debug, Clone)]
pub struct Streams {
    pub stdout: OutputStream,
    pub stderr: OutputStream,
}

impl Streams {
    pub fn new(stdout: OutputStream, stderr: OutputStream) -> Self {
        Self { stdout, stderr }
    }

    /// The process' own stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(OutputStream::stdout(), OutputStream::stderr())
    }
}
