use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use workerkit::errors::Result;
use workerkit::{ExecOutput, ExecRequest, ExecutorBackend, Invocation};

/// What the fake saw for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub invocation: Invocation,
    pub reject: bool,
    pub all: bool,
    pub cwd: Option<std::path::PathBuf>,
    pub teed: bool,
}

/// A fake backend that:
/// - records every request
/// - answers with scripted outputs, in order (default output when exhausted)
/// - replays stdout/stderr lines to the tee sinks, like a real process would.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    outputs: Arc<Mutex<VecDeque<ExecOutput>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(self, output: ExecOutput) -> Self {
        self.outputs.lock().unwrap().push_back(output);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ExecutorBackend for FakeBackend {
    fn spawn(
        &self,
        request: ExecRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ExecOutput>> + Send + '_>> {
        Box::pin(async move {
            request.invocation.argv()?;

            self.requests.lock().unwrap().push(RecordedRequest {
                invocation: request.invocation.clone(),
                reject: request.reject,
                all: request.all,
                cwd: request.cwd.clone(),
                teed: request.tee.is_some(),
            });

            let mut output = self.outputs.lock().unwrap().pop_front().unwrap_or_default();

            if let Some(tee) = &request.tee {
                for line in output.stdout.lines() {
                    tee.stdout.write_line(line)?;
                }
                for line in output.stderr.lines() {
                    tee.stderr.write_line(line)?;
                }
            }

            if request.all {
                if output.all.is_none() {
                    output.all = Some(format!("{}{}", output.stdout, output.stderr));
                }
            } else {
                output.all = None;
            }

            Ok(output)
        })
    }
}
