use workerkit::ExecOutput;

/// Builder for `ExecOutput` to simplify scripting a `FakeBackend`.
#[derive(Debug, Clone, Default)]
pub struct ExecOutputBuilder {
    output: ExecOutput,
}

impl ExecOutputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exit_code(mut self, code: i32) -> Self {
        self.output.exit_code = code;
        self
    }

    pub fn signal(mut self, signal: i32) -> Self {
        self.output.exit_code = -1;
        self.output.signal = Some(signal);
        self
    }

    pub fn stdout(mut self, text: &str) -> Self {
        self.output.stdout = text.to_string();
        self
    }

    pub fn stderr(mut self, text: &str) -> Self {
        self.output.stderr = text.to_string();
        self
    }

    /// Combined output in a specific interleaving. Defaults to stdout
    /// followed by stderr.
    pub fn all(mut self, text: &str) -> Self {
        self.output.all = Some(text.to_string());
        self
    }

    pub fn build(self) -> ExecOutput {
        self.output
    }
}
