// src/toolkit/options.rs

//! Options for `run` and `read`, and how `read` options resolve into a
//! rejection/capture plan.

use std::path::PathBuf;

use serde::Deserialize;

/// Options for [`super::Toolkit::run`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunOptions {
    /// Fail when the command exits non-zero.
    pub reject: bool,
    /// Timestamp streamed output lines.
    pub timestamp: bool,
    pub cwd: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            reject: true,
            timestamp: true,
            cwd: None,
        }
    }
}

impl RunOptions {
    pub fn reject(mut self, reject: bool) -> Self {
        self.reject = reject;
        self
    }

    pub fn timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

/// The `reject` setting of [`ReadOptions`].
///
/// In TOML this is written as `true`, `false`, `"status"` or `"stderr"`;
/// leaving it out is [`ReadReject::Unset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawReject")]
pub enum ReadReject {
    /// Not specified: reject on exit status, capture combined output.
    #[default]
    Unset,
    /// `true`: reject on exit status and on any stderr output.
    Always,
    /// `false`: never reject, capture combined output.
    Never,
    /// Reject on exit status only.
    Status,
    /// Reject on stderr output only.
    Stderr,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReject {
    Flag(bool),
    Mode(RejectMode),
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum RejectMode {
    Status,
    Stderr,
}

impl From<RawReject> for ReadReject {
    fn from(raw: RawReject) -> Self {
        match raw {
            RawReject::Flag(true) => ReadReject::Always,
            RawReject::Flag(false) => ReadReject::Never,
            RawReject::Mode(RejectMode::Status) => ReadReject::Status,
            RawReject::Mode(RejectMode::Stderr) => ReadReject::Stderr,
        }
    }
}

impl From<bool> for ReadReject {
    fn from(flag: bool) -> Self {
        RawReject::Flag(flag).into()
    }
}

/// Options for [`super::Toolkit::read`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadOptions {
    pub reject: ReadReject,
    pub cwd: Option<PathBuf>,
}

/// What a `read` call actually does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadPlan {
    /// Fail on an unsuccessful exit.
    pub reject: bool,
    /// Capture stdout and stderr combined; when false, any stderr output
    /// fails the call.
    pub all: bool,
}

impl ReadOptions {
    pub fn reject(mut self, reject: impl Into<ReadReject>) -> Self {
        self.reject = reject.into();
        self
    }

    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn plan(&self) -> ReadPlan {
        let reject = matches!(
            self.reject,
            ReadReject::Unset | ReadReject::Always | ReadReject::Status
        );
        let all = !matches!(self.reject, ReadReject::Always | ReadReject::Stderr);
        ReadPlan { reject, all }
    }
}
