// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    /// The command exited with a non-zero code while rejection was requested.
    #[error("Command failed with exit code {exit_code}: {command}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    /// The command was terminated by a signal while rejection was requested.
    #[error("Command was killed with signal {signal}: {command}")]
    CommandKilled { command: String, signal: i32 },

    /// `read` found output on stderr while not capturing combined output.
    #[error("{0}")]
    Stderr(String),

    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Empty command line")]
    EmptyCommand,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ToolkitError {
    /// Exit code carried by a command failure, if any.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ToolkitError::CommandFailed { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
