// src/config/model.rs

use serde::Deserialize;

use crate::toolkit::{ReadOptions, RunOptions};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [worker]
/// tag = "build"
/// color = "cyan"
///
/// [run]
/// timestamp = false
///
/// [read]
/// reject = "status"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub worker: WorkerSection,

    /// Default options for `workerkit run`.
    #[serde(default)]
    pub run: RunOptions,

    /// Default options for `workerkit read`.
    #[serde(default)]
    pub read: ReadOptions,
}

/// `[worker]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkerSection {
    /// Tag printed in front of every line.
    pub tag: String,

    /// Color name for the tag on terminals (e.g. `"cyan"`, `"bright blue"`).
    pub color: Option<String>,

    /// Timestamp log lines.
    pub timestamp: bool,

    /// Force verbose printer mode regardless of CLI flags.
    pub verbose: bool,
}

impl Default for WorkerSection {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            color: None,
            timestamp: true,
            verbose: false,
        }
    }
}

fn default_tag() -> String {
    "workerkit".to_string()
}
