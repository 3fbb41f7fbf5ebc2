// src/lib.rs

//! Logging and command helpers attached to a task-scheduler worker.
//!
//! ```ignore
//! let toolkit = workerkit::attach(worker, Streams::stdio());
//! log_out!(toolkit.log(), "building", targets.len(), "targets");
//! let code = toolkit.run("cargo build", RunOptions::default()).await?;
//! let head = toolkit.read("git rev-parse HEAD", ReadOptions::default()).await?;
//! ```

pub mod cli;
pub mod config;
pub mod decorate;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod printer;
pub mod streams;
pub mod toolkit;
pub mod worker;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::{CliArgs, CliCommand, invocation_from_words, printer_mode};
use crate::config::validate::{parse_color, validate_tag};
use crate::config::{ConfigFile, default_config_path, load_or_default};

pub use crate::decorate::{DecoratedSink, Decoration, decorate_lines};
pub use crate::errors::{Result as ToolkitResult, ToolkitError};
pub use crate::exec::{ExecOutput, ExecRequest, ExecutorBackend, Invocation, RealExecutorBackend};
pub use crate::printer::{PrinterMode, select_printer};
pub use crate::streams::{OutputStream, Streams};
pub use crate::toolkit::{
    LogArg, Logger, ReadOptions, ReadReject, RunOptions, Toolkit, attach, attach_with_backend,
};
pub use crate::worker::{StaticWorker, TagStyle, Worker, error_tag};

/// High-level entry point used by `main.rs`.
///
/// `argv` is the raw process arguments, used to pick the printer mode.
/// Returns the process exit code.
pub async fn run(args: CliArgs, argv: &[String]) -> Result<i32> {
    let explicit = args.config.is_some();
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let cfg = load_or_default(&config_path, explicit)
        .with_context(|| format!("loading config {}", config_path.display()))?;

    let printer = printer_mode(&args, argv, cfg.worker.verbose);
    debug!(%printer, "selected printer mode");

    let worker = build_worker(&args, &cfg, printer)?;
    let toolkit = attach(Arc::new(worker), Streams::stdio());

    match &args.command {
        CliCommand::Run(run) => {
            let options = run.options(&cfg.run);
            let code = toolkit
                .run(invocation_from_words(&run.command), options)
                .await?;
            Ok(code)
        }
        CliCommand::Read(read) => {
            let options = read.options(&cfg.read);
            let text = toolkit
                .read(invocation_from_words(&read.command), options)
                .await?;
            if !text.is_empty() {
                println!("{text}");
            }
            Ok(0)
        }
        CliCommand::Log(log) => {
            let message: Vec<LogArg<'_>> = log.message.iter().map(|m| LogArg::from(m)).collect();
            if log.error {
                toolkit.log().error(&message);
            } else if log.debug_only {
                toolkit.log().verbose(&message);
            } else {
                toolkit.log().out(&message);
            }
            Ok(0)
        }
        CliCommand::Printer => {
            println!("{printer}");
            Ok(0)
        }
    }
}

fn build_worker(args: &CliArgs, cfg: &ConfigFile, printer: PrinterMode) -> Result<StaticWorker> {
    let tag = match args.tag.as_deref() {
        Some(tag) => {
            validate_tag(tag).context("--tag")?;
            tag
        }
        None => &cfg.worker.tag,
    };
    let mut worker = StaticWorker::new(tag, printer).with_timestamp(cfg.worker.timestamp);
    if let Some(name) = &cfg.worker.color {
        worker = worker.with_color(parse_color(name)?);
    }
    Ok(worker)
}
