// src/config/mod.rs

//! TOML configuration for the `workerkit` binary.
//!
//! - [`model`] maps the file sections to structs.
//! - [`validate`] checks values serde cannot.
//! - [`loader`] reads, deserializes and validates a file.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, WorkerSection};
