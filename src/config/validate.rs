// src/config/validate.rs

use colored::Color;

use crate::config::model::{ConfigFile, WorkerSection};
use crate::errors::{Result, ToolkitError};

/// Check the values that deserialization alone cannot.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_worker(&cfg.worker)?;
    Ok(())
}

fn validate_worker(worker: &WorkerSection) -> Result<()> {
    validate_tag(&worker.tag)?;
    if let Some(name) = &worker.color {
        parse_color(name)?;
    }
    Ok(())
}

/// A tag must be non-empty and free of whitespace.
pub fn validate_tag(tag: &str) -> Result<()> {
    if tag.is_empty() {
        return Err(ToolkitError::ConfigError(
            "[worker] tag must not be empty".to_string(),
        ));
    }
    if tag.chars().any(char::is_whitespace) {
        return Err(ToolkitError::ConfigError(format!(
            "[worker] tag '{tag}' must not contain whitespace"
        )));
    }
    Ok(())
}

/// Parse a color name as accepted by `colored`.
pub fn parse_color(name: &str) -> Result<Color> {
    name.parse::<Color>()
        .map_err(|_| ToolkitError::ConfigError(format!("[worker] unknown color '{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(tag: &str, color: Option<&str>) -> ConfigFile {
        ConfigFile {
            worker: WorkerSection {
                tag: tag.to_string(),
                color: color.map(str::to_string),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&ConfigFile::default()).is_ok());
    }

    #[test]
    fn empty_or_spaced_tag_is_rejected() {
        assert!(matches!(
            validate_config(&worker("", None)),
            Err(ToolkitError::ConfigError(_))
        ));
        assert!(matches!(
            validate_config(&worker("my job", None)),
            Err(ToolkitError::ConfigError(_))
        ));
    }

    #[test]
    fn color_names_are_checked() {
        assert!(validate_config(&worker("a", Some("cyan"))).is_ok());
        match validate_config(&worker("a", Some("plaid"))) {
            Err(ToolkitError::ConfigError(msg)) => assert!(msg.contains("plaid")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }
}
