//! Prompt configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictac_core::Glyphs;
use tracing::{debug, info, instrument};

/// Settings for the text prompt.
///
/// ```toml
/// log_filter = "info,tictac_core=debug"
///
/// [glyphs]
/// empty = " "
/// x = "X"
/// o = "O"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// How cells are drawn after each move.
    #[serde(default)]
    glyphs: Glyphs,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl PromptConfig {
    /// Creates a configuration.
    #[instrument(skip(glyphs))]
    pub fn new(log_filter: String, glyphs: Glyphs) -> Self {
        Self { log_filter, glyphs }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self::new(default_log_filter(), Glyphs::default())
    }
}

/// Failure reading or parsing `tictac.toml`.
#[derive(Debug, Clone, Display, Error)]
#[display("Prompt config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: PromptConfig = toml::from_str("").unwrap();
        assert_eq!(config, PromptConfig::default());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_partial_glyphs() {
        let config: PromptConfig = toml::from_str("[glyphs]\nempty = \" \"\n").unwrap();
        assert_eq!(config.glyphs().empty(), " ");
        assert_eq!(config.glyphs().x(), "X");
        assert_eq!(config.glyphs().o(), "O");
    }

    #[test]
    fn test_unknown_glyph_type_is_rejected() {
        let err = toml::from_str::<PromptConfig>("[glyphs]\nx = 1\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Prompt config error: boom at "));
    }
}
