//! CLI error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `swallow-sim` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The survey core rejected its inputs
    #[error("Survey error: {0}")]
    Survey(#[from] swallow_core::SurveyError),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
