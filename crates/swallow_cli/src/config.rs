//! Simulation configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! CLI arguments.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use swallow_core::questionnaire::default_questions;
use swallow_core::sim::Question;
use thiserror::Error;

/// Environment variable overriding the seed
pub const ENV_SEED: &str = "SWALLOW_SEED";
/// Environment variable overriding the clock mode
pub const ENV_CLOCK: &str = "SWALLOW_CLOCK";
/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "SWALLOW_LOG_LEVEL";
/// Environment variable overriding the output format
pub const ENV_FORMAT: &str = "SWALLOW_FORMAT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid seed: {0}. Must be a non-negative integer")]
    InvalidSeed(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid clock mode: {0}. Must be one of: real, virtual")]
    InvalidClock(String),

    #[error("Invalid output format: {0}. Must be one of: text, json")]
    InvalidFormat(String),

    #[error("Question {0} is blank")]
    BlankQuestion(usize),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How simulated waits are carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    /// Block the thread for each response time
    #[default]
    Real,
    /// Advance a virtual clock instantly
    Virtual,
}

impl FromStr for ClockMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "real" | "wall" => Ok(ClockMode::Real),
            "virtual" | "instant" => Ok(ClockMode::Virtual),
            _ => Err(ConfigError::InvalidClock(s.to_string())),
        }
    }
}

impl std::fmt::Display for ClockMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClockMode::Real => write!(f, "real"),
            ClockMode::Virtual => write!(f, "virtual"),
        }
    }
}

/// Report rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON of the pipeline outcome
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Simulation configuration structure
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed seed; `None` derives one from the current time
    pub seed: Option<u64>,
    /// Wait implementation
    pub clock: ClockMode,
    /// Log level
    pub log_level: LogLevel,
    /// Report format
    pub format: OutputFormat,
    /// Question texts; empty means the built-in questionnaire
    pub questions: Vec<String>,
}

impl SimConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: SimConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `SWALLOW_*` overrides from a variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(
                seed.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidSeed(seed.clone()))?,
            );
        }
        if let Some(clock) = lookup(ENV_CLOCK) {
            self.clock = ClockMode::from_str(&clock)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self.questions.iter().position(|q| q.trim().is_empty()) {
            return Err(ConfigError::BlankQuestion(index + 1));
        }
        Ok(())
    }

    /// Questions to ask, falling back to the built-in questionnaire
    pub fn questions(&self) -> Vec<Question> {
        if self.questions.is_empty() {
            default_questions()
        } else {
            self.questions.iter().map(|q| Question::from(q.as_str())).collect()
        }
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(clock) = cli.clock {
            self.clock = clock;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if cli.verbose && self.log_level != LogLevel::Trace {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<u64>,
    /// Clock override
    pub clock: Option<ClockMode>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Log level override
    pub log_level: Option<String>,
    /// Raise logging to debug
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<SimConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an injectable environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<SimConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
