//! Configuration module for chat-stats.

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::{ChatStatsError, Result};

/// Environment variable overriding `logging.level`.
pub const ENV_LOG_LEVEL: &str = "CHAT_STATS_LOG_LEVEL";

/// Environment variable overriding `output.format`.
pub const ENV_FORMAT: &str = "CHAT_STATS_FORMAT";

/// Largest accepted `output.precision` (digits after the decimal point).
pub const MAX_PRECISION: usize = 17;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ChatStatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ChatStatsError::Validation(format!(
                "unknown output format: {other:?} (expected \"text\" or \"json\")"
            ))),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Report format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Decimal places used by the text report.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    3
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

/// Batch configuration.
///
/// When enabled, lines are grouped into batches and every batch is analyzed
/// on its own, the way a live chat bot would report on recent activity.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// Whether batch mode is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Number of lines that completes a batch.
    #[serde(default = "default_batch_size")]
    pub size: usize,
    /// Seconds after which a pending batch is emitted regardless of size.
    #[serde(default = "default_batch_interval")]
    pub interval_secs: u64,
    /// Speakers whose lines are skipped (e.g. the bot's own echo).
    #[serde(default)]
    pub ignored_speakers: Vec<String>,
}

fn default_batch_size() -> usize {
    5
}

fn default_batch_interval() -> u64 {
    10
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            size: default_batch_size(),
            interval_secs: default_batch_interval(),
            ignored_speakers: Vec::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to an additional log file. Empty means stderr only.
    #[serde(default)]
    pub file: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
    /// Batch configuration.
    #[serde(default)]
    pub batch: BatchConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ChatStatsError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ChatStatsError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `CHAT_STATS_LOG_LEVEL`: Override the log level
    /// - `CHAT_STATS_FORMAT`: Override the output format (`text` / `json`)
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up through `lookup`. Empty values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(ENV_FORMAT).filter(|v| !v.is_empty()) {
            self.output.format = format.parse()?;
        }
        Ok(())
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - `batch.size` is zero
    /// - `output.precision` exceeds [`MAX_PRECISION`]
    pub fn validate(&self) -> Result<()> {
        if self.batch.size == 0 {
            return Err(ChatStatsError::Validation(
                "batch.size must be at least 1".to_string(),
            ));
        }
        if self.output.precision > MAX_PRECISION {
            return Err(ChatStatsError::Validation(format!(
                "output.precision must be at most {MAX_PRECISION}, got {}",
                self.output.precision
            )));
        }
        Ok(())
    }
}
