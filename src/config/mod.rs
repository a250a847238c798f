//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default session file, relative to the working directory
pub const DEFAULT_SESSION_FILE: &str = ".wordsort.json";

/// Configuration loaded from a TOML file
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct WordsortConfig {
    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Session-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Where the board is saved between commands
    pub path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Color text output by category
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
            color: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One "<key> <word>" line per item
    Text,
    /// JSON document
    Json,
}

/// Effective settings after applying command-line overrides to the config
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub session_path: PathBuf,
    pub format: OutputFormat,
    pub pretty_json: bool,
    pub color: bool,
}

impl Settings {
    pub fn resolve(config: &WordsortConfig, session: Option<PathBuf>, no_color: bool) -> Self {
        Self {
            session_path: session.unwrap_or_else(|| config.session.path.clone()),
            format: config.output.default_format,
            pretty_json: config.output.pretty_json,
            color: config.output.color && !no_color,
        }
    }

    /// Output format for one command, falling back to the configured default
    pub fn format_or_default(&self, format: Option<OutputFormat>) -> OutputFormat {
        format.unwrap_or(self.format)
    }
}

impl WordsortConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}
