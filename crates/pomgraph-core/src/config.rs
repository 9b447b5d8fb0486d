//! Configuration schema (pomgraph.toml)

use serde::Deserialize;
use std::path::Path;

/// Conventional manifest file name inside a project directory
pub const DEFAULT_MANIFEST_NAME: &str = "pom.xml";

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "pomgraph.toml";

/// Graph output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON document (machine readable)
    Json,

    /// Human readable listing
    Text,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Json
    }
}

/// Maven analysis settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MavenConfig {
    /// File name appended when a build target is a directory
    #[serde(default = "default_manifest_name")]
    pub manifest_name: String,
}

impl Default for MavenConfig {
    fn default() -> Self {
        Self {
            manifest_name: default_manifest_name(),
        }
    }
}

fn default_manifest_name() -> String {
    DEFAULT_MANIFEST_NAME.to_string()
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Maven manifest settings
    #[serde(default)]
    pub maven: MavenConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        Self::from_toml(&contents)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml)
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
