//! Configuration schema (semdoc.toml)

use crate::attribute::StabilityLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Markdown snippets rendered in the stability column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilitySnippets {
    pub stable: String,

    pub experimental: String,

    /// May contain a `{}` placeholder for the deprecation message
    pub deprecated: String,
}

impl Default for StabilitySnippets {
    fn default() -> Self {
        Self {
            stable: "![Stable](https://img.shields.io/badge/-stable-lightgreen)".to_string(),
            experimental: "![Experimental](https://img.shields.io/badge/-experimental-blue)"
                .to_string(),
            deprecated: "![Deprecated](https://img.shields.io/badge/-deprecated-red)<br>{}"
                .to_string(),
        }
    }
}

/// Rendering options for the registry document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// Level-1 heading of the document
    pub title: String,

    /// Stability level templates
    pub stability: StabilitySnippets,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            title: "OpenTelemetry attributes registry".to_string(),
            stability: StabilitySnippets::default(),
        }
    }
}

impl MarkdownOptions {
    /// Template configured for a stability level
    pub fn snippet(&self, level: StabilityLevel) -> &str {
        match level {
            StabilityLevel::Stable => &self.stability.stable,
            StabilityLevel::Experimental => &self.stability.experimental,
            StabilityLevel::Deprecated => &self.stability.deprecated,
        }
    }

    /// Override the template for one level
    pub fn set_snippet(&mut self, level: StabilityLevel, snippet: impl Into<String>) {
        let slot = match level {
            StabilityLevel::Stable => &mut self.stability.stable,
            StabilityLevel::Experimental => &mut self.stability.experimental,
            StabilityLevel::Deprecated => &mut self.stability.deprecated,
        };
        *slot = snippet.into();
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output document path, relative to the project root
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Rendering options
    #[serde(default)]
    pub markdown: MarkdownOptions,

    /// Project root path (for resolving relative paths)
    #[serde(skip)]
    pub project_root: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from("registry.md")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            markdown: MarkdownOptions::default(),
            project_root: std::env::current_dir().unwrap_or_default(),
        }
    }
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let mut config = Self::from_toml(&contents)?;

        // Set project root to parent of config file
        if let Some(parent) = path.parent() {
            config.project_root = parent.to_path_buf();
        }

        Ok(config)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(toml)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.project_root = std::env::current_dir().unwrap_or_default();
        Ok(config)
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Output path resolved against the project root
    pub fn output_path(&self) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            self.project_root.join(&self.output)
        }
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
