//! Configuration file support

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Localization configuration
    #[serde(default)]
    pub localization: LocalizationConfig,
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Built-in delimiter used when no flag is given
    pub default_delimiter: String,

    /// Custom regex; takes precedence over `default_delimiter`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_pattern: Option<String>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            default_delimiter: "word".to_string(),
            custom_pattern: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Show segment ids and byte offsets in text output
    pub show_offsets: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            show_offsets: false,
        }
    }
}

/// Localization-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LocalizationConfig {
    /// Locale tag for key lookups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Directory of `<locale>.toml` translation tables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
