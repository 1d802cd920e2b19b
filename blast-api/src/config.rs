//! Configuration for a [`Blaster`](crate::Blaster)

use std::path::{Path, PathBuf};

use blast_core::{DelimiterRule, Pattern};

use crate::error::{ApiError, Result};
use crate::localization::Locale;

/// Default configuration values
pub mod defaults {
    use blast_core::DelimiterRule;

    /// Rule used when none is given
    pub const DELIMITER: DelimiterRule = DelimiterRule::Word;

    /// Locale used for key lookups when none is given
    pub const LOCALE: &str = "en";
}

/// Segmentation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) delimiter: DelimiterRule,
    pub(crate) locale: Locale,
    pub(crate) catalog_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: defaults::DELIMITER,
            locale: Locale::new(defaults::LOCALE),
            catalog_dir: None,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Rule applied to every input
    pub fn delimiter(&self) -> &DelimiterRule {
        &self.delimiter
    }

    /// Locale for key lookups
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Directory of localization tables, if any
    pub fn catalog_dir(&self) -> Option<&Path> {
        self.catalog_dir.as_deref()
    }

    /// Validate the configuration.
    ///
    /// A custom pattern is compiled once here and discarded, so a bad
    /// pattern is rejected when the configuration is built rather than on
    /// first use.
    pub(crate) fn validate(&self) -> Result<()> {
        if let DelimiterRule::Custom(pattern) = &self.delimiter {
            if pattern.is_empty() {
                return Err(ApiError::Config("custom pattern must not be empty".into()));
            }
            Pattern::compile(&self.delimiter)?;
        }

        if self.locale.is_empty() {
            return Err(ApiError::Config("locale must not be empty".into()));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    delimiter: Option<DelimiterRule>,
    locale: Option<String>,
    catalog_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter rule
    pub fn delimiter(mut self, rule: DelimiterRule) -> Self {
        self.delimiter = Some(rule);
        self
    }

    /// Set a built-in delimiter rule by name (`all`, `character`, `word`,
    /// `sentence`)
    pub fn delimiter_name(mut self, name: &str) -> Result<Self> {
        let rule = name
            .parse::<DelimiterRule>()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        self.delimiter = Some(rule);
        Ok(self)
    }

    /// Use a custom pattern as the delimiter rule
    pub fn custom_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.delimiter = Some(DelimiterRule::custom(pattern));
        self
    }

    /// Set the locale tag used for key lookups
    pub fn locale(mut self, tag: impl Into<String>) -> Self {
        self.locale = Some(tag.into());
        self
    }

    /// Load localization tables from a directory
    pub fn catalog_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.catalog_dir = Some(dir.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(rule) = self.delimiter {
            config.delimiter = rule;
        }

        if let Some(tag) = self.locale {
            config.locale = Locale::new(tag);
        }

        config.catalog_dir = self.catalog_dir;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.delimiter(), &DelimiterRule::Word);
        assert_eq!(config.locale().tag(), "en");
        assert!(config.catalog_dir().is_none());
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .delimiter_name("sentence")
            .unwrap()
            .locale("de-CH")
            .catalog_dir("/tmp/catalog")
            .build()
            .unwrap();

        assert_eq!(config.delimiter(), &DelimiterRule::Sentence);
        assert_eq!(config.locale().language(), "de");
        assert_eq!(config.catalog_dir(), Some(Path::new("/tmp/catalog")));
    }

    #[test]
    fn test_unknown_delimiter_name() {
        let err = Config::builder().delimiter_name("paragraph").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_invalid_custom_pattern_rejected_at_build() {
        let err = Config::builder()
            .custom_pattern("(um")
            .build()
            .unwrap_err();
        assert!(err.is_invalid_pattern());
    }

    #[test]
    fn test_empty_custom_pattern_rejected() {
        let err = Config::builder().custom_pattern("").build().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_empty_locale_rejected() {
        let err = Config::builder().locale(" ").build().unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
