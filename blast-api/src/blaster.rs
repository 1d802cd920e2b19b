//! Configured entry point for repeated blasting

use std::sync::Arc;

use blast_core::DelimiterRule;

use crate::config::Config;
use crate::error::Result;
use crate::input::Input;
use crate::localization::{Catalog, LocalizedKey, Localizer, NoLocalization};
use crate::text::BlastText;

/// Applies one configuration to many inputs.
///
/// Holds no compiled custom pattern between calls: each call resolves and
/// compiles its rule afresh, so a `Blaster` can be shared across threads
/// without coordination.
#[derive(Clone)]
pub struct Blaster {
    config: Config,
    localizer: Arc<dyn Localizer>,
}

impl std::fmt::Debug for Blaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blaster")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Blaster {
    /// Create a blaster with default configuration (word rule, no
    /// translations)
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            localizer: Arc::new(NoLocalization),
        }
    }

    /// Create a blaster with a custom configuration.
    ///
    /// Loads the catalog directory when one is configured.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let localizer: Arc<dyn Localizer> = match config.catalog_dir() {
            Some(dir) => Arc::new(Catalog::from_dir(dir)?),
            None => Arc::new(NoLocalization),
        };

        Ok(Self { config, localizer })
    }

    /// Create a blaster for one rule with otherwise default settings
    pub fn with_delimiter(rule: DelimiterRule) -> Result<Self> {
        Self::with_config(Config::builder().delimiter(rule).build()?)
    }

    /// Replace the localizer
    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = localizer;
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Blast an input with the configured rule
    pub fn blast(&self, input: Input) -> Result<BlastText> {
        self.blast_with(input, &self.config.delimiter)
    }

    /// Blast an input with an explicit rule
    pub fn blast_with(&self, input: Input, rule: &DelimiterRule) -> Result<BlastText> {
        let text = input.read_text()?;
        let blasted = BlastText::verbatim(text, rule.clone())?;

        tracing::debug!(
            rule = rule.name(),
            segments = blasted.len(),
            "blasted input"
        );

        Ok(blasted)
    }

    /// Blast text directly (convenience method)
    pub fn blast_text(&self, text: &str) -> Result<BlastText> {
        self.blast(Input::from_text(text))
    }

    /// Resolve a key with the configured localizer and locale, then blast it
    pub fn blast_key(&self, key: &LocalizedKey) -> Result<BlastText> {
        BlastText::localized(
            key,
            self.config.delimiter.clone(),
            self.localizer.as_ref(),
            &self.config.locale,
        )
    }
}

impl Default for Blaster {
    fn default() -> Self {
        Self::new()
    }
}
