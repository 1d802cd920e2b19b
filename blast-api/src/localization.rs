//! Localization collaborator
//!
//! A [`LocalizedKey`] is resolved to display text before it reaches the
//! engine. Lookups go through a [`Localizer`]; when nothing is found the key
//! itself is used, so an untranslated key still blasts into something
//! readable. The engine never performs lookups on its own.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{ApiError, Result};

/// A locale tag such as `en`, `de-CH` or `pt_BR`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    tag: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Locale {
    /// Create a locale from a tag. Encoding and modifier suffixes
    /// (`.UTF-8`, `@euro`) are dropped.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let tag = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        Self { tag }
    }

    /// Locale from `LC_ALL`, `LC_MESSAGES` or `LANG`, in that order.
    /// The POSIX `C` locale counts as unset.
    pub fn from_env() -> Option<Self> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .map(Locale::new)
            .find(|locale| !locale.tag.is_empty() && locale.tag != "C" && locale.tag != "POSIX")
    }

    /// Full tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Lowercased language subtag (`de` for `de-CH`)
    pub fn language(&self) -> String {
        self.tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Whether the tag is empty
    pub fn is_empty(&self) -> bool {
        self.tag.is_empty()
    }
}

impl FromStr for Locale {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        let locale = Locale::new(s);
        if locale.is_empty() {
            return Err(ApiError::Config("locale tag must not be empty".into()));
        }
        Ok(locale)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

/// A symbolic key to be resolved into display text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalizedKey(String);

impl LocalizedKey {
    /// Create a key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocalizedKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for LocalizedKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for LocalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves keys for a locale
pub trait Localizer: Send + Sync {
    /// Translation of `key` for `locale`, if one exists
    fn lookup(&self, key: &str, locale: &Locale) -> Option<String>;
}

/// Localizer that knows no translations
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalization;

impl Localizer for NoLocalization {
    fn lookup(&self, _key: &str, _locale: &Locale) -> Option<String> {
        None
    }
}

/// In-memory translation tables, one per language or full locale tag.
///
/// On disk a catalog is a directory of flat TOML files named after the
/// locale (`en.toml`, `de.toml`, `de-CH.toml`), each mapping keys to
/// strings:
///
/// ```toml
/// greeting = "Hello World"
/// "farewell.short" = "Bye"
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one translation
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.tables
            .entry(locale.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Merge a TOML table of translations for `locale`
    pub fn load_toml(&mut self, locale: &str, source: &str) -> Result<()> {
        let table: HashMap<String, String> = toml::from_str(source)
            .map_err(|e| ApiError::Localization(format!("failed to parse {locale} table: {e}")))?;
        self.tables
            .entry(locale.to_string())
            .or_default()
            .extend(table);
        Ok(())
    }

    /// Catalog holding a single TOML table
    pub fn from_toml_str(locale: &str, source: &str) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.load_toml(locale, source)?;
        Ok(catalog)
    }

    /// Load every `*.toml` file in `dir`; the file stem names the locale
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut catalog = Self::new();

        let entries = fs::read_dir(dir).map_err(|e| {
            ApiError::Localization(format!("failed to read {}: {e}", dir.display()))
        })?;

        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let source = fs::read_to_string(&path)?;
            catalog.load_toml(locale, &source)?;
            tracing::debug!(locale, path = %path.display(), "loaded localization table");
        }

        Ok(catalog)
    }

    /// Locales with at least one table
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Whether no translations are loaded
    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }
}

impl Localizer for Catalog {
    /// Exact tag first (`de-CH`), then the bare language (`de`)
    fn lookup(&self, key: &str, locale: &Locale) -> Option<String> {
        self.tables
            .get(locale.tag())
            .and_then(|table| table.get(key))
            .or_else(|| {
                self.tables
                    .get(&locale.language())
                    .and_then(|table| table.get(key))
            })
            .cloned()
    }
}

/// Resolve `key` for `locale`, falling back to the key itself
pub fn resolve_key(key: &LocalizedKey, localizer: &dyn Localizer, locale: &Locale) -> String {
    match localizer.lookup(key.as_str(), locale) {
        Some(value) => value,
        None => {
            tracing::debug!(key = key.as_str(), locale = locale.tag(), "no translation, using key");
            key.as_str().to_owned()
        }
    }
}
