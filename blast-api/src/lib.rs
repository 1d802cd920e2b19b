//! Public API for blasting text into segments
//!
//! This crate wraps the delimiter-rule engine of `blast-core` in the shape
//! presentation layers consume: a [`BlastText`] holding ordered
//! [`Segment`]s with stable identities, a reusable [`Blaster`] driven by a
//! [`Config`], and a localization step that turns a [`LocalizedKey`] into
//! text before it is blasted.
//!
//! ```rust
//! use blast_api::{BlastText, DelimiterRule};
//!
//! let text = BlastText::verbatim("Hello World! Bye.", DelimiterRule::Sentence).unwrap();
//! let values: Vec<&str> = text.values().collect();
//! assert_eq!(values, ["Hello World! ", "Bye."]);
//! ```

#![warn(missing_docs)]

pub mod blaster;
pub mod config;
pub mod error;
pub mod input;
pub mod localization;
pub mod segment;
pub mod text;

// Re-export key types
pub use blast_core::{DelimiterRule, MatchRange};
pub use blaster::Blaster;
pub use config::{Config, ConfigBuilder};
pub use error::{ApiError, Result};
pub use input::Input;
pub use localization::{resolve_key, Catalog, Locale, LocalizedKey, Localizer, NoLocalization};
pub use segment::{Segment, SegmentId};
pub use text::BlastText;

// Convenience functions

/// Blast text with a rule
pub fn blast(text: &str, rule: DelimiterRule) -> Result<BlastText> {
    BlastText::verbatim(text, rule)
}

/// Blast a file with a rule
pub fn blast_file<P: AsRef<std::path::Path>>(path: P, rule: DelimiterRule) -> Result<BlastText> {
    Blaster::new().blast_with(Input::from_file(path), &rule)
}
