//! Delimiter-rule engine for blasting text into ordered segments
//!
//! A [`DelimiterRule`] selects a pattern; the engine applies that pattern to
//! the whole input and returns every match as a verbatim substring, in the
//! order it was found. Built-in rules keep the whitespace they consume, so
//! concatenating their segments reproduces the input text.
//!
//! # Architecture
//!
//! - **Resolver** ([`resolver`]): pure mapping from rule to pattern text and
//!   extraction policy
//! - **Pattern** ([`pattern`]): compiled matcher; built-ins are compiled
//!   once per process, custom patterns once per call
//! - **Engine** ([`engine`]): single left-to-right scan producing [`Span`]s
//! - **Offsets** ([`span`]): byte ranges, slicing, and char-offset
//!   conversion
//!
//! # Example
//!
//! ```rust
//! use blast_core::{segment, DelimiterRule};
//!
//! let words = segment("Hello big world", &DelimiterRule::Word).unwrap();
//! assert_eq!(words, vec!["Hello ", "big ", "world"]);
//!
//! let hits = segment("Lorem ipsum rebum", &DelimiterRule::custom("(um)")).unwrap();
//! assert_eq!(hits, vec!["um", "um"]);
//! ```

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod pattern;
pub mod resolver;
pub mod rule;
pub mod span;

pub use engine::{segment, segment_spans, with_pattern, Span};
pub use error::{CoreError, Result};
pub use pattern::Pattern;
pub use resolver::{resolve, Extraction, Resolved};
pub use rule::{DelimiterRule, UnknownDelimiter};
pub use span::{CharOffsets, MatchRange};
