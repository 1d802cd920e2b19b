//! Segment records handed to presentation layers

use std::fmt;
use std::ops::Range;

use blast_core::{CharOffsets, MatchRange, Span};

/// Stable identity of a segment: its position in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SegmentId(pub usize);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One blasted piece of text.
///
/// The value is an owned copy, so segments outlive the text they were cut
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Identity, unique within one blast
    pub id: SegmentId,
    /// Matched text, verbatim
    pub value: String,
    /// Byte range in the source text
    pub byte_range: MatchRange,
    /// Character range in the source text
    pub char_range: Range<usize>,
}

impl Segment {
    /// Build a segment from an engine span over `text`
    pub(crate) fn from_span(span: &Span, text: &str, offsets: &mut CharOffsets<'_>) -> Self {
        Self {
            id: SegmentId(span.index),
            value: span.as_str(text).to_owned(),
            byte_range: span.range,
            char_range: offsets.char_range(span.range),
        }
    }

    /// The value without surrounding whitespace
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Whether the value is whitespace only (or empty)
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

impl AsRef<str> for Segment {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
