//! Offset ranges and substring extraction
//!
//! The engine counts in UTF-8 bytes from end to end: that is what the regex
//! matcher reports and what `str` slicing accepts, so offsets never need to
//! be translated mid-pipeline. Character offsets are derived once, at the
//! edge, for callers that present positions to humans.

use std::ops::Range;

use crate::error::{CoreError, Result};

/// A half-open byte range `start..end` into a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRange {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl MatchRange {
    /// Create a range. `start` must not exceed `end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted range {start}..{end}");
        Self { start, end }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice `text` by this range.
    ///
    /// Ranges produced by the engine always satisfy the bounds; this panics
    /// on ranges that do not belong to `text`. Use [`MatchRange::checked_slice`]
    /// for ranges from elsewhere.
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }

    /// Slice `text`, validating bounds and character boundaries
    pub fn checked_slice<'t>(&self, text: &'t str) -> Result<&'t str> {
        if self.start > self.end || self.end > text.len() {
            return Err(CoreError::OffsetOutOfBounds {
                start: self.start,
                end: self.end,
                len: text.len(),
            });
        }
        for offset in [self.start, self.end] {
            if !text.is_char_boundary(offset) {
                return Err(CoreError::NotCharBoundary { offset });
            }
        }
        Ok(&text[self.start..self.end])
    }

    /// Narrow the range so it neither starts nor ends with whitespace.
    /// An all-whitespace range collapses to an empty range at its start.
    pub fn trim(&self, text: &str) -> MatchRange {
        let slice = self.slice(text);
        let leading = slice.len() - slice.trim_start().len();
        let trimmed = slice.trim();
        if trimmed.is_empty() {
            return MatchRange::new(self.start, self.start);
        }
        let start = self.start + leading;
        MatchRange::new(start, start + trimmed.len())
    }

    /// Convert to a character-offset range over `text`
    pub fn to_char_range(&self, text: &str) -> Range<usize> {
        let start = text[..self.start].chars().count();
        let len = self.slice(text).chars().count();
        start..start + len
    }

    /// Byte range as a standard [`Range`]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for MatchRange {
    fn from(range: Range<usize>) -> Self {
        MatchRange::new(range.start, range.end)
    }
}

impl From<regex::Match<'_>> for MatchRange {
    fn from(m: regex::Match<'_>) -> Self {
        MatchRange::new(m.start(), m.end())
    }
}

/// Incremental byte-to-character offset converter.
///
/// Converting each range of a scan with [`MatchRange::to_char_range`] is
/// quadratic in the text length. `CharOffsets` walks the text once as long
/// as offsets are requested in non-decreasing order, and restarts from the
/// beginning otherwise.
#[derive(Debug, Clone)]
pub struct CharOffsets<'t> {
    text: &'t str,
    byte_pos: usize,
    char_pos: usize,
}

impl<'t> CharOffsets<'t> {
    /// Start converting offsets in `text`
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            byte_pos: 0,
            char_pos: 0,
        }
    }

    /// Character offset for a byte offset on a character boundary
    pub fn char_offset(&mut self, byte_offset: usize) -> usize {
        if byte_offset < self.byte_pos {
            self.byte_pos = 0;
            self.char_pos = 0;
        }
        self.char_pos += self.text[self.byte_pos..byte_offset].chars().count();
        self.byte_pos = byte_offset;
        self.char_pos
    }

    /// Character-offset range for a byte range
    pub fn char_range(&mut self, range: MatchRange) -> Range<usize> {
        let start = self.char_offset(range.start);
        let end = self.char_offset(range.end);
        start..end
    }
}
