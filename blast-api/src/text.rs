//! The blasted-text component

use blast_core::{segment_spans, CharOffsets, DelimiterRule};

use crate::error::Result;
use crate::localization::{resolve_key, Locale, LocalizedKey, Localizer};
use crate::segment::Segment;

/// A text together with its segments under one delimiter rule.
///
/// This is what a presentation layer consumes: it lays out
/// [`segments`](BlastText::segments) in order and styles each one, using
/// the segment id as a stable key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlastText {
    content: String,
    delimiter: DelimiterRule,
    segments: Vec<Segment>,
}

impl BlastText {
    /// Blast `content` into words, without localization
    pub fn new(content: impl Into<String>) -> Self {
        Self::verbatim(content, DelimiterRule::Word)
            .expect("built-in rules always compile")
    }

    /// Blast `content` with `delimiter`, without localization.
    ///
    /// Fails only for a `Custom` rule whose pattern does not compile.
    pub fn verbatim(content: impl Into<String>, delimiter: DelimiterRule) -> Result<Self> {
        let content = content.into();
        let spans = segment_spans(&content, &delimiter)?;

        let mut offsets = CharOffsets::new(&content);
        let segments = spans
            .iter()
            .map(|span| Segment::from_span(span, &content, &mut offsets))
            .collect();

        Ok(Self {
            content,
            delimiter,
            segments,
        })
    }

    /// Resolve `key` for `locale` and blast the result.
    ///
    /// An untranslated key is blasted as-is.
    pub fn localized(
        key: &LocalizedKey,
        delimiter: DelimiterRule,
        localizer: &dyn Localizer,
        locale: &Locale,
    ) -> Result<Self> {
        Self::verbatim(resolve_key(key, localizer, locale), delimiter)
    }

    /// The segmented text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Rule the text was blasted with
    pub fn delimiter(&self) -> &DelimiterRule {
        &self.delimiter
    }

    /// Segments in scan order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment values in scan order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|segment| segment.value.as_str())
    }

    /// Iterate over the segments
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment matched
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Take the segments, dropping the text
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Serialize content, rule and segments as JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl<'a> IntoIterator for &'a BlastText {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
