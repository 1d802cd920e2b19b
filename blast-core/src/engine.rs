//! Segmentation engine
//!
//! Scans a text once, left to right, and turns every non-overlapping match
//! of a delimiter pattern into a [`Span`]. The engine keeps no state between
//! calls: built-in patterns come from process-wide statics, custom patterns
//! are compiled per call.

use crate::error::Result;
use crate::pattern::Pattern;
use crate::resolver::Extraction;
use crate::rule::DelimiterRule;
use crate::span::MatchRange;

/// One match of a delimiter pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Position in scan order
    pub index: usize,
    /// Bytes that make up the segment value
    pub range: MatchRange,
    /// Whole match
    pub matched: MatchRange,
    /// Capture group 1, if the pattern has one and it participated
    pub group: Option<MatchRange>,
}

impl Span {
    /// Segment value as a slice of the scanned text
    pub fn as_str<'t>(&self, text: &'t str) -> &'t str {
        self.range.slice(text)
    }

    /// The primary group (or the whole match) without surrounding
    /// whitespace
    pub fn core(&self, text: &str) -> MatchRange {
        self.group.unwrap_or(self.matched).trim(text)
    }
}

impl Pattern {
    /// All non-overlapping matches in `text`, in scan order
    pub fn spans(&self, text: &str) -> Vec<Span> {
        let spans: Vec<Span> = if self.regex.captures_len() > 1 {
            self.regex
                .captures_iter(text)
                .enumerate()
                .filter_map(|(index, caps)| {
                    let matched = MatchRange::from(caps.get(0)?);
                    let group = caps.get(1).map(MatchRange::from);
                    Some(self.span(index, matched, group))
                })
                .collect()
        } else {
            self.regex
                .find_iter(text)
                .enumerate()
                .map(|(index, m)| self.span(index, m.into(), None))
                .collect()
        };

        tracing::debug!(
            pattern = self.as_str(),
            text_bytes = text.len(),
            matches = spans.len(),
            "scanned text"
        );

        spans
    }

    /// Segment values in scan order, copied out of `text`
    pub fn segments(&self, text: &str) -> Vec<String> {
        self.spans(text)
            .iter()
            .map(|span| span.as_str(text).to_owned())
            .collect()
    }

    fn span(&self, index: usize, matched: MatchRange, group: Option<MatchRange>) -> Span {
        let range = match self.extraction {
            Extraction::WholeMatch => matched,
            Extraction::PrimaryGroup => group.unwrap_or(matched),
        };
        Span {
            index,
            range,
            matched,
            group,
        }
    }
}

/// Run `f` against the pattern for `rule`, compiling it only if the rule is
/// not built in
pub fn with_pattern<T>(rule: &DelimiterRule, f: impl FnOnce(&Pattern) -> T) -> Result<T> {
    match Pattern::builtin(rule) {
        Some(pattern) => Ok(f(pattern)),
        None => {
            let pattern = Pattern::compile(rule)?;
            Ok(f(&pattern))
        }
    }
}

/// Blast `text` into spans according to `rule`.
///
/// Only a `Custom` rule with an invalid pattern returns an error. No
/// matches is not an error: the result is simply empty.
pub fn segment_spans(text: &str, rule: &DelimiterRule) -> Result<Vec<Span>> {
    with_pattern(rule, |pattern| pattern.spans(text))
}

/// Blast `text` into owned segment strings according to `rule`
pub fn segment(text: &str, rule: &DelimiterRule) -> Result<Vec<String>> {
    with_pattern(rule, |pattern| pattern.segments(text))
}
