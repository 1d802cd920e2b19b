//! Delimiter resolver
//!
//! Maps a [`DelimiterRule`] to the pattern text the engine compiles and to
//! the [`Extraction`] policy that decides which span of each match becomes
//! a segment. Resolution is total and never validates anything: a `Custom`
//! pattern is passed through untouched and only fails later, when the
//! engine compiles it.

use std::borrow::Cow;

use crate::rule::DelimiterRule;

/// One character, excluding line terminators (`\n`, `\r`, NEL, LS, PS)
pub const ALL_PATTERN: &str = r"([^\n\r\x{85}\x{2028}\x{2029}])";

/// One non-whitespace character and the whitespace around it
pub const CHARACTER_PATTERN: &str = r"\s*(\S)\s*";

/// A run of non-whitespace characters and the whitespace around it
pub const WORD_PATTERN: &str = r"\s*(\S+)\s*";

/// A phrase up to a terminal punctuation run or the end of the text.
///
/// Shape of one match:
/// - leading whitespace
/// - either an ellipsis run followed by a lazy body, or a body starting on
///   a non-whitespace character; the body never contains `!` or `?`
/// - one or more of `. … ! ?`, or the end of the text
/// - any closing quote/bracket runs (`′ ’ ' ” ″ “ " ) »`), each optionally
///   preceded by whitespace
/// - trailing whitespace
///
/// The group excludes the leading whitespace. A phrase that runs to the end
/// of the text may still carry trailing whitespace inside the group, which
/// is why segment cores are trimmed rather than read from the group as-is.
pub const SENTENCE_PATTERN: &str =
    r#"\s*((?:[.]{2,}[^!?]+?|[^!?\s][^!?]*?)(?:[.…!?]+|$)(?:\s*[′’'”″“")»]+)*)\s*"#;

/// Which part of a match becomes the segment value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// The whole match, surrounding whitespace included. Segments produced
    /// this way concatenate back to the covered text.
    WholeMatch,
    /// Capture group 1 when the pattern defines it and it took part in the
    /// match, otherwise the whole match.
    PrimaryGroup,
}

/// Pattern text and extraction policy for one rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// Regular expression source
    pub pattern: Cow<'a, str>,
    /// How segments are read out of each match
    pub extraction: Extraction,
}

/// Resolve a rule to its pattern.
///
/// Built-in rules keep the whitespace they consume so that the segment
/// sequence reproduces the text verbatim; their capture group marks the
/// trimmed core of each segment. Custom patterns define their own capture
/// semantics.
pub fn resolve(rule: &DelimiterRule) -> Resolved<'_> {
    let (pattern, extraction) = match rule {
        DelimiterRule::All => (Cow::Borrowed(ALL_PATTERN), Extraction::WholeMatch),
        DelimiterRule::Character => (Cow::Borrowed(CHARACTER_PATTERN), Extraction::WholeMatch),
        DelimiterRule::Word => (Cow::Borrowed(WORD_PATTERN), Extraction::WholeMatch),
        DelimiterRule::Sentence => (Cow::Borrowed(SENTENCE_PATTERN), Extraction::WholeMatch),
        DelimiterRule::Custom(pattern) => {
            (Cow::Borrowed(pattern.as_str()), Extraction::PrimaryGroup)
        }
    };

    tracing::trace!(rule = rule.name(), pattern = %pattern, "resolved delimiter");

    Resolved {
        pattern,
        extraction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rules_use_whole_match() {
        for rule in [
            DelimiterRule::All,
            DelimiterRule::Character,
            DelimiterRule::Word,
            DelimiterRule::Sentence,
        ] {
            assert_eq!(resolve(&rule).extraction, Extraction::WholeMatch);
        }
    }

    #[test]
    fn test_custom_pattern_passes_through() {
        let rule = DelimiterRule::custom("(um)");
        let resolved = resolve(&rule);
        assert_eq!(resolved.pattern, "(um)");
        assert_eq!(resolved.extraction, Extraction::PrimaryGroup);
        assert!(matches!(resolved.pattern, Cow::Borrowed(_)));
    }

    #[test]
    fn test_resolver_does_not_validate() {
        let rule = DelimiterRule::custom("(unclosed");
        assert_eq!(resolve(&rule).pattern, "(unclosed");
    }

    #[test]
    fn test_builtin_patterns_have_one_group() {
        for pattern in [
            ALL_PATTERN,
            CHARACTER_PATTERN,
            WORD_PATTERN,
            SENTENCE_PATTERN,
        ] {
            let regex = regex::Regex::new(pattern).unwrap();
            // captures_len counts the implicit whole-match group
            assert_eq!(regex.captures_len(), 2, "pattern {pattern}");
        }
    }
}
