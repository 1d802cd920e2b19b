//! Property tests for the built-in rules

use blast_core::{segment, segment_spans, DelimiterRule};
use proptest::prelude::*;
use regex::Regex;

/// Text built from words, mixed whitespace, punctuation and closing marks
fn prose() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Zäöü日本]{1,6}",
            Just(" ".to_string()),
            Just("  ".to_string()),
            Just("\t".to_string()),
            Just(". ".to_string()),
            Just("...".to_string()),
            Just("…".to_string()),
            Just("!".to_string()),
            Just("?".to_string()),
            Just("\u{201D}".to_string()),
            Just(")".to_string()),
            Just("👋".to_string()),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_word_segments_concatenate_to_text(text in prose()) {
        let segments = segment(&text, &DelimiterRule::Word).unwrap();
        if text.trim().is_empty() {
            prop_assert!(segments.is_empty());
        } else {
            prop_assert_eq!(segments.concat(), text);
        }
    }

    #[test]
    fn prop_character_segments_concatenate_to_text(text in prose()) {
        let segments = segment(&text, &DelimiterRule::Character).unwrap();
        if !text.trim().is_empty() {
            prop_assert_eq!(segments.concat(), text);
        }
    }

    #[test]
    fn prop_all_rule_one_segment_per_char(text in prose()) {
        let segments = segment(&text, &DelimiterRule::All).unwrap();
        prop_assert_eq!(segments.len(), text.chars().count());
        prop_assert_eq!(segments.concat(), text);
    }

    #[test]
    fn prop_sentence_spans_are_ordered_and_disjoint(text in prose()) {
        let spans = segment_spans(&text, &DelimiterRule::Sentence).unwrap();
        let mut previous_end = 0;
        for span in &spans {
            prop_assert!(span.range.start >= previous_end);
            prop_assert!(span.range.end <= text.len());
            prop_assert!(!span.as_str(&text).is_empty());
            previous_end = span.range.end;
        }
    }

    #[test]
    fn prop_sentence_segments_concatenate_without_bang_runs(
        text in "[a-z]{1,5}( [a-z]{1,5}){0,4}(\\. [a-z]{1,5}( [a-z]{1,5}){0,3}){0,4}\\.?"
    ) {
        let segments = segment(&text, &DelimiterRule::Sentence).unwrap();
        prop_assert_eq!(segments.concat(), text);
    }

    #[test]
    fn prop_custom_matches_regex_crate(text in prose(), literal in "[a-z]{1,2}") {
        let pattern = format!("({literal})");
        let segments = segment(&text, &DelimiterRule::custom(pattern.clone())).unwrap();
        let expected: Vec<String> = Regex::new(&pattern)
            .unwrap()
            .captures_iter(&text)
            .map(|caps| caps[1].to_string())
            .collect();
        prop_assert_eq!(segments, expected);
    }
}
