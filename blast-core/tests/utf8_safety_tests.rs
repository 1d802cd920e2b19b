//! Segments over multi-byte text must never split a character, and the
//! byte and character ranges reported for them must agree

use blast_core::{segment, segment_spans, CharOffsets, DelimiterRule};

#[test]
fn test_all_rule_with_emoji() {
    let text = "a👋b🎉";
    let segments = segment(text, &DelimiterRule::All).unwrap();

    assert_eq!(segments, ["a", "👋", "b", "🎉"]);
}

#[test]
fn test_word_rule_with_japanese_and_emoji() {
    let text = "こんにちは 世界 🌍!";
    let segments = segment(text, &DelimiterRule::Word).unwrap();

    assert_eq!(segments, ["こんにちは ", "世界 ", "🌍!"]);
}

#[test]
fn test_combining_marks_stay_with_word() {
    // "e" followed by U+0301 COMBINING ACUTE ACCENT
    let text = "cafe\u{301} noir";
    let segments = segment(text, &DelimiterRule::Word).unwrap();

    assert_eq!(segments, ["cafe\u{301} ", "noir"]);
}

#[test]
fn test_character_rule_splits_scalar_values() {
    // The rule works on scalar values, so a combining mark is its own segment
    let text = "e\u{301}";
    let segments = segment(text, &DelimiterRule::Character).unwrap();

    assert_eq!(segments, ["e", "\u{301}"]);
}

#[test]
fn test_sentence_rule_with_curly_apostrophe() {
    let text = "It\u{2019}s here. That\u{2019}s all.";
    let segments = segment(text, &DelimiterRule::Sentence).unwrap();

    assert_eq!(segments, ["It\u{2019}s here. ", "That\u{2019}s all."]);
}

#[test]
fn test_char_ranges_match_values() {
    let text = "Grüße 👋 aus Köln. Schön!";
    let spans = segment_spans(text, &DelimiterRule::Word).unwrap();
    let chars: Vec<char> = text.chars().collect();
    let mut offsets = CharOffsets::new(text);

    for span in &spans {
        assert!(text.is_char_boundary(span.range.start));
        assert!(text.is_char_boundary(span.range.end));

        let char_range = offsets.char_range(span.range);
        let from_chars: String = chars[char_range.clone()].iter().collect();
        assert_eq!(from_chars, span.as_str(text));
        assert_eq!(char_range, span.range.to_char_range(text));
    }
}

#[test]
fn test_custom_pattern_over_multibyte_text() {
    let text = "東京と京都と大阪";
    let segments = segment(text, &DelimiterRule::custom("(京.)")).unwrap();

    assert_eq!(segments, ["京と", "京都"]);
}
