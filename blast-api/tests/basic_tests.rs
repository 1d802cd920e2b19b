//! Basic tests for blast-api

use blast_api::*;
use std::io::Write;

const LOREM: &str = "Lorem ipsum dolor sit amet, voluptua. At et ea rebum.";

fn values(text: &BlastText) -> Vec<&str> {
    text.values().collect()
}

#[test]
fn test_blast_with_every_rule() {
    assert_eq!(blast(LOREM, DelimiterRule::All).unwrap().len(), 53);
    assert_eq!(blast(LOREM, DelimiterRule::Character).unwrap().len(), 44);
    assert_eq!(
        values(&blast(LOREM, DelimiterRule::Word).unwrap()),
        [
            "Lorem ",
            "ipsum ",
            "dolor ",
            "sit ",
            "amet, ",
            "voluptua. ",
            "At ",
            "et ",
            "ea ",
            "rebum."
        ]
    );
    assert_eq!(
        values(&blast(LOREM, DelimiterRule::Sentence).unwrap()),
        ["Lorem ipsum dolor sit amet, voluptua. ", "At et ea rebum."]
    );
    assert_eq!(
        values(&blast(LOREM, DelimiterRule::custom("(um)")).unwrap()),
        ["um", "um"]
    );
}

#[test]
fn test_segments_outlive_source_text() {
    let segments = {
        let source = String::from("short lived text");
        blast(&source, DelimiterRule::Word).unwrap().into_segments()
    };
    assert_eq!(segments[2].value, "text");
}

#[test]
fn test_byte_and_char_ranges() {
    let text = blast("😀 ok", DelimiterRule::Word).unwrap();
    let first = &text.segments()[0];
    let second = &text.segments()[1];

    assert_eq!(first.byte_range, MatchRange::new(0, 5));
    assert_eq!(first.char_range, 0..2);
    assert_eq!(second.byte_range, MatchRange::new(5, 7));
    assert_eq!(second.char_range, 2..4);
}

#[test]
fn test_blast_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "From a file. Second sentence.").unwrap();

    let text = blast_file(file.path(), DelimiterRule::Sentence).unwrap();
    assert_eq!(values(&text), ["From a file. ", "Second sentence."]);
}

#[test]
fn test_blaster_with_config() {
    let config = Config::builder()
        .delimiter_name("character")
        .unwrap()
        .build()
        .unwrap();
    let blaster = Blaster::with_config(config).unwrap();

    let text = blaster.blast(Input::from_bytes(b"a b".to_vec())).unwrap();
    assert_eq!(values(&text), ["a ", "b"]);
}

#[test]
fn test_invalid_custom_pattern_surfaces_error() {
    let err = blast(LOREM, DelimiterRule::custom("(?P<unterminated")).unwrap_err();
    assert!(err.is_invalid_pattern());
    assert!(err.to_string().contains("(?P<unterminated"));
}

#[test]
fn test_parallel_blasting_is_independent() {
    let blaster = std::sync::Arc::new(Blaster::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let blaster = blaster.clone();
            std::thread::spawn(move || {
                let text = format!("thread {i} says hello");
                blaster.blast_text(&text).unwrap().len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 4);
    }
}
