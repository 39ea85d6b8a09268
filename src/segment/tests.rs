use super::*;

#[test]
fn test_segment_basic_sentences() {
    let units = segment("Cats are mammals. Dogs are loyal. Fish swim in water.");

    assert_eq!(units.len(), 3);
    assert_eq!(units[0].text, "Cats are mammals");
    assert_eq!(units[1].text, "Dogs are loyal");
    assert_eq!(units[2].text, "Fish swim in water");
}

#[test]
fn test_segment_ordinals_are_positional() {
    let units = segment("One. Two. Three.");

    for (i, unit) in units.iter().enumerate() {
        assert_eq!(unit.ordinal, i);
    }
}

#[test]
fn test_segment_is_deterministic() {
    let text = "First sentence. Second sentence.  Third, with a comma.";
    let a = segment(text);
    let b = segment(text);

    assert_eq!(a, b, "Segmenting twice should yield the same sequence");
}

#[test]
fn test_segment_no_empty_or_whitespace_units() {
    let units = segment("One..  . Two .\n\n. Three.");

    assert!(!units.is_empty());
    for unit in &units {
        assert!(!unit.text.is_empty());
        assert!(!unit.text.trim().is_empty());
        assert_eq!(unit.text, unit.text.trim(), "Units should arrive trimmed");
    }
}

#[test]
fn test_segment_no_terminator_yields_whole_text() {
    let units = segment("  a single unit without a terminator  ");

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].text, "a single unit without a terminator");
    assert_eq!(units[0].ordinal, 0);
}

#[test]
fn test_segment_empty_input() {
    assert!(segment("").is_empty());
}

#[test]
fn test_segment_whitespace_only_input() {
    assert!(segment("   \t\n  ").is_empty());
}

#[test]
fn test_segment_terminators_only() {
    assert!(segment("...").is_empty());
    assert!(segment(". . .").is_empty());
}

#[test]
fn test_segment_preserves_interior_punctuation() {
    let units = segment("Hello, world! How are you. Fine, thanks.");

    assert_eq!(units.len(), 2);
    assert_eq!(units[0].text, "Hello, world! How are you");
    assert_eq!(units[1].text, "Fine, thanks");
}

#[test]
fn test_segment_multiline_text() {
    let units = segment("Line one.\nLine two.\n\nLine three.");

    assert_eq!(units.len(), 3);
    assert_eq!(units[1].text, "Line two");
}

#[test]
fn test_sentence_unit_display() {
    let unit = SentenceUnit::new("Dogs are loyal", 1);
    assert_eq!(unit.to_string(), "Dogs are loyal");
}
