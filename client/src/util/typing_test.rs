use super::*;

#[test]
fn starts_with_nothing_visible() {
    let typing = TypingAnimation::new("hello");
    assert_eq!(typing.visible(), "");
    assert!(!typing.is_complete());
}

#[test]
fn advance_reveals_one_character_at_a_time() {
    let mut typing = TypingAnimation::new("abc");
    assert!(typing.advance());
    assert_eq!(typing.visible(), "a");
    assert!(typing.advance());
    assert_eq!(typing.visible(), "ab");
    assert!(typing.advance());
    assert_eq!(typing.visible(), "abc");
    assert!(typing.is_complete());
}

#[test]
fn advance_stops_at_full_length() {
    let mut typing = TypingAnimation::new("ab");
    while typing.advance() {}
    assert!(!typing.advance());
    assert_eq!(typing.visible(), "ab");
}

#[test]
fn multibyte_text_splits_on_char_boundaries() {
    let mut typing = TypingAnimation::new("é☀x");
    typing.advance();
    assert_eq!(typing.visible(), "é");
    typing.advance();
    assert_eq!(typing.visible(), "é☀");
}

#[test]
fn empty_text_is_complete_immediately() {
    let mut typing = TypingAnimation::new("");
    assert!(typing.is_complete());
    assert!(!typing.advance());
    assert_eq!(typing.visible(), "");
}
