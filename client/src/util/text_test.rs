use super::*;

#[test]
fn sentence_bullets_split_on_period_space() {
    let bullets = sentence_bullets("First part. Second part. Third part.");
    assert_eq!(bullets, ["First part.", "Second part.", "Third part."]);
}

#[test]
fn sentence_bullets_terminate_every_bullet() {
    assert_eq!(sentence_bullets("No trailing period"), ["No trailing period."]);
}

#[test]
fn sentence_bullets_keep_inner_periods() {
    let bullets = sentence_bullets("Uses text-embedding-3.large vectors. Done");
    assert_eq!(bullets, ["Uses text-embedding-3.large vectors.", "Done."]);
}

#[test]
fn sentence_bullets_drop_blank_pieces() {
    assert!(sentence_bullets("").is_empty());
    assert_eq!(sentence_bullets("One.  . Two"), ["One.", "Two."]);
}

#[test]
fn copyright_line_names_owner() {
    assert_eq!(copyright_line("Jane Doe"), "© Jane Doe. All rights reserved.");
}
