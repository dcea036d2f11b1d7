//! Small text shaping helpers for section content.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Split an architecture paragraph into bullet sentences.
///
/// Sentences are separated by `". "`; blank pieces are dropped and every
/// bullet ends with a period.
#[must_use]
pub fn sentence_bullets(paragraph: &str) -> Vec<String> {
    paragraph
        .split(". ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| if s.ends_with('.') { s.to_owned() } else { format!("{s}.") })
        .collect()
}

/// Footer attribution line.
#[must_use]
pub fn copyright_line(owner: &str) -> String {
    format!("© {owner}. All rights reserved.")
}
