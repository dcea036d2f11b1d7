//! Typed-text reveal used by the hero tagline.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Delay between revealed characters.
pub const TYPING_INTERVAL_MS: u64 = 50;

/// Progress of a left-to-right character reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingAnimation {
    full: String,
    shown: usize,
    total: usize,
}

impl TypingAnimation {
    pub fn new(full: impl Into<String>) -> Self {
        let full = full.into();
        let total = full.chars().count();
        Self { full, shown: 0, total }
    }

    /// Text revealed so far. Always ends on a character boundary.
    #[must_use]
    pub fn visible(&self) -> &str {
        match self.full.char_indices().nth(self.shown) {
            Some((byte, _)) => &self.full[..byte],
            None => &self.full,
        }
    }

    /// Reveal one more character. Returns `false` once everything is shown.
    pub fn advance(&mut self) -> bool {
        if self.shown >= self.total {
            return false;
        }
        self.shown += 1;
        true
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.shown >= self.total
    }
}
