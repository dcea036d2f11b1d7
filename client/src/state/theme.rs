//! Theme preference model and the session-scoped preference store.
//!
//! DESIGN
//! ======
//! The decision of which theme to start with is a pure function of the
//! persisted value and the system hint (`resolve_initial`). `ThemeStore`
//! wraps that decision with the effectful seams (storage slot, OS hint) and
//! is the only writer of the theme for a session.
//!
//! Storage failures never reach callers: reads degrade to "absent" and writes
//! are logged and dropped while the in-memory value still updates.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::util::theme_storage::{PreferenceSlot, SystemHint};

/// Key of the durable slot that holds the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// The two visual variants of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Mode shown before resolution and outside any provider.
    pub const DEFAULT: Self = Self::Dark;

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string is not one of the two theme literals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme value {0:?} (expected \"light\" or \"dark\")")]
pub struct ParseThemeModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeModeError(other.to_owned())),
        }
    }
}

/// Per-session lifecycle of the theme value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeState {
    /// Session started; storage and the system hint have not been consulted.
    #[default]
    Unresolved,
    Resolved(ThemeMode),
}

impl ThemeState {
    /// Mode consumers should render with right now.
    #[must_use]
    pub fn effective(self) -> ThemeMode {
        match self {
            Self::Unresolved => ThemeMode::DEFAULT,
            Self::Resolved(mode) => mode,
        }
    }

    #[must_use]
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Pick the starting theme: a valid stored value wins, otherwise the hint.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> ThemeMode {
    if let Some(mode) = stored.and_then(|raw| raw.parse::<ThemeMode>().ok()) {
        return mode;
    }
    if prefers_dark { ThemeMode::Dark } else { ThemeMode::Light }
}

/// Owner of the single theme value for one session.
pub struct ThemeStore {
    state: ThemeState,
    slot: Box<dyn PreferenceSlot>,
    hint: Box<dyn SystemHint>,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore").field("state", &self.state).finish_non_exhaustive()
    }
}

impl ThemeStore {
    pub fn new(slot: impl PreferenceSlot + 'static, hint: impl SystemHint + 'static) -> Self {
        Self { state: ThemeState::Unresolved, slot: Box::new(slot), hint: Box::new(hint) }
    }

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.state.effective()
    }

    /// Compute the starting theme from storage and the system hint.
    ///
    /// Does not change the store. An unreadable slot or an unrecognised stored
    /// value counts as "nothing stored".
    #[must_use]
    pub fn resolve_initial(&self) -> ThemeMode {
        let stored = match self.slot.load(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("theme storage unreadable, using system hint: {e}");
                None
            }
        };
        if let Some(raw) = stored.as_deref() {
            if let Err(e) = raw.parse::<ThemeMode>() {
                log::warn!("ignoring stored theme: {e}");
            }
        }
        resolve_initial(stored.as_deref(), self.hint.prefers_dark())
    }

    /// Adopt the starting theme once per session and persist it.
    ///
    /// Later calls return the current mode without consulting storage again.
    pub fn resolve(&mut self) -> ThemeMode {
        if let ThemeState::Resolved(mode) = self.state {
            return mode;
        }
        let mode = self.resolve_initial();
        self.set(mode);
        mode
    }

    /// Replace the theme and write it to the durable slot.
    pub fn set(&mut self, mode: ThemeMode) {
        self.state = ThemeState::Resolved(mode);
        if let Err(e) = self.slot.store(THEME_STORAGE_KEY, mode.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
    }

    /// String entry point for `set`; rejects anything but the two literals.
    ///
    /// # Errors
    ///
    /// Returns [`ParseThemeModeError`] without touching state or storage when
    /// `raw` is not `"light"` or `"dark"`.
    pub fn set_raw(&mut self, raw: &str) -> Result<(), ParseThemeModeError> {
        let mode = raw.parse::<ThemeMode>()?;
        self.set(mode);
        Ok(())
    }

    /// Flip the theme. Ignored (returns `None`) until the store is resolved.
    pub fn toggle(&mut self) -> Option<ThemeMode> {
        let ThemeState::Resolved(current) = self.state else {
            log::debug!("theme toggle ignored before resolution");
            return None;
        };
        let next = current.toggled();
        self.set(next);
        Some(next)
    }
}
