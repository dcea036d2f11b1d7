//! Durable storage and system-hint seams for the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeStore` talks to the host only through [`PreferenceSlot`] and
//! [`SystemHint`]. The browser implementations read `localStorage` and the
//! `prefers-color-scheme` media query; the in-memory ones back tests and let
//! a "session restart" be simulated by sharing one slot between stores.
//!
//! TRADE-OFFS
//! ==========
//! Browser access is hydrate-only. Under SSR the local-storage slot reports
//! `Unavailable` and the media-query hint answers `false`, which keeps server
//! rendering deterministic.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::state::theme::ThemeMode;

/// Failure reading or writing the durable slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("durable storage is unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    ReadFailed(String),
    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

/// A session-surviving key-value slot.
pub trait PreferenceSlot {
    /// Read `key`. `Ok(None)` means nothing has been stored yet.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read-only "does the user agent prefer dark mode?" query.
pub trait SystemHint {
    fn prefers_dark(&self) -> bool;
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSlot;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl PreferenceSlot for LocalStorageSlot {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::ReadFailed(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::WriteFailed(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory slot. Clones share the same backing map.
#[derive(Clone, Debug)]
pub struct MemorySlot {
    values: Rc<RefCell<HashMap<String, String>>>,
    available: bool,
}

impl Default for MemorySlot {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self { values: Rc::new(RefCell::new(HashMap::new())), available: true }
    }

    /// A slot that fails every read and write, like a sandboxed host.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { values: Rc::new(RefCell::new(HashMap::new())), available: false }
    }

    /// A slot pre-populated with one entry.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let slot = Self::new();
        slot.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        slot
    }

    /// Current raw value for `key`, bypassing availability.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceSlot for MemorySlot {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        Ok(self.get(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `(prefers-color-scheme: dark)` media query.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQueryHint;

impl SystemHint for MediaQueryHint {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Hint with a fixed answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedHint(pub bool);

impl SystemHint for FixedHint {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Reflect `mode` on the `<html>` element (`dark` class + `data-theme`).
pub fn apply_document_theme(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let class_list = el.class_list();
            let _ = if mode.is_dark() { class_list.add_1("dark") } else { class_list.remove_1("dark") };
            let _ = el.set_attribute("data-theme", mode.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
