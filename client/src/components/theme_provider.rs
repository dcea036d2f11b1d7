//! Scoped theme accessor for the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeProvider` owns the session's `ThemeStore` and publishes a
//! `ThemeContext` to every descendant. Components call [`use_theme`] and get
//! exactly two things back: the current mode and a toggle.
//!
//! Resolution runs in an effect, so it happens in the browser after the first
//! render; until then consumers render the default dark variant. Outside any
//! provider `use_theme` hands back a detached accessor (dark, no-op toggle)
//! instead of panicking.

#[cfg(test)]
#[path = "theme_provider_test.rs"]
mod theme_provider_test;

use leptos::prelude::*;

use crate::state::theme::{ThemeMode, ThemeState, ThemeStore};
use crate::util::theme_storage::{LocalStorageSlot, MediaQueryHint, apply_document_theme};

/// Reactive handle on the session's theme store.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    state: RwSignal<ThemeState>,
    store: StoredValue<ThemeStore, LocalStorage>,
}

impl ThemeContext {
    pub fn new(store: ThemeStore) -> Self {
        Self { state: RwSignal::new(store.state()), store: StoredValue::new_local(store) }
    }

    /// Current lifecycle state (tracked).
    pub fn state(&self) -> ThemeState {
        self.state.get()
    }

    /// Current mode (tracked); dark while unresolved.
    pub fn mode(&self) -> ThemeMode {
        self.state.get().effective()
    }

    /// Adopt the starting theme. Only the first call consults storage.
    pub fn resolve(&self) -> ThemeMode {
        let mode = self
            .store
            .try_update_value(ThemeStore::resolve)
            .unwrap_or(ThemeMode::DEFAULT);
        self.state.set(ThemeState::Resolved(mode));
        mode
    }

    /// Flip the theme; ignored until resolved.
    pub fn toggle(&self) {
        if let Some(next) = self.store.try_update_value(ThemeStore::toggle).flatten() {
            self.state.set(ThemeState::Resolved(next));
        }
    }
}

/// What consumers see: the mode and a zero-argument toggle.
#[derive(Clone, Copy)]
pub struct UseTheme {
    context: Option<ThemeContext>,
}

impl UseTheme {
    /// Accessor not bound to any provider.
    pub fn detached() -> Self {
        Self { context: None }
    }

    /// Whether a provider backs this accessor.
    pub fn is_scoped(&self) -> bool {
        self.context.is_some()
    }

    pub fn mode(&self) -> ThemeMode {
        self.context.map_or(ThemeMode::DEFAULT, |ctx| ctx.mode())
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    pub fn toggle_theme(&self) {
        if let Some(ctx) = self.context {
            ctx.toggle();
        }
    }
}

/// Look up the nearest theme provider, falling back to a detached accessor.
pub fn use_theme() -> UseTheme {
    UseTheme { context: use_context::<ThemeContext>() }
}

/// Provides the session theme to `children`.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = ThemeContext::new(ThemeStore::new(LocalStorageSlot, MediaQueryHint));
    provide_context(theme);

    Effect::new(move || {
        let mode = theme.resolve();
        log::debug!("theme resolved to {mode}");
    });

    Effect::new(move || {
        if let ThemeState::Resolved(mode) = theme.state() {
            apply_document_theme(mode);
        }
    });

    children()
}
