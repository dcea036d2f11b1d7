use super::*;
use crate::state::theme::THEME_STORAGE_KEY;
use crate::util::theme_storage::{FixedHint, MemorySlot, PreferenceSlot};

#[test]
fn use_theme_outside_provider_returns_safe_default() {
    let theme = use_theme();
    assert!(!theme.is_scoped());
    assert_eq!(theme.mode(), ThemeMode::Dark);

    theme.toggle_theme();
    assert_eq!(theme.mode(), ThemeMode::Dark);
}

#[test]
fn detached_toggle_touches_no_storage() {
    let slot = MemorySlot::new();
    let theme = UseTheme::detached();
    theme.toggle_theme();
    theme.toggle_theme();
    assert!(theme.is_dark());
    assert_eq!(slot.get(THEME_STORAGE_KEY), None);
}

#[test]
fn provided_context_renders_dark_until_resolved() {
    let owner = Owner::new();
    owner.with(|| {
        let slot = MemorySlot::new();
        let ctx = ThemeContext::new(ThemeStore::new(slot.clone(), FixedHint(false)));
        provide_context(ctx);

        let theme = use_theme();
        assert!(theme.is_scoped());
        assert_eq!(ctx.state(), ThemeState::Unresolved);
        assert_eq!(theme.mode(), ThemeMode::Dark);

        theme.toggle_theme();
        assert_eq!(ctx.state(), ThemeState::Unresolved);
        assert_eq!(slot.get(THEME_STORAGE_KEY), None);
    });
}

#[test]
fn provided_context_toggles_after_resolution() {
    let owner = Owner::new();
    owner.with(|| {
        let slot = MemorySlot::new();
        let ctx = ThemeContext::new(ThemeStore::new(slot.clone(), FixedHint(false)));
        provide_context(ctx);
        let theme = use_theme();

        assert_eq!(ctx.resolve(), ThemeMode::Light);
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert_eq!(slot.get(THEME_STORAGE_KEY).as_deref(), Some("light"));

        theme.toggle_theme();
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(slot.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));

        theme.toggle_theme();
        assert_eq!(theme.mode(), ThemeMode::Light);
    });
}

#[test]
fn every_consumer_observes_the_same_value() {
    let owner = Owner::new();
    owner.with(|| {
        let slot = MemorySlot::with_value(THEME_STORAGE_KEY, "dark");
        let ctx = ThemeContext::new(ThemeStore::new(slot, FixedHint(false)));
        provide_context(ctx);
        ctx.resolve();

        let nav = use_theme();
        let section = use_theme();
        nav.toggle_theme();
        assert_eq!(nav.mode(), ThemeMode::Light);
        assert_eq!(section.mode(), ThemeMode::Light);
    });
}

#[test]
fn resolve_is_stable_on_repeat() {
    let owner = Owner::new();
    owner.with(|| {
        let slot = MemorySlot::new();
        let ctx = ThemeContext::new(ThemeStore::new(slot.clone(), FixedHint(true)));
        assert_eq!(ctx.resolve(), ThemeMode::Dark);
        slot.store(THEME_STORAGE_KEY, "light").unwrap();
        assert_eq!(ctx.resolve(), ThemeMode::Dark);
    });
}
