use super::*;
use crate::util::theme_storage::{FixedHint, MemorySlot};

fn resolved_store(slot: &MemorySlot, prefers_dark: bool) -> ThemeStore {
    let mut store = ThemeStore::new(slot.clone(), FixedHint(prefers_dark));
    store.resolve();
    store
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn theme_mode_default_is_dark() {
    assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    assert_eq!(ThemeMode::DEFAULT, ThemeMode::Dark);
}

#[test]
fn theme_mode_toggled_flips() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
}

#[test]
fn theme_mode_display_matches_stored_literals() {
    assert_eq!(ThemeMode::Light.to_string(), "light");
    assert_eq!(ThemeMode::Dark.to_string(), "dark");
}

#[test]
fn theme_mode_parses_only_the_two_literals() {
    assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
    assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
    assert_eq!("Dark".parse::<ThemeMode>(), Err(ParseThemeModeError("Dark".into())));
    assert!("".parse::<ThemeMode>().is_err());
    assert!("purple".parse::<ThemeMode>().is_err());
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn unresolved_state_renders_dark() {
    assert_eq!(ThemeState::default(), ThemeState::Unresolved);
    assert_eq!(ThemeState::Unresolved.effective(), ThemeMode::Dark);
    assert!(!ThemeState::Unresolved.is_resolved());
}

#[test]
fn resolved_state_exposes_its_mode() {
    let state = ThemeState::Resolved(ThemeMode::Light);
    assert_eq!(state.effective(), ThemeMode::Light);
    assert!(state.is_resolved());
}

// =============================================================
// resolve_initial (pure)
// =============================================================

#[test]
fn stored_value_wins_over_hint() {
    assert_eq!(resolve_initial(Some("light"), true), ThemeMode::Light);
    assert_eq!(resolve_initial(Some("dark"), false), ThemeMode::Dark);
}

#[test]
fn absent_value_falls_back_to_hint() {
    assert_eq!(resolve_initial(None, true), ThemeMode::Dark);
    assert_eq!(resolve_initial(None, false), ThemeMode::Light);
}

#[test]
fn invalid_value_is_treated_as_absent() {
    assert_eq!(resolve_initial(Some("purple"), false), ThemeMode::Light);
    assert_eq!(resolve_initial(Some("purple"), true), ThemeMode::Dark);
}

// =============================================================
// ThemeStore
// =============================================================

#[test]
fn store_resolution_prefers_persisted_value() {
    let slot = MemorySlot::with_value(THEME_STORAGE_KEY, "light");
    let store = ThemeStore::new(slot, FixedHint(true));
    assert_eq!(store.resolve_initial(), ThemeMode::Light);
}

#[test]
fn store_resolution_uses_hint_when_slot_is_empty() {
    let store = ThemeStore::new(MemorySlot::new(), FixedHint(true));
    assert_eq!(store.resolve_initial(), ThemeMode::Dark);
}

#[test]
fn store_resolution_ignores_invalid_stored_value() {
    let slot = MemorySlot::with_value(THEME_STORAGE_KEY, "purple");
    let store = ThemeStore::new(slot, FixedHint(false));
    assert_eq!(store.resolve_initial(), ThemeMode::Light);
}

#[test]
fn resolve_initial_has_no_side_effects() {
    let slot = MemorySlot::new();
    let store = ThemeStore::new(slot.clone(), FixedHint(false));
    let _ = store.resolve_initial();
    assert_eq!(store.state(), ThemeState::Unresolved);
    assert_eq!(slot.get(THEME_STORAGE_KEY), None);
}

#[test]
fn resolve_adopts_and_persists_initial_value() {
    let slot = MemorySlot::new();
    let mut store = ThemeStore::new(slot.clone(), FixedHint(false));
    assert_eq!(store.mode(), ThemeMode::Dark);

    assert_eq!(store.resolve(), ThemeMode::Light);
    assert_eq!(store.state(), ThemeState::Resolved(ThemeMode::Light));
    assert_eq!(slot.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn resolve_runs_once_per_session() {
    let slot = MemorySlot::new();
    let mut store = resolved_store(&slot, true);
    slot.store(THEME_STORAGE_KEY, "light").unwrap();

    assert_eq!(store.resolve(), ThemeMode::Dark);
    assert_eq!(store.mode(), ThemeMode::Dark);
}

#[test]
fn toggle_before_resolution_is_ignored() {
    let slot = MemorySlot::new();
    let mut store = ThemeStore::new(slot.clone(), FixedHint(false));

    assert_eq!(store.toggle(), None);
    assert_eq!(store.state(), ThemeState::Unresolved);
    assert_eq!(slot.get(THEME_STORAGE_KEY), None);
}

#[test]
fn toggle_twice_returns_to_original_mode() {
    for prefers_dark in [true, false] {
        let slot = MemorySlot::new();
        let mut store = resolved_store(&slot, prefers_dark);
        let original = store.mode();

        assert_eq!(store.toggle(), Some(original.toggled()));
        assert_eq!(slot.get(THEME_STORAGE_KEY).as_deref(), Some(original.toggled().as_str()));

        assert_eq!(store.toggle(), Some(original));
        assert_eq!(store.mode(), original);
        assert_eq!(slot.get(THEME_STORAGE_KEY).as_deref(), Some(original.as_str()));
    }
}

#[test]
fn set_survives_session_restart() {
    let slot = MemorySlot::new();
    let mut first = resolved_store(&slot, false);
    first.set(ThemeMode::Dark);

    for prefers_dark in [true, false] {
        let restarted = ThemeStore::new(slot.clone(), FixedHint(prefers_dark));
        assert_eq!(restarted.resolve_initial(), ThemeMode::Dark);
    }
}

#[test]
fn set_is_idempotent() {
    let slot = MemorySlot::new();
    let mut store = resolved_store(&slot, false);
    store.set(ThemeMode::Dark);
    store.set(ThemeMode::Dark);
    assert_eq!(store.mode(), ThemeMode::Dark);
    assert_eq!(slot.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn set_raw_rejects_invalid_values_without_writing() {
    let slot = MemorySlot::new();
    let mut store = resolved_store(&slot, false);

    let err = store.set_raw("purple").unwrap_err();
    assert_eq!(err, ParseThemeModeError("purple".into()));
    assert_eq!(store.mode(), ThemeMode::Light);
    assert_eq!(slot.get(THEME_STORAGE_KEY).as_deref(), Some("light"));

    store.set_raw("dark").unwrap();
    assert_eq!(store.mode(), ThemeMode::Dark);
}

#[test]
fn unavailable_storage_degrades_to_hint() {
    let mut store = ThemeStore::new(MemorySlot::unavailable(), FixedHint(true));
    assert_eq!(store.resolve_initial(), ThemeMode::Dark);
    assert_eq!(store.resolve(), ThemeMode::Dark);
}

#[test]
fn unavailable_storage_still_updates_memory() {
    let mut store = ThemeStore::new(MemorySlot::unavailable(), FixedHint(false));
    store.resolve();
    assert_eq!(store.toggle(), Some(ThemeMode::Dark));
    assert_eq!(store.mode(), ThemeMode::Dark);
}
