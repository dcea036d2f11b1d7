use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_menu_closed() {
    let state = UiState::default();
    assert!(!state.menu_open);
}

#[test]
fn ui_state_default_first_skill_tab() {
    let state = UiState::default();
    assert_eq!(state.active_skill_tab, 0);
}

#[test]
fn ui_state_default_nothing_expanded() {
    let state = UiState::default();
    assert!(state.expanded_projects.is_empty());
    assert_eq!(state.expanded_project("akkodis-research"), None);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn toggle_menu_flips_and_close_menu_closes() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
    state.toggle_menu();
    state.close_menu();
    assert!(!state.menu_open);
}

// =============================================================
// Skill tabs
// =============================================================

#[test]
fn select_skill_tab_sets_index() {
    let mut state = UiState::default();
    state.select_skill_tab(3, 8);
    assert_eq!(state.active_skill_tab, 3);
}

#[test]
fn select_skill_tab_clamps_to_last_tab() {
    let mut state = UiState::default();
    state.select_skill_tab(42, 8);
    assert_eq!(state.active_skill_tab, 7);
    state.select_skill_tab(5, 0);
    assert_eq!(state.active_skill_tab, 0);
}

// =============================================================
// Project accordion
// =============================================================

#[test]
fn toggle_project_expands_then_collapses() {
    let mut state = UiState::default();
    state.toggle_project("exp-a", 1);
    assert!(state.is_project_expanded("exp-a", 1));
    state.toggle_project("exp-a", 1);
    assert!(!state.is_project_expanded("exp-a", 1));
    assert_eq!(state.expanded_project("exp-a"), None);
}

#[test]
fn toggle_project_replaces_sibling() {
    let mut state = UiState::default();
    state.toggle_project("exp-a", 0);
    state.toggle_project("exp-a", 1);
    assert!(!state.is_project_expanded("exp-a", 0));
    assert!(state.is_project_expanded("exp-a", 1));
}

#[test]
fn toggle_project_is_independent_per_experience() {
    let mut state = UiState::default();
    state.toggle_project("exp-a", 0);
    state.toggle_project("exp-b", 0);
    assert!(state.is_project_expanded("exp-a", 0));
    assert!(state.is_project_expanded("exp-b", 0));
    state.toggle_project("exp-a", 0);
    assert!(state.is_project_expanded("exp-b", 0));
}
