//! Local UI chrome state (mobile menu, skill tab, project accordions).
//!
//! DESIGN
//! ======
//! Transient presentation state, provided through context as one
//! `RwSignal<UiState>`. Nothing here is persisted; the theme lives in
//! `state::theme`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::HashMap;

/// UI state for the navigation menu, skills tabs, and experience accordions.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub menu_open: bool,
    pub active_skill_tab: usize,
    /// Expanded project index per experience id. At most one per experience.
    pub expanded_projects: HashMap<String, usize>,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Select a skills tab, clamping to the last of `tab_count` tabs.
    pub fn select_skill_tab(&mut self, index: usize, tab_count: usize) {
        self.active_skill_tab = index.min(tab_count.saturating_sub(1));
    }

    /// Expand `(experience_id, project_index)`, or collapse it if it is the
    /// expanded one. Expanding replaces any other project of that experience.
    pub fn toggle_project(&mut self, experience_id: &str, project_index: usize) {
        if self.expanded_projects.get(experience_id) == Some(&project_index) {
            self.expanded_projects.remove(experience_id);
        } else {
            self.expanded_projects.insert(experience_id.to_owned(), project_index);
        }
    }

    #[must_use]
    pub fn expanded_project(&self, experience_id: &str) -> Option<usize> {
        self.expanded_projects.get(experience_id).copied()
    }

    #[must_use]
    pub fn is_project_expanded(&self, experience_id: &str, project_index: usize) -> bool {
        self.expanded_project(experience_id) == Some(project_index)
    }
}
