//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component per page section, plus the theme provider and shared
//! presentational pieces. Sections read static content from `data` and
//! shared state from Leptos context providers.

pub mod about;
pub mod architecture_diagram;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod projects;
pub mod section_header;
pub mod skills;
pub mod theme_provider;
