//! Fixed header with section links, theme toggle, and CV download.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only component that writes the theme. Everything else reads it through
//! the `dark` class the provider applies to `<html>`.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

use crate::components::theme_provider::use_theme;
use crate::data::personal::PERSONAL;
use crate::state::theme::ThemeMode;
use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Experience", href: "#experience" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "Skills", href: "#skills" },
    NavLink { name: "Contact", href: "#contact" },
];

/// Icon for the desktop toggle: the mode you would switch to.
pub fn theme_toggle_icon(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "☀",
        ThemeMode::Light => "☾",
    }
}

/// Label for the mobile menu toggle.
pub fn theme_toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "☀ Light Mode",
        ThemeMode::Light => "☾ Dark Mode",
    }
}

/// Top navigation bar.
#[component]
pub fn Navigation() -> impl IntoView {
    let theme = use_theme();
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = move || ui.with(|u| u.menu_open);

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <a href="#home" class="nav__logo">{PERSONAL.first_name()}</a>

                <div class="nav__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="nav__link">{link.name}</a> })
                        .collect_view()}
                    <button
                        class="nav__theme-toggle"
                        on:click=move |_| theme.toggle_theme()
                        aria-label="Toggle dark mode"
                        title="Toggle dark mode"
                    >
                        {move || theme_toggle_icon(theme.mode())}
                    </button>
                    <a href=PERSONAL.resume.path download=PERSONAL.resume.filename class="btn btn--primary">
                        "Download CV"
                    </a>
                </div>

                <button
                    class="nav__menu-toggle"
                    on:click=move |_| ui.update(UiState::toggle_menu)
                    aria-label="Toggle menu"
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=menu_open>
                <div class="nav__mobile">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="nav__mobile-link"
                                    on:click=move |_| ui.update(UiState::close_menu)
                                >
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <div class="nav__mobile-actions">
                        <button class="btn nav__mobile-theme" on:click=move |_| theme.toggle_theme()>
                            {move || theme_toggle_label(theme.mode())}
                        </button>
                        <a href=PERSONAL.resume.path download=PERSONAL.resume.filename class="btn btn--primary">
                            "Download CV"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
