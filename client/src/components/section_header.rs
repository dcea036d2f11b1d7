//! Centered section title with accent underline.

use leptos::prelude::*;

#[component]
pub fn SectionHeader(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-header__title">{title}</h2>
            <div class="section-header__rule"></div>
            {subtitle.map(|text| view! { <p class="section-header__subtitle">{text}</p> })}
        </div>
    }
}

/// Pill badges for a tech stack list.
#[component]
pub fn TechBadges(items: &'static [&'static str], #[prop(optional)] compact: bool) -> impl IntoView {
    let class = if compact { "badge badge--compact" } else { "badge" };
    view! {
        <div class="badges">
            {items.iter().map(|item| view! { <span class=class>{*item}</span> }).collect_view()}
        </div>
    }
}
