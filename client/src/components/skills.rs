//! Tabbed skills matrix grouped by ML workflow stage.
//!
//! Wide screens get a tab strip, narrow screens a `<select>`. Both write the
//! same `UiState::active_skill_tab`, which is clamped to the category count.

use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::data::skills::{SKILL_CATEGORIES, SkillCategory};
use crate::state::ui::UiState;

#[component]
pub fn SkillsSection() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = move || ui.with(|u| u.active_skill_tab);
    let count = SKILL_CATEGORIES.len();

    view! {
        <section id="skills" class="section section--alt">
            <div class="container">
                <SectionHeader
                    title="Technical Expertise"
                    subtitle="Comprehensive skillset spanning the entire ML/AI lifecycle from data ingestion to production deployment"
                />

                <div class="skills__tabs" role="tablist">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            view! {
                                <button
                                    role="tab"
                                    class=move || if active() == index { "skills__tab skills__tab--active" } else { "skills__tab" }
                                    aria-selected=move || (active() == index).to_string()
                                    on:click=move |_| ui.update(|u| u.select_skill_tab(index, count))
                                >
                                    <span class="skills__tab-icon">{category.icon}</span>
                                    <span class="skills__tab-title">{category.title}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <select
                    class="skills__select"
                    prop:value=move || active().to_string()
                    on:change=move |ev| {
                        if let Ok(index) = event_target_value(&ev).parse::<usize>() {
                            ui.update(|u| u.select_skill_tab(index, count));
                        }
                    }
                >
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            view! { <option value=index.to_string()>{category.icon} " " {category.title}</option> }
                        })
                        .collect_view()}
                </select>

                <div class="card skills__panel">
                    {move || SKILL_CATEGORIES.get(active()).map(|category| view! { <SkillPanel category=category/> })}
                </div>

                <div class="skills__summary">
                    <h3>"End-to-End ML/AI Expertise"</h3>
                    <p>
                        "From data ingestion with Kafka and PySpark, through model training with PyTorch and TensorFlow, \
                         to production deployment on AWS with Docker and Kubernetes. Complete MLOps/LLMOps pipeline \
                         experience including GenAI, RAG, and multi-agent systems."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillPanel(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="skills__category">
            <div class="skills__category-header">
                <span class="skills__category-icon">{category.icon}</span>
                <h3>{category.title}</h3>
            </div>
            <p class="skills__category-description">{category.description}</p>
            <div class="skills__groups">
                {category
                    .skills
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="skills__group">
                                <h4>{group.name}</h4>
                                <div class="badges">
                                    {group.items.iter().map(|item| view! { <span class="badge badge--skill">{*item}</span> }).collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
