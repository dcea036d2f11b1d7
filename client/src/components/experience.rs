//! Work history timeline with expandable project write-ups.
//!
//! Each position lists achievements and stack, then its featured projects as
//! an accordion. At most one project per position is open; the open index
//! lives in `UiState::expanded_projects` keyed by experience id.

use leptos::prelude::*;

use crate::components::architecture_diagram::ArchitectureDiagram;
use crate::components::section_header::{SectionHeader, TechBadges};
use crate::data::architectures::architecture_for;
use crate::data::experience::{EXPERIENCES, Experience, ProjectDetail};
use crate::state::ui::UiState;
use crate::util::text::sentence_bullets;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="section section--alt">
            <div class="container">
                <SectionHeader title="Professional Journey"/>
                <div class="timeline">
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(index, exp)| view! { <ExperienceCard exp=exp index=index/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(exp: &'static Experience, index: usize) -> impl IntoView {
    let side = if index % 2 == 0 { "timeline__item timeline__item--left" } else { "timeline__item timeline__item--right" };

    view! {
        <div class=side>
            <div class="timeline__dot"></div>
            <article class="card experience">
                <header class="experience__header">
                    <div>
                        <h3 class="experience__title">{exp.title}</h3>
                        <div class="experience__company">{exp.company}</div>
                        <div class="experience__location">{exp.location}</div>
                    </div>
                    <div class="experience__period">
                        <span>{exp.period}</span>
                        {exp.current.then(|| view! { <span class="pill pill--current">"Current"</span> })}
                    </div>
                </header>

                <h4 class="experience__subheading">"Key Achievements"</h4>
                <ul class="experience__achievements">
                    {exp.achievements.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>

                <h4 class="experience__subheading experience__subheading--small">"Technologies Used"</h4>
                <TechBadges items=exp.tech_stack/>

                {(!exp.projects.is_empty())
                    .then(|| {
                        view! {
                            <div class="experience__projects">
                                <h4 class="experience__subheading">"Featured Projects"</h4>
                                {exp
                                    .projects
                                    .iter()
                                    .enumerate()
                                    .map(|(i, project)| view! { <ProjectAccordion exp_id=exp.id index=i project=project/> })
                                    .collect_view()}
                            </div>
                        }
                    })}

                {exp.project_link.map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="experience__link">
                            "View project ↗"
                        </a>
                    }
                })}
            </article>
        </div>
    }
}

#[component]
fn ProjectAccordion(exp_id: &'static str, index: usize, project: &'static ProjectDetail) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let expanded = move || ui.with(|u| u.is_project_expanded(exp_id, index));

    view! {
        <div class="accordion">
            <button
                class="accordion__header"
                on:click=move |_| ui.update(|u| u.toggle_project(exp_id, index))
                aria-expanded=move || expanded().to_string()
            >
                <div class="accordion__summary">
                    <h5>{project.name}</h5>
                    <p>{project.description}</p>
                </div>
                <span class=move || {
                    if expanded() { "accordion__chevron accordion__chevron--open" } else { "accordion__chevron" }
                }>"▾"</span>
            </button>
            <Show when=expanded>
                <ProjectDetailBody project=project/>
            </Show>
        </div>
    }
}

#[component]
fn ProjectDetailBody(project: &'static ProjectDetail) -> impl IntoView {
    let diagram = project.architecture_id.and_then(architecture_for);

    view! {
        <div class="accordion__body">
            {project
                .architecture
                .iter()
                .map(|(stage, paragraph)| {
                    view! {
                        <div class="stage">
                            <h6 class="stage__title">{stage.title()}</h6>
                            <ul class="stage__bullets">
                                {sentence_bullets(paragraph).into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}

            {diagram.map(|arch| view! { <ArchitectureDiagram arch=arch title=project.name/> })}

            <h6 class="accordion__stack-title">"Tech Stack"</h6>
            <TechBadges items=project.tech_stack compact=true/>
        </div>
    }
}
