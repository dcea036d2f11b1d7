//! Featured project cards.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::components::section_header::{SectionHeader, TechBadges};
use crate::data::personal::PERSONAL;
use crate::data::projects::{Project, ProjectCategory, featured_projects};

/// Badge modifier class for a project category.
pub fn category_class(category: ProjectCategory) -> &'static str {
    match category {
        ProjectCategory::GenAi => "category category--genai",
        ProjectCategory::MlOps => "category category--mlops",
        ProjectCategory::AgenticAi => "category category--agentic",
        ProjectCategory::Rag => "category category--rag",
        ProjectCategory::RealTimeMl => "category category--realtime",
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="section">
            <div class="container">
                <SectionHeader
                    title="Featured Projects"
                    subtitle="Production-ready ML systems and AI applications showcasing expertise across the ML/AI stack"
                />
                <div class="projects__grid">
                    {featured_projects().into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                </div>
                <div class="projects__more">
                    <a href=PERSONAL.social.github target="_blank" rel="noopener noreferrer" class="btn btn--dark">
                        "View All Projects on GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="card project-card">
            <header class="project-card__header">
                <span class=category_class(project.category)>{project.category.label()}</span>
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__tagline">{project.description}</p>
            </header>

            <div class="project-card__body">
                <p>{project.long_description}</p>

                {(!project.metrics.is_empty())
                    .then(|| {
                        view! {
                            <div class="project-card__metrics">
                                {project
                                    .metrics
                                    .iter()
                                    .map(|metric| {
                                        view! {
                                            <div class="metric">
                                                <div class="metric__value">{metric.value}</div>
                                                <div class="metric__label">{metric.label}</div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}

                <h4 class="project-card__stack-title">"Tech Stack"</h4>
                <TechBadges items=project.tech_stack compact=true/>

                <div class="project-card__links">
                    {project.links.github.map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="btn btn--dark">
                                "View Code"
                            </a>
                        }
                    })}
                    {project.links.live.map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="btn btn--primary">
                                "Live Demo"
                            </a>
                        }
                    })}
                    {project.links.demo.map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="btn btn--outline">
                                "Watch Demo"
                            </a>
                        }
                    })}
                </div>
            </div>
        </article>
    }
}
