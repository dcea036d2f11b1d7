//! Professional summary, highlights, and core competencies.

use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::data::personal::PERSONAL;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="container">
                <SectionHeader title="About Me"/>
                <div class="about__grid">
                    <div class="about__summary">
                        {PERSONAL.summary.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}

                        <h3 class="about__heading">"Professional Highlights"</h3>
                        <ul class="about__highlights">
                            {PERSONAL
                                .highlights
                                .iter()
                                .map(|item| view! { <li><span class="about__check">"✓"</span>{*item}</li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="about__competencies">
                        <h3 class="about__heading">"Core Competencies"</h3>
                        <div class="about__competency-grid">
                            {PERSONAL
                                .core_competencies
                                .iter()
                                .map(|item| view! { <div class="card about__competency">{*item}</div> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
