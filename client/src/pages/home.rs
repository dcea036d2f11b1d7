//! Single-page portfolio: navigation, every section in scroll order, footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/`. Section ids double as the navigation anchors; sections
//! render in scroll order.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::ContactSection;
use crate::components::education::EducationSection;
use crate::components::experience::ExperienceSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navigation::Navigation;
use crate::components::projects::ProjectsSection;
use crate::components::skills::SkillsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Navigation/>
            <main>
                <Hero/>
                <About/>
                <ExperienceSection/>
                <ProjectsSection/>
                <SkillsSection/>
                <EducationSection/>
                <ContactSection/>
            </main>
            <Footer/>
        </div>
    }
}
