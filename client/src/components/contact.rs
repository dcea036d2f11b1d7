//! Contact details and call to action.

use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::data::personal::PERSONAL;

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = PERSONAL.contact;
    let tel = format!("tel:{}", contact.phone.replace(' ', ""));

    view! {
        <section id="contact" class="section section--alt">
            <div class="container">
                <SectionHeader
                    title="Get In Touch"
                    subtitle="Open to AI/ML engineering roles and collaborations. The fastest way to reach me is email."
                />
                <div class="contact__grid">
                    <a href=PERSONAL.social.email class="card contact__item">
                        <span class="contact__icon">"✉"</span>
                        <span class="contact__label">"Email"</span>
                        <span class="contact__value">{contact.email}</span>
                    </a>
                    <a href=tel class="card contact__item">
                        <span class="contact__icon">"☎"</span>
                        <span class="contact__label">"Phone"</span>
                        <span class="contact__value">{contact.phone}</span>
                    </a>
                    <div class="card contact__item">
                        <span class="contact__icon">"📍"</span>
                        <span class="contact__label">"Location"</span>
                        <span class="contact__value">{contact.location}</span>
                    </div>
                </div>
                <div class="contact__actions">
                    <a href=PERSONAL.social.email class="btn btn--primary">"Send an Email"</a>
                    <a href=PERSONAL.social.linkedin target="_blank" rel="noopener noreferrer" class="btn btn--outline">
                        "Connect on LinkedIn"
                    </a>
                </div>
            </div>
        </section>
    }
}
