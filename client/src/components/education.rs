//! Academic background and professional certifications.

use leptos::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::data::education::{CERTIFICATIONS, Certification, EDUCATION, Education, EducationStatus};

fn status_class(status: EducationStatus) -> &'static str {
    match status {
        EducationStatus::Completed => "pill pill--completed",
        EducationStatus::InProgress => "pill pill--in-progress",
        EducationStatus::Expected => "pill pill--expected",
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id="education" class="section">
            <div class="container">
                <SectionHeader title="Education & Certifications"/>
                <div class="education__grid">
                    <div class="education__degrees">
                        <h3 class="education__heading">"🎓 Academic Background"</h3>
                        {EDUCATION.iter().map(|edu| view! { <DegreeCard edu=edu/> }).collect_view()}
                    </div>
                    <div class="education__certs">
                        <h3 class="education__heading">"🏅 Certifications"</h3>
                        {CERTIFICATIONS.iter().map(|cert| view! { <CertificationCard cert=cert/> }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn DegreeCard(edu: &'static Education) -> impl IntoView {
    view! {
        <div class="card degree">
            <div class="degree__header">
                <div>
                    <h4 class="degree__title">{edu.degree}</h4>
                    <p class="degree__institution">{edu.institution}</p>
                </div>
                <span class=status_class(edu.status)>{edu.status.label()}</span>
            </div>
            <div class="degree__period">{edu.period}</div>
            {edu.description.map(|text| view! { <p class="degree__description">{text}</p> })}
            {(!edu.highlights.is_empty())
                .then(|| {
                    view! {
                        <div class="badges">
                            {edu.highlights.iter().map(|h| view! { <span class="badge badge--compact">{*h}</span> }).collect_view()}
                        </div>
                    }
                })}
        </div>
    }
}

#[component]
fn CertificationCard(cert: &'static Certification) -> impl IntoView {
    view! {
        <div class="card certification">
            <div class="certification__logo">{cert.logo.unwrap_or("📜")}</div>
            <div class="certification__body">
                <h4 class="certification__name">{cert.name}</h4>
                <p class="certification__issuer">{cert.issuer}</p>
                <p class="certification__date">"Issued: " {cert.date}</p>
                {cert.credential_id.map(|id| view! { <p class="certification__credential">"Credential ID: " {id}</p> })}
                {cert.description.map(|text| view! { <p class="certification__description">{text}</p> })}
                {cert.verification_url.map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="certification__verify">
                            "Verify credential ↗"
                        </a>
                    }
                })}
            </div>
        </div>
    }
}
