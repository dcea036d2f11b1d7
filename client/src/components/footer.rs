//! Page footer with social links and attribution.

use leptos::prelude::*;

use crate::data::personal::PERSONAL;
use crate::util::text::copyright_line;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer__inner">
                <div class="footer__social">
                    <a href=PERSONAL.social.github target="_blank" rel="noopener noreferrer">"GitHub"</a>
                    <a href=PERSONAL.social.linkedin target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                    <a href=PERSONAL.social.email>"Email"</a>
                </div>
                <p class="footer__copyright">{copyright_line(PERSONAL.name)}</p>
            </div>
        </footer>
    }
}
