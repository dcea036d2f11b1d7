//! Landing section: name, title, typed tagline, and headline stats.

use leptos::prelude::*;

use crate::data::personal::PERSONAL;
use crate::util::typing::TypingAnimation;

#[component]
pub fn Hero() -> impl IntoView {
    let typing = RwSignal::new(TypingAnimation::new(PERSONAL.tagline));

    // Server render shows an empty tagline; the browser types it in.
    #[cfg(feature = "hydrate")]
    {
        use crate::util::typing::TYPING_INTERVAL_MS;

        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TYPING_INTERVAL_MS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let advanced = typing.try_update(TypingAnimation::advance).unwrap_or(false);
                if !advanced {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let typed = move || typing.with(|t| t.visible().to_owned());

    view! {
        <section id="home" class="hero">
            <div class="container hero__grid">
                <div class="hero__text">
                    <h1 class="hero__name">{PERSONAL.name}</h1>
                    <h2 class="hero__title">{PERSONAL.title}</h2>
                    <p class="hero__tagline">
                        {typed}
                        <span class="hero__caret">"|"</span>
                    </p>
                    <p class="hero__location">"📍 " {PERSONAL.location}</p>

                    <div class="hero__actions">
                        <a href="#projects" class="btn btn--primary">"View My Work"</a>
                        <a href="#contact" class="btn btn--outline">"Get In Touch"</a>
                    </div>

                    <div class="hero__social">
                        <a href=PERSONAL.social.github target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                            "GitHub"
                        </a>
                        <a href=PERSONAL.social.linkedin target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                            "LinkedIn"
                        </a>
                        <a href=PERSONAL.social.email aria-label="Email">"Email"</a>
                    </div>
                </div>

                <div class="hero__aside">
                    <div class="hero__photo">
                        <img src="/images/profile.jpg" alt=PERSONAL.name/>
                    </div>
                    <div class="hero__stats">
                        {PERSONAL
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat-card">
                                        <div class="stat-card__value">{stat.value}</div>
                                        <div class="stat-card__label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <a href="#about" class="hero__scroll" aria-label="Scroll to about">"↓"</a>
        </section>
    }
}
