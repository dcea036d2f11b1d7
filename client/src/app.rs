//! Root application component with routing, SEO tags, and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::theme_provider::ThemeProvider;
use crate::data::personal::SEO;
use crate::pages::home::HomePage;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Title, description, Open Graph, and Twitter card tags.
#[component]
fn SeoTags() -> impl IntoView {
    let keywords = SEO.keywords_csv();
    let og_image = SEO.absolute_url(SEO.og_image);

    view! {
        <Title text=SEO.title/>
        <Meta name="description" content=SEO.description/>
        <Meta name="keywords" content=keywords/>
        <Meta name="author" content=SEO.author/>
        <Meta name="robots" content="index, follow"/>

        <Meta property="og:type" content="website"/>
        <Meta property="og:url" content=SEO.site_url/>
        <Meta property="og:title" content=SEO.title/>
        <Meta property="og:description" content=SEO.description/>
        <Meta property="og:image" content=og_image.clone()/>

        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=SEO.title/>
        <Meta name="twitter:description" content=SEO.description/>
        <Meta name="twitter:image" content=og_image/>

        <Link rel="icon" href="/favicon.ico"/>
        <Link rel="canonical" href=SEO.site_url/>
    }
}

/// Root application component.
///
/// Provides the UI and theme contexts and mounts the single home route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <SeoTags/>

        <ThemeProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </ThemeProvider>
    }
}
