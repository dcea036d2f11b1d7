//! Crawler endpoints: `sitemap.xml` and `robots.txt`.
//!
//! The site is a single page, so the sitemap has exactly one entry. Its
//! `lastmod` is the server start date.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use time::Date;

use crate::state::AppState;

pub const CHANGE_FREQUENCY: &str = "monthly";
pub const PRIORITY: &str = "1.0";

/// Sitemap XML for the page at `site_url`.
pub fn render_sitemap(site_url: &str, lastmod: Date) -> String {
    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
            "  <url>\n",
            "    <loc>{url}</loc>\n",
            "    <lastmod>{lastmod}</lastmod>\n",
            "    <changefreq>{freq}</changefreq>\n",
            "    <priority>{priority}</priority>\n",
            "  </url>\n",
            "</urlset>\n",
        ),
        url = site_url,
        lastmod = lastmod,
        freq = CHANGE_FREQUENCY,
        priority = PRIORITY,
    )
}

/// Allow-all robots file pointing at the sitemap.
pub fn render_robots(site_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {site_url}/sitemap.xml\n")
}

pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&state.config.site_url, state.started_on),
    )
}

pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], render_robots(&state.config.site_url))
}

#[cfg(test)]
#[path = "seo_test.rs"]
mod tests;
