//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves everything: Leptos SSR for the page itself, the
//! compiled WASM bundle under `/pkg`, a few crawler endpoints, and the public
//! asset directory (images, CV) as the fallback.

pub mod seo;

use std::path::PathBuf;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Non-Leptos routes: crawler files and health.
fn site_routes(state: AppState) -> Router {
    Router::new()
        .route("/sitemap.xml", get(seo::sitemap))
        .route("/robots.txt", get(seo::robots))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full site router: SSR page, static bundle, crawler files, public assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| e.to_string())?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(portfolio::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || portfolio::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let public_service = ServeDir::new(&state.config.public_dir);
    tracing::info!(public_dir = %state.config.public_dir.display(), site_url = %state.config.site_url, "serving site");

    Ok(site_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(public_service)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
    pub started_on: String,
}

async fn healthz(State(state): State<AppState>) -> Json<Health> {
    Json(Health { status: "ok", started_on: state.started_on.to_string() })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
