use axum::body::to_bytes;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use time::{Date, Month};

use super::*;
use crate::config::SiteConfig;

fn test_state() -> AppState {
    let config = SiteConfig::from_lookup(|key| (key == "SITE_URL").then(|| "https://portfolio.example.test".to_string()))
        .unwrap();
    let started = Date::from_calendar_date(2026, Month::October, 18).unwrap();
    AppState::with_start_date(config, started)
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn healthz_reports_ok_and_start_date() {
    let Json(health) = healthz(State(test_state())).await;
    assert_eq!(health, Health { status: "ok", started_on: "2026-10-18".into() });
}

#[tokio::test]
async fn sitemap_handler_serves_xml() {
    let response = seo::sitemap(State(test_state())).await.into_response();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/xml; charset=utf-8");
    let body = body_text(response).await;
    assert!(body.contains("<loc>https://portfolio.example.test</loc>"));
    assert!(body.contains("<lastmod>2026-10-18</lastmod>"));
}

#[tokio::test]
async fn robots_handler_serves_plain_text() {
    let response = seo::robots(State(test_state())).await.into_response();
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    let body = body_text(response).await;
    assert!(body.contains("Sitemap: https://portfolio.example.test/sitemap.xml"));
}
