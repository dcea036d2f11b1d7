//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after start-up: the parsed config and the date the process
//! started, which stands in for the content's last-modified date.

use std::sync::Arc;

use time::{Date, OffsetDateTime};

use crate::config::SiteConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub started_on: Date,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        Self::with_start_date(config, OffsetDateTime::now_utc().date())
    }

    pub fn with_start_date(config: SiteConfig, started_on: Date) -> Self {
        Self { config: Arc::new(config), started_on }
    }
}
