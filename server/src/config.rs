//! Site configuration parsed from environment variables.

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_URL: &str = "https://yourdomain.com";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid SITE_URL (expected http:// or https://): {0}")]
    InvalidSiteUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    /// Canonical public URL, without a trailing slash.
    pub site_url: String,
    /// Directory of static assets served as the fallback.
    pub public_dir: PathBuf,
}

impl SiteConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_URL`: default `https://yourdomain.com`
    /// - `PUBLIC_DIR`: default `public/` at the workspace root
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let site_url = parse_site_url(lookup("SITE_URL").as_deref())?;
        let public_dir = lookup("PUBLIC_DIR").map_or_else(default_public_dir, PathBuf::from);
        Ok(Self { port, site_url, public_dir })
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_string())),
    }
}

fn parse_site_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_SITE_URL);
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidSiteUrl(value.to_string()));
    }
    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
