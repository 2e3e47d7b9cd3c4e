//! Application configuration
//!
//! The only tunable is the base URL of the events service, taken from the
//! `DUOCAL_API_URL` environment variable. The URL is validated at startup so
//! that a typo fails fast instead of surfacing as a network error on every
//! call.

use crate::error::{AppError, AppResult};
use crate::http_config::HttpConfig;
use log::{info, warn};
use std::env;
use url::Url;

pub const API_URL_ENV: &str = "DUOCAL_API_URL";

const DEFAULT_API_URL: &str = "https://carlevato.net/api/";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
    pub http: HttpConfig,
}

impl AppConfig {
    /// Load configuration from the environment, falling back to the default
    /// service URL.
    pub fn from_env() -> AppResult<Self> {
        let raw = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let base_url = parse_base_url(&raw)?;
        info!("Using events service at {}", base_url);
        Ok(Self {
            base_url,
            http: HttpConfig::default(),
        })
    }
}

/// Validates the service base URL and normalizes it to a trailing slash so
/// that `Url::join` keeps the full path ("/api" + "events" would otherwise
/// drop the "api" segment).
pub fn parse_base_url(raw: &str) -> AppResult<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::config(
            "Service URL cannot be empty. Set DUOCAL_API_URL to the events service base URL.",
        ));
    }

    let mut url = Url::parse(trimmed)
        .map_err(|e| AppError::config(format!("Invalid service URL '{}': {}", trimmed, e)))?;

    match url.scheme() {
        "https" => {}
        "http" => warn!("Service URL uses plain HTTP: {}", url),
        other => {
            return Err(AppError::config(format!(
                "Service URL must use http or https, got '{}://'",
                other
            )))
        }
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(AppError::config(format!(
            "Service URL must have a host: '{}'",
            trimmed
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_base_url_appends_trailing_slash() {
        let url = parse_base_url("https://example.com/api").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/");
    }

    #[test]
    fn test_parse_base_url_keeps_existing_slash() {
        let url = parse_base_url("https://example.com/api/").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/");
    }

    #[test]
    fn test_parse_base_url_rejects_empty() {
        assert!(parse_base_url("   ").is_err());
    }

    #[test]
    fn test_parse_base_url_rejects_unknown_scheme() {
        let result = parse_base_url("ftp://example.com/api");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("http or https"));
    }

    #[test]
    #[serial]
    fn test_from_env_default() {
        std::env::remove_var(API_URL_ENV);
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.base_url.as_str(), "https://carlevato.net/api/");
    }

    #[test]
    #[serial]
    fn test_from_env_override() {
        std::env::set_var(API_URL_ENV, "http://localhost:5001/api");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:5001/api/");
        std::env::remove_var(API_URL_ENV);
    }
}
