//! API client configuration.
//!
//! Defaults point at the local backend with credentials included. The base
//! URL can be baked in at compile time (`SOCIAL_NET_API_URL`) for browser
//! builds, and both values can be overridden from the process environment
//! on native targets.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const INFO_PATH: &str = "/api/info";

pub const API_URL_ENV: &str = "SOCIAL_NET_API_URL";
pub const INCLUDE_CREDENTIALS_ENV: &str = "SOCIAL_NET_INCLUDE_CREDENTIALS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin without a trailing slash.
    pub base_url: String,
    /// Send session cookies with every request.
    pub include_credentials: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: parse_base_url(option_env!("SOCIAL_NET_API_URL")),
            include_credentials: true,
        }
    }
}

impl ApiConfig {
    /// Build config from the defaults plus runtime environment overrides.
    ///
    /// Optional:
    /// - `SOCIAL_NET_API_URL`: backend origin
    /// - `SOCIAL_NET_INCLUDE_CREDENTIALS`: `1/true/yes/on` or `0/false/no/off`
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .map_or(defaults.base_url, |raw| parse_base_url(Some(&raw)));
        let include_credentials = std::env::var(INCLUDE_CREDENTIALS_ENV)
            .ok()
            .and_then(|raw| parse_bool(&raw))
            .unwrap_or(defaults.include_credentials);
        Self { base_url, include_credentials }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = parse_base_url(Some(base_url));
        self
    }

    #[must_use]
    pub fn with_credentials(mut self, include: bool) -> Self {
        self.include_credentials = include;
        self
    }

    /// Absolute URL of the user-info endpoint.
    #[must_use]
    pub fn info_url(&self) -> String {
        format!("{}{INFO_PATH}", self.base_url)
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE_URL.to_owned(),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
