//! API endpoint configuration.
//!
//! The base URL comes from `API_URL` (process env for native builds,
//! compile-time env for the browser build) and falls back to the local
//! development server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
pub const API_URL_ENV: &str = "API_URL";

/// Storage key under which the bearer token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build config from the `API_URL` environment variable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(API_URL_ENV).ok().as_deref())
    }

    /// Build config from an optional raw base URL; blank values use the default.
    #[must_use]
    pub fn from_value(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::with_base_url(url),
            None => Self::default(),
        }
    }

    #[must_use]
    pub fn with_base_url(url: &str) -> Self {
        Self { base_url: url.trim_end_matches('/').to_owned() }
    }
}
