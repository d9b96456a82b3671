// src/github/config.rs
// Settings for ActivityClient. The defaults talk to the public GitHub API;
// tests swap the base URL for a local mock server.

use url::Url;

use super::cache::DEFAULT_CACHE_CAPACITY;
use super::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com/";

/// GitHub rejects requests without a User-Agent header
pub const DEFAULT_USER_AGENT: &str = concat!("gh-activity/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root every endpoint path is joined onto. Always ends with '/'.
    pub base_url: Url,
    pub user_agent: String,
    /// How many distinct URLs the response cache keeps
    pub cache_capacity: usize,
}

impl ClientConfig {
    /// Replaces the API root, e.g. with a mock server's address
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ApiError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.user_agent.trim().is_empty() {
            return Err(ApiError::InvalidConfig(
                "user agent must not be empty".to_string(),
            ));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidConfig(format!(
                "'{}' cannot be used as a base URL",
                self.base_url
            )));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

// Url::join replaces the last path segment unless the base ends with '/',
// so "http://host/api" must become "http://host/api/"
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw)
        .map_err(|e| ApiError::InvalidConfig(format!("invalid base URL '{}': {}", raw, e)))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
