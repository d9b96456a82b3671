// src/github/client.rs
// =============================================================================
// The one place that talks to the GitHub REST API.
//
// Endpoints used (both public, no authentication):
// - GET /users/{username}/events                     -> recent events
// - GET /repos/{repo}/compare/{before}...{head}       -> commits in a push
//
// Responsibilities:
// - Build endpoint URLs under the configured base URL
// - Send the request with our User-Agent (GitHub rejects requests without one)
// - Map statuses, connection failures and bad JSON onto ApiError
// - Remember parsed responses per URL so repeated lookups skip the network
//
// Requests run one at a time; the cache is plain owned state behind &mut self.
// =============================================================================

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::Write;
use tracing::{debug, instrument, warn};
use url::Url;

use super::cache::ResponseCache;
use super::config::ClientConfig;
use super::error::ApiError;
use super::types::{CompareResult, Event};

#[derive(Debug)]
pub struct ActivityClient {
    http: Client,
    base_url: Url,
    cache: ResponseCache,
}

impl ActivityClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        config.validate()?;

        // The HTTP client is built once and reused for every request
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ApiError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url,
            cache: ResponseCache::new(config.cache_capacity),
        })
    }

    /// Fetches the public events of `username`, newest first.
    ///
    /// A 404 from GitHub comes back as `ApiError::NotFound`.
    #[instrument(skip(self))]
    pub async fn get_user_events(&mut self, username: &str) -> Result<Vec<Event>, ApiError> {
        let url = self.endpoint(&format!("users/{}/events", username))?;
        let events: Vec<Event> = self.get_json(url).await?;
        debug!(count = events.len(), "fetched user events");
        Ok(events)
    }

    /// Number of commits between two SHAs of `repo_name` ("owner/repo").
    #[instrument(skip(self))]
    pub async fn compare_commit_count(
        &mut self,
        repo_name: &str,
        sha_before: &str,
        sha_head: &str,
    ) -> Result<usize, ApiError> {
        let url = self.endpoint(&format!(
            "repos/{}/compare/{}...{}",
            repo_name, sha_before, sha_head
        ))?;
        let compare: CompareResult = self.get_json(url).await?;
        Ok(compare.commits.len())
    }

    /// Like `compare_commit_count`, but never fails.
    ///
    /// Any error (a 404 included) is written to `out` as a warning and turned
    /// into `None`, so one bad lookup doesn't stop the rest of the listing.
    pub async fn get_commit_count<W: Write>(
        &mut self,
        repo_name: &str,
        sha_before: &str,
        sha_head: &str,
        out: &mut W,
    ) -> Option<usize> {
        match self
            .compare_commit_count(repo_name, sha_before, sha_head)
            .await
        {
            Ok(count) => Some(count),
            Err(e) => {
                warn!(repo = repo_name, error = %e, "commit count lookup failed");
                let _ = writeln!(out, " (Warning: could not fetch commit count: {})", e);
                None
            }
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidConfig(format!("cannot build URL for '{}': {}", path, e)))
    }

    async fn get_json<T: DeserializeOwned>(&mut self, url: Url) -> Result<T, ApiError> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_value(body)?)
    }

    // GET `url` and parse the body as JSON, answering from the cache when the
    // exact same URL was fetched before. Failures are never cached.
    async fn fetch(&mut self, url: Url) -> Result<Value, ApiError> {
        if let Some(body) = self.cache.get(url.as_str()) {
            debug!(url = %url, "cache hit");
            return Ok(body.clone());
        }

        debug!(url = %url, cached = self.cache.len(), "requesting");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        // Read the full body before looking at the status so the connection
        // is handed back on every path
        let bytes = response.bytes().await?;
        check_status(&url, status)?;

        let body: Value = serde_json::from_slice(&bytes)?;
        self.cache.insert(url.to_string(), body.clone());
        Ok(body)
    }
}

// Only 200 counts as success, as documented for these endpoints
fn check_status(url: &Url, status: StatusCode) -> Result<(), ApiError> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound {
            url: url.to_string(),
        }),
        other if other.is_success() => Err(ApiError::UnexpectedStatus {
            status: other.as_u16(),
        }),
        other => Err(ApiError::Http {
            status: other.as_u16(),
            reason: other.canonical_reason().unwrap_or("Unknown").to_string(),
        }),
    }
}
