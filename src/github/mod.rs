// src/github/mod.rs
// =============================================================================
// This module handles everything that talks to the GitHub REST API.
//
// Submodules:
// - client: ActivityClient, the HTTP side (requests, status mapping, caching)
// - cache: Least-recently-used store of parsed responses
// - config: Base URL, User-Agent and cache size for the client
// - error: ApiError, the error type of every API call
// - types: The event and compare JSON structures
//
// Future enhancements:
// - Authenticated requests for higher rate limits
// - Following pagination links past the first page of events
// =============================================================================

mod cache;
mod client;
mod config;
mod error;
mod types;

// Re-export the public API so callers write `github::ActivityClient`
pub use client::ActivityClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use types::{Event, EventKind};
