// src/github/cache.rs
// =============================================================================
// A small least-recently-used cache for parsed API responses.
//
// How it works:
// - entries: URL -> parsed JSON body (O(1) lookup)
// - order: URLs from least to most recently used
// - Reading or writing an entry moves its URL to the back of `order`
// - When full, the URL at the front of `order` is evicted
//
// The cache lives inside one ActivityClient, so every client (and every test)
// starts empty. Nothing expires; entries only leave by eviction.
//
// Rust concepts:
// - HashMap: Key/value storage
// - VecDeque: Double-ended queue, cheap push_back / pop_front
// =============================================================================

use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Default number of distinct URLs kept in memory
pub const DEFAULT_CACHE_CAPACITY: usize = 128;

#[derive(Debug)]
pub struct ResponseCache {
    capacity: usize,
    entries: HashMap<String, Value>,
    order: VecDeque<String>,
}

impl ResponseCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    /// Looks up a URL and marks it as most recently used
    pub fn get(&mut self, url: &str) -> Option<&Value> {
        if !self.entries.contains_key(url) {
            return None;
        }
        self.touch(url);
        self.entries.get(url)
    }

    /// Stores a response, evicting the least recently used one if full
    pub fn insert(&mut self, url: String, body: Value) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.contains_key(&url) {
            self.touch(&url);
            self.entries.insert(url, body);
            return;
        }

        if self.entries.len() >= self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                debug!(url = %evicted, "evicting cached response");
                self.entries.remove(&evicted);
            }
        }

        self.order.push_back(url.clone());
        self.entries.insert(url, body);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // Moves `url` to the most recently used end
    // Linear scan, but the cache never holds more than a few hundred URLs
    fn touch(&mut self, url: &str) {
        if let Some(pos) = self.order.iter().position(|key| key == url) {
            if let Some(key) = self.order.remove(pos) {
                self.order.push_back(key);
            }
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does get() take &mut self?
//    - Reading an entry changes the recency order, which is a mutation
//    - The borrow checker makes us say so in the signature
//
// 2. Why store serde_json::Value instead of typed structs?
//    - The cache sits below the typed layer, so one cache serves every
//      endpoint; callers decode the Value into the type they expect
// -----------------------------------------------------------------------------
