// src/github/error.rs
// =============================================================================
// Error type for everything that can go wrong while talking to the GitHub API.
//
// There is one enum, ApiError. Every variant is an "API error"; NotFound is
// the special case callers usually want to single out (the remote said 404,
// which for the events endpoint means the user does not exist).
//
// Rust concepts:
// - thiserror: Derives std::error::Error and Display from attributes
// - Enums with data: Each variant carries the detail needed for its message
// =============================================================================

use thiserror::Error;

/// Failure of a request against the GitHub REST API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The remote answered 404 Not Found.
    #[error("URL not found: {url}")]
    NotFound { url: String },

    /// The remote answered with a non-error status other than 200.
    #[error("API returned unexpected status: {status}")]
    UnexpectedStatus { status: u16 },

    /// The remote answered with an error status other than 404.
    #[error("HTTP error: {status} {reason}")]
    Http { status: u16, reason: String },

    /// The request never got a complete response (DNS, refused, reset...).
    #[error("connection error, check your internet connection. Details: {0}")]
    Connection(String),

    /// The body was not the JSON we expected.
    #[error("failed to decode the JSON response from the API: {0}")]
    Decode(String),

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// True for the 404 case, which the CLI reports as "user not found"
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Connection(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinguished() {
        let not_found = ApiError::NotFound {
            url: "https://api.github.com/users/ghost/events".to_string(),
        };
        assert!(not_found.is_not_found());
        assert_eq!(
            not_found.to_string(),
            "URL not found: https://api.github.com/users/ghost/events"
        );

        let http = ApiError::Http {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert!(!http.is_not_found());
        assert_eq!(http.to_string(), "HTTP error: 503 Service Unavailable");
    }

    #[test]
    fn test_json_error_becomes_decode() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let api_err: ApiError = err.into();
        assert!(matches!(api_err, ApiError::Decode(_)));
    }
}
