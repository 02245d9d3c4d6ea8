// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the web-service connector
//!
//! Three kinds, kept deliberately distinct so callers can tell a
//! build-time misconfiguration from a malformed request or a wire
//! failure without inspecting message strings.

use thiserror::Error;

/// Result type alias for connector operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the connector
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid builder configuration, raised from `build()` only
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed request descriptor passed to `call` (programmer error)
    #[error("Invalid request: {0}")]
    Request(String),

    /// I/O, TLS, DNS or timeout failure while talking to the server
    #[error("Failed to request {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl Error {
    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is a malformed-request error
    pub fn is_request(&self) -> bool {
        matches!(self, Error::Request(_))
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    /// The URL the failed call was addressed to, for transport errors
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Transport { url, .. } => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_predicates() {
        let err = Error::Config("server URL is not defined".into());
        assert!(err.is_config());
        assert!(!err.is_transport());
        assert_eq!(err.url(), None);
    }

    #[test]
    fn test_error_display() {
        let err = Error::Request("unsupported media type".into());
        assert_eq!(err.to_string(), "Invalid request: unsupported media type");
    }
}
