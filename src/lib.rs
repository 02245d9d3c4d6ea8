// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # ws-connector - Blocking Web-Service HTTP Connector
//!
//! A small, strict HTTP connector for talking to a remote web-service
//! API over HTTP or HTTPS. The connector consumes request descriptors
//! and produces responses; it does not know what any endpoint means.
//!
//! ## Features
//!
//! - Base-URL resolution: paths join the configured base, leading
//!   slashes tolerated, query parameters ordered and repeatable
//! - Basic auth from login/password or access token
//! - Corporate proxy support, with separate proxy credentials
//! - Strict TLS: versions 1.0 through 1.2, SSLv3 refused
//! - Multipart/form-data uploads with per-part media types
//! - Typed errors: configuration vs. malformed request vs. transport
//! - Blocking calls, safe for concurrent use from many threads
//!
//! ## Example
//!
//! ```rust,no_run
//! use ws_connector::{Connector, GetRequest, Request};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let connector = Connector::builder()
//!         .url("https://reports.example.com")
//!         .credentials("admin", "secret")
//!         .build()?;
//!
//!     let request = GetRequest::new("api/rules/search").param("severity", "BLOCKER");
//!     let response = connector.call(&Request::Get(request))?;
//!
//!     if response.is_success() {
//!         println!("{}", response.text()?);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod connector;
pub mod error;
pub mod request;
pub mod response;

// Re-exports for convenience

// Connector
pub use connector::{Connector, ConnectorBuilder};
pub use connector::{DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_READ_TIMEOUT_MS};

// Requests
pub use request::{media_types, GetRequest, Part, PartBody, PostRequest, Request};

// Responses
pub use response::Response;

// Errors
pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
