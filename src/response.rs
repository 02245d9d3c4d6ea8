// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response wrapper
//!
//! Adapts the transport response to a stable surface: status, header
//! lookup, and one-shot body access. Callers never see the underlying
//! client types. The connection is returned to the pool when the body
//! is fully consumed or the wrapper is dropped, on every exit path.

use std::io::Read;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::error::{Error, Result};

/// Response to one connector call
///
/// Any HTTP status is delivered here, including 4xx/5xx; turning a
/// status code into an error is a caller-level decision.
#[derive(Debug)]
pub struct Response {
    request_url: String,
    inner: reqwest::blocking::Response,
}

impl Response {
    pub(crate) fn new(request_url: String, inner: reqwest::blocking::Response) -> Self {
        Self { request_url, inner }
    }

    /// Response status
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Status code as u16
    pub fn status_code(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.inner.status().is_success()
    }

    /// Check if status is client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.inner.status().is_client_error()
    }

    /// Check if status is server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.inner.status().is_server_error()
    }

    /// All response headers
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Get a header value; lookup is case-insensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name).and_then(|v| v.to_str().ok())
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get content length, if the server declared one
    pub fn content_length(&self) -> Option<u64> {
        self.inner.content_length()
    }

    /// The fully resolved URL this response answers, for diagnostics
    pub fn request_url(&self) -> &str {
        &self.request_url
    }

    /// Consume the body as raw bytes
    pub fn bytes(self) -> Result<Bytes> {
        let Self { request_url, inner } = self;
        inner.bytes().map_err(|e| Error::Transport {
            url: request_url,
            source: e,
        })
    }

    /// Consume the body as decoded text
    pub fn text(self) -> Result<String> {
        let Self { request_url, inner } = self;
        inner.text().map_err(|e| Error::Transport {
            url: request_url,
            source: e,
        })
    }

    /// Consume the body as a blocking byte stream
    pub fn into_reader(self) -> impl Read {
        self.inner
    }
}
