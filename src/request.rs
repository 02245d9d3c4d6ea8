// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request descriptors
//!
//! A descriptor is an immutable value describing one outbound call
//! before it is resolved into a wire request: path, ordered query
//! parameters (keys may repeat), desired response media type, and for
//! uploads the named multipart parts. Descriptors know nothing about
//! the server; the [`Connector`](crate::Connector) resolves them.

use std::path::PathBuf;

use bytes::Bytes;

/// Well-known response media types
pub mod media_types {
    pub const JSON: &str = "application/json";
    pub const XML: &str = "application/xml";
    pub const TEXT: &str = "text/plain";
    pub const OCTET_STREAM: &str = "application/octet-stream";

    /// Default Accept value when a descriptor does not set one
    pub const DEFAULT: &str = JSON;
}

/// One outbound call, GET or POST
///
/// A closed enum so request dispatch is an exhaustive match: adding a
/// new kind is a compile-time decision, not a runtime type check.
#[derive(Debug, Clone)]
pub enum Request {
    Get(GetRequest),
    Post(PostRequest),
}

impl Request {
    /// Request path, as given (leading slashes are stripped on resolve)
    pub fn path(&self) -> &str {
        match self {
            Request::Get(r) => &r.path,
            Request::Post(r) => &r.path,
        }
    }

    /// Ordered query parameters; keys may repeat
    pub fn params(&self) -> &[(String, String)] {
        match self {
            Request::Get(r) => &r.params,
            Request::Post(r) => &r.params,
        }
    }

    /// Desired response media type, sent as the Accept header
    pub fn media_type(&self) -> &str {
        match self {
            Request::Get(r) => &r.media_type,
            Request::Post(r) => &r.media_type,
        }
    }
}

impl From<GetRequest> for Request {
    fn from(request: GetRequest) -> Self {
        Request::Get(request)
    }
}

impl From<PostRequest> for Request {
    fn from(request: PostRequest) -> Self {
        Request::Post(request)
    }
}

/// Descriptor for a GET call
#[derive(Debug, Clone)]
pub struct GetRequest {
    path: String,
    params: Vec<(String, String)>,
    media_type: String,
}

impl GetRequest {
    /// Create a GET descriptor for a path relative to the base URL
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
            media_type: media_types::DEFAULT.to_string(),
        }
    }

    /// Append a query parameter; repeated keys produce repeated pairs
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Override the Accept media type
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }
}

/// Descriptor for a POST call, optionally carrying multipart parts
#[derive(Debug, Clone)]
pub struct PostRequest {
    path: String,
    params: Vec<(String, String)>,
    media_type: String,
    parts: Vec<(String, Part)>,
}

impl PostRequest {
    /// Create a POST descriptor for a path relative to the base URL
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
            media_type: media_types::DEFAULT.to_string(),
            parts: Vec::new(),
        }
    }

    /// Append a query parameter; repeated keys produce repeated pairs
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Override the Accept media type
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Add a named multipart part; insertion order is preserved
    pub fn part(mut self, name: impl Into<String>, part: Part) -> Self {
        self.parts.push((name.into(), part));
        self
    }

    /// The multipart parts, in insertion order
    pub fn parts(&self) -> &[(String, Part)] {
        &self.parts
    }
}

/// One multipart part: a declared media type plus its content
#[derive(Debug, Clone)]
pub struct Part {
    pub(crate) media_type: String,
    pub(crate) body: PartBody,
}

/// Part content, either in memory or read from disk at call time
#[derive(Debug, Clone)]
pub enum PartBody {
    Bytes(Bytes),
    File(PathBuf),
}

impl Part {
    /// A part whose content is already in memory
    pub fn bytes(media_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            media_type: media_type.into(),
            body: PartBody::Bytes(bytes.into()),
        }
    }

    /// A part whose content is read from a file when the call is made
    pub fn file(media_type: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            media_type: media_type.into(),
            body: PartBody::File(path.into()),
        }
    }

    /// Declared media type of this part
    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}
