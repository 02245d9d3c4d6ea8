// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Connector layer
//!
//! Owns the blocking transport and everything between a request
//! descriptor and the wire: URL resolution, header assembly, multipart
//! encoding and dispatch. Built once via [`ConnectorBuilder`], then
//! shared freely across threads; every call is independent.

mod builder;
mod client;
mod multipart;

pub use builder::ConnectorBuilder;
pub use client::Connector;

/// Default connect timeout: bounds TCP/TLS setup
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 30_000;

/// Default read timeout: bounds receiving the response
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 60_000;
