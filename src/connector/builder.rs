// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Connector configuration builder
//!
//! Accumulates settings, validates them in `build()`, and freezes the
//! result into an immutable [`Connector`]. No I/O happens here; a bad
//! base URL fails at build time, never at call time.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use url::Url;

use super::client::Connector;
use super::{DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_READ_TIMEOUT_MS};
use crate::error::{Error, Result};

/// Builder for [`Connector`]
///
/// ```rust,no_run
/// use ws_connector::Connector;
///
/// let connector = Connector::builder()
///     .url("https://reports.example.com")
///     .token("ABCDE")
///     .user_agent("scanner/1.0")
///     .build()?;
/// # Ok::<(), ws_connector::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ConnectorBuilder {
    url: Option<String>,
    user_agent: Option<String>,
    login: Option<String>,
    password: Option<String>,
    proxy: Option<String>,
    proxy_login: Option<String>,
    proxy_password: Option<String>,
    connect_timeout_ms: Option<u64>,
    read_timeout_ms: Option<u64>,
}

impl ConnectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mandatory server base URL, e.g. "http://localhost:9000"
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Optional User-Agent sent with every request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Optional login/password pair, sent as Basic auth
    ///
    /// Mutually exclusive in effect with [`token`](Self::token);
    /// whichever is called last wins.
    pub fn credentials(mut self, login: impl Into<String>, password: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self.password = Some(password.into());
        self
    }

    /// Optional access token, alternative to [`credentials`](Self::credentials)
    ///
    /// The token is sent as a Basic login with an empty password.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.login = Some(token.into());
        self.password = None;
        self
    }

    /// Optional proxy URL, e.g. "http://proxy.corp:3128"
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Optional proxy credentials, sent as Proxy-Authorization
    pub fn proxy_credentials(
        mut self,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.proxy_login = Some(login.into());
        self.proxy_password = Some(password.into());
        self
    }

    /// Timeout for opening the connection, in milliseconds
    ///
    /// Zero means wait indefinitely. Default is 30 seconds.
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.connect_timeout_ms = Some(ms);
        self
    }

    /// Deadline for receiving the response, in milliseconds
    ///
    /// Applied to the whole exchange after the connection is opened.
    /// Zero means wait indefinitely. Default is 60 seconds.
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.read_timeout_ms = Some(ms);
        self
    }

    /// Validate the configuration and freeze it into a [`Connector`]
    ///
    /// Fails with [`Error::Config`] on a missing or malformed base URL
    /// or proxy URL. Performs no network activity.
    pub fn build(self) -> Result<Connector> {
        let url = self.url.unwrap_or_default();
        if url.trim().is_empty() {
            return Err(Error::Config("server URL is not defined".into()));
        }

        // Url::join needs the base to end with a separator, otherwise
        // the last path segment would be replaced instead of extended
        let normalized = if url.ends_with('/') {
            url.clone()
        } else {
            format!("{url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| Error::Config(format!("malformed server URL '{url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "malformed server URL '{url}': not a base URL"
            )));
        }

        let credentials = self
            .login
            .as_deref()
            .filter(|login| !login.is_empty())
            .map(|login| basic_auth(login, self.password.as_deref().unwrap_or("")));
        let proxy_credentials = self
            .proxy_login
            .as_deref()
            .filter(|login| !login.is_empty())
            .map(|login| basic_auth(login, self.proxy_password.as_deref().unwrap_or("")));

        let client = build_transport(
            self.proxy.as_deref(),
            self.connect_timeout_ms.unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS),
            self.read_timeout_ms.unwrap_or(DEFAULT_READ_TIMEOUT_MS),
        )?;

        Ok(Connector::new(
            base_url,
            self.user_agent,
            credentials,
            proxy_credentials,
            client,
        ))
    }
}

/// Build the blocking transport: timeouts, TLS window, optional proxy
fn build_transport(
    proxy: Option<&str>,
    connect_timeout_ms: u64,
    read_timeout_ms: u64,
) -> Result<reqwest::blocking::Client> {
    // The blocking client has no per-read timeout, so the read timeout
    // becomes the whole-request deadline; zero disables it entirely.
    // TLS 1.0 through 1.2, SSLv3 refused; cleartext HTTP still works.
    let mut builder = reqwest::blocking::Client::builder()
        .timeout(timeout_duration(read_timeout_ms))
        .min_tls_version(reqwest::tls::Version::TLS_1_0)
        .max_tls_version(reqwest::tls::Version::TLS_1_2);

    if let Some(duration) = timeout_duration(connect_timeout_ms) {
        builder = builder.connect_timeout(duration);
    }
    if let Some(proxy_url) = proxy {
        builder = builder.proxy(
            reqwest::Proxy::all(proxy_url)
                .map_err(|e| Error::Config(format!("invalid proxy URL '{proxy_url}': {e}")))?,
        );
    }

    builder
        .build()
        .map_err(|e| Error::Config(format!("cannot build HTTP transport: {e}")))
}

/// Zero means "wait indefinitely" for that phase
fn timeout_duration(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

/// Encode a Basic auth header value
pub(crate) fn basic_auth(login: &str, password: &str) -> String {
    let encoded = STANDARD.encode(format!("{login}:{password}"));
    format!("Basic {encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_url() {
        let err = ConnectorBuilder::new().build().unwrap_err();
        assert!(err.is_config());

        let err = ConnectorBuilder::new().url("   ").build().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_build_rejects_malformed_url() {
        let err = ConnectorBuilder::new().url("not a url").build().unwrap_err();
        assert!(err.is_config());

        // parses, but cannot serve as a join base
        let err = ConnectorBuilder::new()
            .url("mailto:somebody@example.com")
            .build()
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let connector = ConnectorBuilder::new()
            .url("http://localhost:9000/api")
            .build()
            .unwrap();
        assert_eq!(connector.base_url(), "http://localhost:9000/api/");

        let connector = ConnectorBuilder::new()
            .url("http://localhost:9000/api/")
            .build()
            .unwrap();
        assert_eq!(connector.base_url(), "http://localhost:9000/api/");
    }

    #[test]
    fn test_basic_auth_encoding() {
        assert_eq!(basic_auth("admin", "secret"), "Basic YWRtaW46c2VjcmV0");
        // token convention: token as login, empty password
        assert_eq!(basic_auth("ABCDE", ""), "Basic QUJDREU6");
    }

    #[test]
    fn test_credentials_from_login_and_password() {
        let connector = ConnectorBuilder::new()
            .url("http://localhost:9000")
            .credentials("admin", "secret")
            .build()
            .unwrap();
        assert_eq!(connector.credentials(), Some("Basic YWRtaW46c2VjcmV0"));
    }

    #[test]
    fn test_token_is_login_with_empty_password() {
        let connector = ConnectorBuilder::new()
            .url("http://localhost:9000")
            .token("ABCDE")
            .build()
            .unwrap();
        assert_eq!(connector.credentials(), Some("Basic QUJDREU6"));
    }

    #[test]
    fn test_credentials_and_token_last_write_wins() {
        let connector = ConnectorBuilder::new()
            .url("http://localhost:9000")
            .credentials("admin", "secret")
            .token("ABCDE")
            .build()
            .unwrap();
        assert_eq!(connector.credentials(), Some("Basic QUJDREU6"));

        let connector = ConnectorBuilder::new()
            .url("http://localhost:9000")
            .token("ABCDE")
            .credentials("admin", "secret")
            .build()
            .unwrap();
        assert_eq!(connector.credentials(), Some("Basic YWRtaW46c2VjcmV0"));
    }

    #[test]
    fn test_empty_login_means_no_credentials() {
        let connector = ConnectorBuilder::new()
            .url("http://localhost:9000")
            .credentials("", "ignored")
            .build()
            .unwrap();
        assert_eq!(connector.credentials(), None);
    }

    #[test]
    fn test_proxy_credentials_without_proxy() {
        // proxy credentials may target a system-wide proxy, so they are
        // accepted even when no explicit proxy is configured
        let connector = ConnectorBuilder::new()
            .url("http://localhost:9000")
            .proxy_credentials("proxy-user", "proxy-pass")
            .build()
            .unwrap();
        assert_eq!(
            connector.proxy_credentials(),
            Some(basic_auth("proxy-user", "proxy-pass").as_str())
        );
    }

    #[test]
    fn test_invalid_proxy_url_is_config_error() {
        let err = ConnectorBuilder::new()
            .url("http://localhost:9000")
            .proxy("::not-a-proxy::")
            .build()
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_zero_timeout_means_no_timeout() {
        assert_eq!(timeout_duration(0), None);
        assert_eq!(timeout_duration(250), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_builds_with_explicit_and_infinite_timeouts() {
        let connector = ConnectorBuilder::new()
            .url("http://localhost:9000")
            .connect_timeout_ms(5_000)
            .read_timeout_ms(10_000)
            .build();
        assert!(connector.is_ok());

        let connector = ConnectorBuilder::new()
            .url("http://localhost:9000")
            .connect_timeout_ms(0)
            .read_timeout_ms(0)
            .build();
        assert!(connector.is_ok());
    }
}
