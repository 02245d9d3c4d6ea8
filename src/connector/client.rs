// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Connector: URL resolution, header assembly and dispatch

use reqwest::header::{
    HeaderValue, ACCEPT, ACCEPT_CHARSET, AUTHORIZATION, PROXY_AUTHORIZATION, USER_AGENT,
};
use url::Url;

use super::builder::ConnectorBuilder;
use super::multipart;
use crate::error::{Error, Result};
use crate::request::Request;
use crate::response::Response;

/// Immutable connector to one web-service API server
///
/// Holds the normalized base URL, the pre-encoded credentials and the
/// blocking transport with its connection pool. Cloning is cheap and
/// clones share the pool; calls may be issued concurrently from any
/// number of threads.
#[derive(Debug, Clone)]
pub struct Connector {
    base_url: Url,
    user_agent: Option<String>,
    credentials: Option<String>,
    proxy_credentials: Option<String>,
    client: reqwest::blocking::Client,
}

impl Connector {
    pub(crate) fn new(
        base_url: Url,
        user_agent: Option<String>,
        credentials: Option<String>,
        proxy_credentials: Option<String>,
        client: reqwest::blocking::Client,
    ) -> Self {
        Self {
            base_url,
            user_agent,
            credentials,
            proxy_credentials,
            client,
        }
    }

    /// Start configuring a new connector
    pub fn builder() -> ConnectorBuilder {
        ConnectorBuilder::new()
    }

    /// The configured base URL, always with a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// The configured User-Agent, if any
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub(crate) fn credentials(&self) -> Option<&str> {
        self.credentials.as_deref()
    }

    pub(crate) fn proxy_credentials(&self) -> Option<&str> {
        self.proxy_credentials.as_deref()
    }

    /// Execute one call, blocking the current thread
    ///
    /// Any HTTP status yields `Ok`; only wire-level failures become
    /// [`Error::Transport`]. Status interpretation is up to the caller.
    pub fn call(&self, request: &Request) -> Result<Response> {
        let url = self.resolve_url(request.path(), request.params())?;

        let builder = match request {
            Request::Get(_) => {
                tracing::debug!(url = %url, "GET");
                self.client.get(url.clone())
            }
            Request::Post(post) => {
                tracing::debug!(url = %url, parts = post.parts().len(), "POST");
                let builder = self.client.post(url.clone());
                if post.parts().is_empty() {
                    builder.body("")
                } else {
                    builder.multipart(multipart::encode_parts(post.parts())?)
                }
            }
        };

        let builder = self.apply_headers(builder, request.media_type())?;
        let response = builder.send().map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Transport failure");
            Error::Transport {
                url: url.to_string(),
                source: e,
            }
        })?;

        Ok(Response::new(url.into(), response))
    }

    /// Join a request path to the base URL and append query parameters
    ///
    /// Leading slashes are stripped from the path so "/rules" and
    /// "rules" resolve identically. Parameters keep insertion order and
    /// repeated keys produce repeated query pairs.
    pub(crate) fn resolve_url(&self, path: &str, params: &[(String, String)]) -> Result<Url> {
        let relative = path.trim_start_matches('/');
        let mut url = self.base_url.join(relative).map_err(|e| {
            Error::Request(format!(
                "cannot resolve path '{path}' against '{}': {e}",
                self.base_url
            ))
        })?;
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn apply_headers(
        &self,
        builder: reqwest::blocking::RequestBuilder,
        media_type: &str,
    ) -> Result<reqwest::blocking::RequestBuilder> {
        let accept = HeaderValue::from_str(media_type)
            .map_err(|_| Error::Request(format!("invalid media type '{media_type}'")))?;

        let mut builder = builder
            .header(ACCEPT, accept)
            .header(ACCEPT_CHARSET, "UTF-8");
        if let Some(credentials) = &self.credentials {
            builder = builder.header(AUTHORIZATION, credentials);
        }
        if let Some(proxy_credentials) = &self.proxy_credentials {
            builder = builder.header(PROXY_AUTHORIZATION, proxy_credentials);
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.header(USER_AGENT, user_agent);
        }
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connector(base: &str) -> Connector {
        Connector::builder().url(base).build().unwrap()
    }

    fn pairs(params: &[(&str, &str)]) -> Vec<(String, String)> {
        params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_trailing_slash_on_base_makes_no_difference() {
        let with = connector("http://localhost:9000/api/");
        let without = connector("http://localhost:9000/api");
        assert_eq!(
            with.resolve_url("rules", &[]).unwrap(),
            without.resolve_url("rules", &[]).unwrap()
        );
    }

    #[test]
    fn test_leading_slashes_are_stripped() {
        let connector = connector("http://localhost:9000/api/");
        let expected = "http://localhost:9000/api/rules/search";
        for path in ["rules/search", "/rules/search", "///rules/search"] {
            assert_eq!(connector.resolve_url(path, &[]).unwrap().as_str(), expected);
        }
    }

    #[test]
    fn test_params_keep_order_and_duplicates() {
        let connector = connector("http://localhost:9000/");
        let url = connector
            .resolve_url(
                "api/issues",
                &pairs(&[("tag", "security"), ("severity", "BLOCKER"), ("tag", "xss")]),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/api/issues?tag=security&severity=BLOCKER&tag=xss"
        );
    }

    #[test]
    fn test_params_are_percent_encoded() {
        let connector = connector("http://localhost:9000/");
        let url = connector
            .resolve_url("api/search", &pairs(&[("q", "a b&c=d")]))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/api/search?q=a+b%26c%3Dd"
        );
    }

    #[test]
    fn test_empty_path_resolves_to_base() {
        let connector = connector("http://localhost:9000/api/");
        assert_eq!(
            connector.resolve_url("", &[]).unwrap().as_str(),
            "http://localhost:9000/api/"
        );
    }

    #[test]
    fn test_invalid_media_type_is_request_error() {
        let connector = connector("http://localhost:9000/");
        let request = Request::Get(crate::request::GetRequest::new("api/rules").media_type("x\ny"));
        let err = connector.call(&request).unwrap_err();
        assert!(err.is_request());
    }
}
