// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP transport adapter.
//!
//! This module provides the production [`SettingsTransport`], built on
//! `reqwest`'s blocking client. Each lookup is a single GET; the calling thread
//! waits for the response.

use crate::domain::{ClientConfig, Result, SettingsError, DEFAULT_SERVER};
use crate::ports::{RawResponse, SettingRequest, SettingsTransport};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Url;
use std::time::Duration;

/// Transport that reaches the configuration service over HTTP(S).
///
/// The blocking client must not be created or used from inside an async
/// runtime; use `spawn_blocking` there.
///
/// # Examples
///
/// ```rust,no_run
/// use confserv::adapters::HttpTransport;
///
/// let transport = HttpTransport::new("https://conf.example.com").unwrap();
/// assert_eq!(transport.base_url().host_str(), Some("conf.example.com"));
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Underlying HTTP client
    client: Client,
    /// Base URL the setting path is appended to
    base_url: Url,
}

impl HttpTransport {
    /// Creates a transport for `server` with the client's default timeout.
    ///
    /// An empty `server` falls back to [`DEFAULT_SERVER`].
    pub fn new(server: &str) -> Result<Self> {
        Self::with_timeout(server, None)
    }

    /// Creates a transport with an explicit per-request timeout.
    pub fn with_timeout(server: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Self::parse_base_url(server)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| SettingsError::Configuration {
            layer: "http".to_string(),
            message: format!("Failed to build HTTP client: {}", e),
            source: Some(Box::new(e)),
        })?;

        Ok(Self { client, base_url })
    }

    /// Creates a transport from a resolved [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::with_timeout(&config.server, config.timeout())
    }

    /// Returns the base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn parse_base_url(server: &str) -> Result<Url> {
        let server = if server.trim().is_empty() {
            DEFAULT_SERVER
        } else {
            server.trim()
        };

        let url = Url::parse(server).map_err(|e| SettingsError::Configuration {
            layer: "http".to_string(),
            message: format!("Invalid server URL '{}': {}", server, e),
            source: Some(Box::new(e)),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(SettingsError::Configuration {
                layer: "http".to_string(),
                message: format!("Unsupported URL scheme '{}' (expected http or https)", other),
                source: None,
            }),
        }
    }

    /// Resolves the request path against the base URL, escaping each segment.
    pub(crate) fn url_for(&self, request: &SettingRequest) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SettingsError::Configuration {
                layer: "http".to_string(),
                message: format!("Server URL '{}' cannot carry a path", self.base_url),
                source: None,
            })?
            .pop_if_empty()
            .extend(&request.path);
        Ok(url)
    }

    fn transport_error(
        request: &SettingRequest,
        message: String,
        err: reqwest::Error,
    ) -> SettingsError {
        SettingsError::Transport {
            transport: "http".to_string(),
            setting: request.setting.to_string(),
            message,
            source: Some(Box::new(err)),
        }
    }
}

impl SettingsTransport for HttpTransport {
    fn name(&self) -> &str {
        "http"
    }

    fn get(&self, request: &SettingRequest) -> Result<RawResponse> {
        let url = self.url_for(request)?;
        let (header, value) = request.credential.header();

        tracing::debug!("GET {} (setting '{}')", url, request.setting);

        let response = self
            .client
            .get(url)
            .header(header, value)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| Self::transport_error(request, format!("Request failed: {}", e), e))?;

        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| {
            Self::transport_error(request, format!("Failed to read response body: {}", e), e)
        })?;

        tracing::debug!(
            "Setting '{}' answered HTTP {} ({} bytes)",
            request.setting,
            status,
            body.len()
        );

        Ok(RawResponse::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SettingName, WireProtocol};

    fn request(name: &str) -> SettingRequest {
        WireProtocol::KeyBearer.request(&SettingName::parse(name).unwrap(), "tok")
    }

    #[test]
    fn test_http_transport_name() {
        let transport = HttpTransport::new("http://localhost:1319").unwrap();
        assert_eq!(transport.name(), "http");
    }

    #[test]
    fn test_empty_server_uses_default() {
        let transport = HttpTransport::new("").unwrap();
        assert_eq!(transport.base_url().as_str(), "http://127.0.0.1:1319/");
    }

    #[test]
    fn test_invalid_server_url() {
        let result = HttpTransport::new("not a url");
        assert!(matches!(result, Err(SettingsError::Configuration { .. })));
    }

    #[test]
    fn test_unsupported_scheme() {
        let result = HttpTransport::new("ftp://conf.example.com");
        assert!(matches!(result, Err(SettingsError::Configuration { .. })));
    }

    #[test]
    fn test_url_for_appends_segments() {
        let transport = HttpTransport::new("http://conf.local:1319").unwrap();
        let url = transport.url_for(&request("Retry.Count")).unwrap();
        assert_eq!(url.as_str(), "http://conf.local:1319/settings/key/retry.count");
    }

    #[test]
    fn test_url_for_keeps_base_path() {
        let transport = HttpTransport::new("http://conf.local/api/v1/").unwrap();
        let url = transport.url_for(&request("a.b")).unwrap();
        assert_eq!(url.as_str(), "http://conf.local/api/v1/settings/key/a.b");
    }

    #[test]
    fn test_url_for_escapes_segments() {
        let transport = HttpTransport::new("http://conf.local").unwrap();
        let url = transport.url_for(&request("a/b c")).unwrap();
        assert_eq!(url.path(), "/settings/key/a%2Fb%20c");
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        // Port 9 (discard) is essentially never served on loopback.
        let transport = HttpTransport::with_timeout(
            "http://127.0.0.1:9",
            Some(Duration::from_secs(2)),
        )
        .unwrap();
        let err = transport.get(&request("app.name")).unwrap_err();
        assert!(err.is_transport());
    }
}
