// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client construction parameters.
//!
//! [`ClientConfig`] holds everything needed to build a settings client. Its
//! `Default` carries the well-known local server address, so callers that leave
//! the server unset always end up talking to [`DEFAULT_SERVER`].

use crate::domain::WireProtocol;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Server used when none is configured.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:1319";

/// Fully resolved client configuration.
///
/// # Examples
///
/// ```
/// use confserv::domain::{ClientConfig, DEFAULT_SERVER};
///
/// let config = ClientConfig::new("", "secret");
/// assert_eq!(config.server, DEFAULT_SERVER);
/// assert_eq!(config.token, "secret");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the configuration service
    pub server: String,
    /// Opaque auth token
    pub token: String,
    /// Request/response convention
    pub protocol: WireProtocol,
    /// Per-request timeout in seconds; `None` keeps the transport default
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Creates a configuration for `server` and `token`.
    ///
    /// An empty `server` falls back to [`DEFAULT_SERVER`].
    pub fn new(server: impl Into<String>, token: impl Into<String>) -> Self {
        let mut config = Self {
            token: token.into(),
            ..Self::default()
        };
        let server = server.into();
        if !server.trim().is_empty() {
            config.server = server;
        }
        config
    }

    /// Sets the wire protocol.
    pub fn with_protocol(mut self, protocol: WireProtocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Sets the per-request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Returns the per-request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Overlays every field set in `partial` onto this configuration.
    ///
    /// Blank server strings count as unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use confserv::domain::{ClientConfig, PartialClientConfig, WireProtocol};
    ///
    /// let mut config = ClientConfig::default();
    /// config.apply(PartialClientConfig {
    ///     protocol: Some(WireProtocol::NameToken),
    ///     ..Default::default()
    /// });
    /// assert_eq!(config.protocol, WireProtocol::NameToken);
    /// ```
    pub fn apply(&mut self, partial: PartialClientConfig) {
        if let Some(server) = partial.server.filter(|s| !s.trim().is_empty()) {
            self.server = server;
        }
        if let Some(token) = partial.token {
            self.token = token;
        }
        if let Some(protocol) = partial.protocol {
            self.protocol = protocol;
        }
        if let Some(secs) = partial.timeout_secs {
            self.timeout_secs = Some(secs);
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            token: String::new(),
            protocol: WireProtocol::default(),
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("server", &self.server)
            .field("token", &"<redacted>")
            .field("protocol", &self.protocol)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// A set of configuration overrides produced by one configuration layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialClientConfig {
    /// Base URL override
    pub server: Option<String>,
    /// Token override
    pub token: Option<String>,
    /// Protocol override
    pub protocol: Option<WireProtocol>,
    /// Timeout override in seconds
    pub timeout_secs: Option<u64>,
}

impl PartialClientConfig {
    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.server.is_none()
            && self.token.is_none()
            && self.protocol.is_none()
            && self.timeout_secs.is_none()
    }
}
