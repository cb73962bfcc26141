// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote settings client implementation.
//!
//! This module provides [`RemoteSettingsClient`], the default implementation of
//! the [`SettingsClient`] trait. It combines a wire protocol with a transport
//! and performs one round trip per lookup.

use crate::adapters::HttpTransport;
use crate::domain::{
    ClientConfig, Result, SettingName, SettingValue, SettingsClient, SettingsError, WireProtocol,
};
use crate::ports::SettingsTransport;
use std::fmt;

/// Settings client that reads values from a remote configuration service.
///
/// The client is immutable once built and holds no per-lookup state, so it can
/// be shared between threads as long as the transport can.
///
/// # Examples
///
/// ```rust,no_run
/// use confserv::prelude::*;
///
/// # fn main() -> Result<()> {
/// let client = RemoteSettingsClient::new("", "my-token")?;
///
/// let enabled = client.get_bool("Feature.Enabled")?;
/// let retries = client.get_int("retry.count")?;
/// # Ok(())
/// # }
/// ```
pub struct RemoteSettingsClient {
    /// How settings are fetched
    transport: Box<dyn SettingsTransport>,
    /// How requests are built and bodies decoded
    protocol: WireProtocol,
    /// Opaque auth token
    token: String,
}

impl RemoteSettingsClient {
    /// Creates an HTTP client for `server` using the default protocol.
    ///
    /// An empty `server` falls back to
    /// [`DEFAULT_SERVER`](crate::domain::DEFAULT_SERVER).
    pub fn new(server: &str, token: &str) -> Result<Self> {
        Self::from_config(&ClientConfig::new(server, token))
    }

    /// Creates an HTTP client from a resolved configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::builder().config(config.clone()).build()
    }

    /// Creates a new client builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use confserv::domain::WireProtocol;
    /// use confserv::service::RemoteSettingsClient;
    ///
    /// # fn main() -> confserv::domain::Result<()> {
    /// let client = RemoteSettingsClient::builder()
    ///     .server("http://conf.local:1319")
    ///     .token("abc")
    ///     .protocol(WireProtocol::NameToken)
    ///     .build()?;
    /// assert_eq!(client.protocol(), WireProtocol::NameToken);
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> SettingsClientBuilder {
        SettingsClientBuilder::new()
    }

    /// Returns the wire protocol in use.
    pub fn protocol(&self) -> WireProtocol {
        self.protocol
    }

    /// Returns the name of the transport in use.
    pub fn transport_name(&self) -> &str {
        self.transport.name()
    }
}

impl SettingsClient for RemoteSettingsClient {
    fn get_value(&self, name: &SettingName) -> Result<SettingValue> {
        let request = self.protocol.request(name, &self.token);

        tracing::debug!(
            "Fetching setting '{}' via {} ({})",
            name,
            self.transport.name(),
            self.protocol
        );

        let response = self.transport.get(&request)?;

        if response.is_server_error() {
            tracing::warn!(
                "Configuration service returned HTTP {} for setting '{}'",
                response.status,
                name
            );
            return Err(SettingsError::Server {
                setting: name.to_string(),
                status: response.status,
            });
        }

        self.protocol.decode(name, &response.body)
    }
}

impl fmt::Debug for RemoteSettingsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteSettingsClient")
            .field("transport", &self.transport.name())
            .field("protocol", &self.protocol)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Builder for constructing a [`RemoteSettingsClient`].
///
/// Without an explicit transport the builder creates an [`HttpTransport`]
/// from the configured server and timeout.
pub struct SettingsClientBuilder {
    config: ClientConfig,
    transport: Option<Box<dyn SettingsTransport>>,
}

impl SettingsClientBuilder {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            transport: None,
        }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the server base URL. Blank values keep the default.
    pub fn server(mut self, server: impl Into<String>) -> Self {
        let server = server.into();
        if !server.trim().is_empty() {
            self.config.server = server;
        }
        self
    }

    /// Sets the auth token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = token.into();
        self
    }

    /// Sets the wire protocol.
    pub fn protocol(mut self, protocol: WireProtocol) -> Self {
        self.config.protocol = protocol;
        self
    }

    /// Sets the per-request timeout in seconds for the HTTP transport.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = Some(secs);
        self
    }

    /// Uses `transport` instead of the HTTP transport.
    ///
    /// The configured server and timeout are ignored in that case.
    pub fn with_transport(mut self, transport: Box<dyn SettingsTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<RemoteSettingsClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Box::new(HttpTransport::from_config(&self.config)?),
        };

        tracing::debug!(
            "Built settings client (transport={}, protocol={}, server={})",
            transport.name(),
            self.config.protocol,
            self.config.server
        );

        Ok(RemoteSettingsClient {
            transport,
            protocol: self.config.protocol,
            token: self.config.token,
        })
    }
}

impl Default for SettingsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
