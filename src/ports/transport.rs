// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings transport trait definition.
//!
//! This module defines the `SettingsTransport` trait, the port through which a
//! settings client reaches the remote service. The HTTP adapter implements it
//! for production use; tests implement it with canned responses.

use crate::domain::{Result, SettingName};
use std::fmt;

/// How the auth token is presented to the service.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// `Authorization: Bearer <token>`
    Bearer(String),
    /// `Token: <token>`
    TokenHeader(String),
}

impl Credential {
    /// Returns the header name and value carrying this credential.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use confserv::ports::Credential;
    ///
    /// let (name, value) = Credential::Bearer("abc".to_string()).header();
    /// assert_eq!(name, "Authorization");
    /// assert_eq!(value, "Bearer abc");
    /// ```
    pub fn header(&self) -> (&'static str, String) {
        match self {
            Credential::Bearer(token) => ("Authorization", format!("Bearer {}", token)),
            Credential::TokenHeader(token) => ("Token", token.clone()),
        }
    }
}

// Tokens stay out of logs and panic messages.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Bearer(_) => f.write_str("Bearer(<redacted>)"),
            Credential::TokenHeader(_) => f.write_str("TokenHeader(<redacted>)"),
        }
    }
}

/// A single-setting GET request, independent of any HTTP library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingRequest {
    /// The normalized setting being requested
    pub setting: SettingName,
    /// Path segments appended to the server base URL, unescaped
    pub path: Vec<String>,
    /// The credential to present
    pub credential: Credential,
}

impl SettingRequest {
    /// Returns the request path as `/a/b/c`, for logging and tests.
    pub fn path_string(&self) -> String {
        let mut path = String::new();
        for segment in &self.path {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}

/// The status and body of a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a response from a status and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for any 5xx-class status.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

/// A trait for transports that can fetch a setting from the remote service.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a client can be shared between
/// threads. A transport performs exactly one round trip per call and must not
/// retry or cache.
///
/// # Examples
///
/// ```rust
/// use confserv::ports::{RawResponse, SettingRequest, SettingsTransport};
/// use confserv::domain::Result;
///
/// struct FixedTransport;
///
/// impl SettingsTransport for FixedTransport {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn get(&self, _request: &SettingRequest) -> Result<RawResponse> {
///         Ok(RawResponse::new(200, "\"hello\""))
///     }
/// }
/// ```
pub trait SettingsTransport: Send + Sync {
    /// Returns a short name used in errors and logs, such as `"http"`.
    fn name(&self) -> &str;

    /// Performs the request and returns whatever the service answered.
    ///
    /// Only failures to obtain a response are errors here; 5xx statuses are
    /// returned as responses and classified by the client.
    fn get(&self, request: &SettingRequest) -> Result<RawResponse>;
}
