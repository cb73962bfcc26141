// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire protocol variants spoken by configuration services.
//!
//! Deployed services use one of two request/response conventions. The client
//! picks one at construction time; there is no negotiation.

use crate::domain::errors::{Result, SettingsError};
use crate::domain::{SettingName, SettingValue};
use crate::ports::{Credential, SettingRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Common path prefix for every setting endpoint.
const SETTINGS_PATH: &str = "settings";

/// The request/response convention used to talk to the service.
///
/// # Examples
///
/// ```
/// use confserv::domain::{SettingName, WireProtocol};
///
/// let name = SettingName::parse("Retry.Count").unwrap();
/// let request = WireProtocol::KeyBearer.request(&name, "t0k");
/// assert_eq!(request.path_string(), "/settings/key/retry.count");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WireProtocol {
    /// `GET /settings/key/{name}` with `Authorization: Bearer <token>`.
    /// The body is the value itself as a JSON scalar.
    #[default]
    #[serde(alias = "key")]
    KeyBearer,
    /// `GET /settings/name/{name}` with a `Token` header.
    /// The body is an envelope `{"value": string | null, ...}`.
    #[serde(alias = "name")]
    NameToken,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    value: Option<String>,
}

impl WireProtocol {
    /// Returns the endpoint segment that precedes the setting name.
    pub fn endpoint(&self) -> &'static str {
        match self {
            WireProtocol::KeyBearer => "key",
            WireProtocol::NameToken => "name",
        }
    }

    /// Builds the request for `name`.
    pub fn request(&self, name: &SettingName, token: &str) -> SettingRequest {
        let credential = match self {
            WireProtocol::KeyBearer => Credential::Bearer(token.to_string()),
            WireProtocol::NameToken => Credential::TokenHeader(token.to_string()),
        };
        SettingRequest {
            setting: name.clone(),
            path: vec![
                SETTINGS_PATH.to_string(),
                self.endpoint().to_string(),
                name.as_str().to_string(),
            ],
            credential,
        }
    }

    /// Decodes a response body into a [`SettingValue`].
    ///
    /// # Examples
    ///
    /// ```
    /// use confserv::domain::{SettingName, SettingValue, WireProtocol};
    ///
    /// let name = SettingName::parse("app.name").unwrap();
    ///
    /// let value = WireProtocol::NameToken.decode(&name, br#"{"value":"demo"}"#).unwrap();
    /// assert_eq!(value, SettingValue::serialized("demo"));
    ///
    /// let value = WireProtocol::NameToken.decode(&name, br#"{"value":null}"#).unwrap();
    /// assert!(value.is_absent());
    /// ```
    pub fn decode(&self, name: &SettingName, body: &[u8]) -> Result<SettingValue> {
        let json: Value = serde_json::from_slice(body)
            .map_err(|e| SettingsError::from_json_error(name.to_string(), e))?;

        match self {
            WireProtocol::KeyBearer => Ok(SettingValue::from_json(json)),
            WireProtocol::NameToken => {
                if json.is_null() {
                    return Ok(SettingValue::Absent);
                }
                let envelope: Envelope = serde_json::from_value(json)
                    .map_err(|e| SettingsError::from_json_error(name.to_string(), e))?;
                Ok(envelope
                    .value
                    .map(SettingValue::Serialized)
                    .unwrap_or(SettingValue::Absent))
            }
        }
    }
}

impl fmt::Display for WireProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireProtocol::KeyBearer => f.write_str("key-bearer"),
            WireProtocol::NameToken => f.write_str("name-token"),
        }
    }
}

impl FromStr for WireProtocol {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "key-bearer" | "key" => Ok(WireProtocol::KeyBearer),
            "name-token" | "name" => Ok(WireProtocol::NameToken),
            other => Err(SettingsError::Configuration {
                layer: "protocol".to_string(),
                message: format!(
                    "unknown wire protocol '{}' (expected key-bearer or name-token)",
                    other
                ),
                source: None,
            }),
        }
    }
}
