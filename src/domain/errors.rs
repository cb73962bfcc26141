// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the settings client.
//!
//! This module defines the errors that can occur while fetching a setting from
//! the remote service and coercing it into a Rust type. All errors use
//! `thiserror` for proper error handling and conversion.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// The main error type for settings operations.
///
/// Every lookup is all-or-nothing: any of these errors is returned directly to
/// the caller and nothing is retried.
///
/// # Examples
///
/// ```
/// use confserv::domain::errors::SettingsError;
///
/// fn lookup() -> Result<String, SettingsError> {
///     Err(SettingsError::Server {
///         setting: "feature.enabled".to_string(),
///         status: 503,
///     })
/// }
///
/// assert!(lookup().unwrap_err().to_string().contains("503"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("Transport '{transport}' failed for setting '{setting}': {message}")]
    Transport {
        /// Name of the transport that failed
        transport: String,
        /// The setting being fetched
        setting: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The service answered with a 5xx status.
    #[error("Server error for setting '{setting}': HTTP {status}")]
    Server {
        /// The setting being fetched
        setting: String,
        /// The HTTP status code
        status: u16,
    },

    /// The response body was not valid JSON, or had the wrong JSON type.
    #[error("Failed to decode setting '{setting}': {message}")]
    Decode {
        /// The setting being decoded
        setting: String,
        /// The error message
        message: String,
        /// The underlying decoding error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A value could not be converted to the requested numeric type.
    #[error(
        "Failed to convert setting '{setting}' to type {target_type}: {source}"
    )]
    TypeConversion {
        /// The setting being converted
        setting: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A string did not match any accepted literal.
    #[error("Invalid value for setting '{setting}': '{value}' is not a valid {expected}")]
    InvalidValue {
        /// The setting being converted
        setting: String,
        /// The rejected value
        value: String,
        /// What was expected instead
        expected: &'static str,
    },

    /// Setting names must not be empty.
    #[error("Invalid setting name: {reason}")]
    InvalidSettingName {
        /// Why the name was rejected
        reason: String,
    },

    /// Client construction parameters could not be loaded or were invalid.
    #[error("Configuration layer '{layer}' error: {message}")]
    Configuration {
        /// The layer (or component) that rejected the configuration
        layer: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SettingsError {
    /// Creates a `TypeConversion` error from a `ParseIntError`.
    pub fn from_parse_int_error(setting: String, err: ParseIntError) -> Self {
        SettingsError::TypeConversion {
            setting,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a `TypeConversion` error from a `ParseFloatError`.
    pub fn from_parse_float_error(setting: String, err: ParseFloatError) -> Self {
        SettingsError::TypeConversion {
            setting,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a `Decode` error from a `serde_json::Error`.
    pub fn from_json_error(setting: String, err: serde_json::Error) -> Self {
        SettingsError::Decode {
            setting,
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Returns `true` for errors produced before any response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, SettingsError::Transport { .. })
    }

    /// Returns the HTTP status for server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            SettingsError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A specialized Result type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;
