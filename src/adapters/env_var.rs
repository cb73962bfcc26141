// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration layer.
//!
//! This module provides a layer that reads client construction parameters from
//! environment variables:
//!
//! | Variable                 | Field          |
//! |--------------------------|----------------|
//! | `CONFSERV_SERVER`        | `server`       |
//! | `CONFSERV_TOKEN`         | `token`        |
//! | `CONFSERV_PROTOCOL`      | `protocol`     |
//! | `CONFSERV_TIMEOUT_SECS`  | `timeout_secs` |

use crate::domain::{PartialClientConfig, Result, SettingsError, WireProtocol};
use crate::ports::ConfigLayer;
use std::collections::HashMap;
use std::env;

/// Prefix used by [`EnvVarLayer::new`].
pub const DEFAULT_ENV_PREFIX: &str = "CONFSERV_";

/// Maximum length for environment variable values
const MAX_ENV_VALUE_LEN: usize = 64 * 1024;

/// Configuration layer backed by environment variables.
///
/// Variables are read when [`ConfigLayer::load`] is called, not when the layer
/// is created.
///
/// # Priority
///
/// Environment variables have a priority of 2, which means they override
/// configuration files (priority 1) but are overridden by command-line
/// arguments (priority 3).
///
/// # Examples
///
/// ```rust
/// use confserv::adapters::EnvVarLayer;
///
/// // Reads CONFSERV_SERVER, CONFSERV_TOKEN, ...
/// let layer = EnvVarLayer::new();
///
/// // Reads MYAPP_CONF_SERVER, MYAPP_CONF_TOKEN, ...
/// let layer = EnvVarLayer::with_prefix("MYAPP_CONF_");
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarLayer {
    /// Prefix prepended to every variable name
    prefix: String,
    /// Fixed values used instead of the process environment
    values: Option<HashMap<String, String>>,
}

impl EnvVarLayer {
    /// Creates a layer reading `CONFSERV_*` variables.
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Creates a layer reading variables with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            values: None,
        }
    }

    /// Creates a layer over fixed values instead of the process environment.
    ///
    /// Keys are full variable names, including the prefix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use confserv::adapters::EnvVarLayer;
    /// use confserv::ports::ConfigLayer;
    /// use std::collections::HashMap;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("CONFSERV_TOKEN".to_string(), "abc".to_string());
    ///
    /// let layer = EnvVarLayer::with_values(values);
    /// assert_eq!(layer.load().unwrap().token.as_deref(), Some("abc"));
    /// ```
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            prefix: DEFAULT_ENV_PREFIX.to_string(),
            values: Some(values),
        }
    }

    /// Returns the variable prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn lookup(&self, field: &str) -> Option<String> {
        let var = format!("{}{}", self.prefix, field);
        let value = match &self.values {
            Some(values) => values.get(&var).cloned(),
            None => env::var(&var).ok(),
        }?;

        if value.len() > MAX_ENV_VALUE_LEN {
            tracing::debug!(
                "Skipping oversized environment variable {}: value_len={} (max {})",
                var,
                value.len(),
                MAX_ENV_VALUE_LEN
            );
            return None;
        }
        Some(value)
    }

    fn invalid(&self, field: &str, message: String) -> SettingsError {
        SettingsError::Configuration {
            layer: "env".to_string(),
            message: format!("{}{}: {}", self.prefix, field, message),
            source: None,
        }
    }
}

impl Default for EnvVarLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLayer for EnvVarLayer {
    fn name(&self) -> &str {
        "env"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn load(&self) -> Result<PartialClientConfig> {
        let protocol = match self.lookup("PROTOCOL") {
            Some(raw) => Some(
                raw.parse::<WireProtocol>()
                    .map_err(|e| self.invalid("PROTOCOL", e.to_string()))?,
            ),
            None => None,
        };

        let timeout_secs = match self.lookup("TIMEOUT_SECS") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| self.invalid("TIMEOUT_SECS", e.to_string()))?,
            ),
            None => None,
        };

        let partial = PartialClientConfig {
            server: self.lookup("SERVER"),
            token: self.lookup("TOKEN"),
            protocol,
            timeout_secs,
        };

        tracing::debug!(
            "Loaded environment configuration (prefix={}, empty={})",
            self.prefix,
            partial.is_empty()
        );

        Ok(partial)
    }
}
