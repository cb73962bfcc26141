// SPDX-License-Identifier: MIT OR Apache-2.0

//! Setting name newtype with case-insensitive semantics.
//!
//! Setting names are normalized to lowercase when constructed, so `"Foo"` and
//! `"foo"` always resolve to the same remote setting.

use crate::domain::errors::{Result, SettingsError};
use std::fmt;

/// A lowercase-normalized setting name.
///
/// # Examples
///
/// ```
/// use confserv::domain::SettingName;
///
/// let name = SettingName::parse("Feature.Enabled").unwrap();
/// assert_eq!(name.as_str(), "feature.enabled");
/// assert_eq!(name, SettingName::parse("FEATURE.ENABLED").unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SettingName(String);

impl SettingName {
    /// Normalizes `name` and rejects it if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use confserv::domain::SettingName;
    ///
    /// assert!(SettingName::parse("").is_err());
    /// assert!(SettingName::parse("   ").is_err());
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(SettingsError::InvalidSettingName {
                reason: "setting name must not be empty".to_string(),
            });
        }
        Ok(SettingName(name.to_lowercase()))
    }

    /// Returns the normalized name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the name into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for SettingName {
    type Error = SettingsError;

    fn try_from(s: &str) -> Result<Self> {
        SettingName::parse(s)
    }
}

impl TryFrom<String> for SettingName {
    type Error = SettingsError;

    fn try_from(s: String) -> Result<Self> {
        SettingName::parse(&s)
    }
}

impl From<SettingName> for String {
    fn from(name: SettingName) -> Self {
        name.0
    }
}

impl AsRef<str> for SettingName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
