// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings client trait definition.
//!
//! This module defines the `SettingsClient` trait, the main interface for
//! reading typed settings. Implementors supply [`SettingsClient::get_value`];
//! the typed getters are provided on top of it and share one coercion contract.

use crate::domain::{Result, SettingName, SettingValue};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// The main settings access trait.
///
/// Every getter takes a case-insensitive setting name, performs exactly one
/// lookup, and coerces the result. Absent values resolve to the type's zero
/// value (`""`, `0`, `0.0`, `false`, zero duration).
///
/// # Examples
///
/// ```rust
/// use confserv::domain::{Result, SettingName, SettingValue, SettingsClient};
///
/// struct Fixed;
///
/// impl SettingsClient for Fixed {
///     fn get_value(&self, _name: &SettingName) -> Result<SettingValue> {
///         Ok(SettingValue::serialized("3"))
///     }
/// }
///
/// let client = Fixed;
/// assert_eq!(client.get_int("Retry.Count").unwrap(), 3);
/// ```
pub trait SettingsClient {
    /// Fetches and decodes the raw value of a setting.
    ///
    /// # Returns
    ///
    /// * `Ok(SettingValue)` - The decoded value, possibly [`SettingValue::Absent`]
    /// * `Err(SettingsError)` - Transport, server, or decoding failure
    fn get_value(&self, name: &SettingName) -> Result<SettingValue>;

    /// Fetches a setting as a `String`.
    fn get_string(&self, name: &str) -> Result<String> {
        let name = SettingName::parse(name)?;
        self.get_value(&name)?.as_string(name.as_str())
    }

    /// Fetches a setting as an `i64`.
    ///
    /// JSON numbers are truncated toward zero; serialized strings must be
    /// base-10 integers.
    fn get_int(&self, name: &str) -> Result<i64> {
        let name = SettingName::parse(name)?;
        self.get_value(&name)?.as_i64(name.as_str())
    }

    /// Fetches a setting as an `f64`.
    fn get_float(&self, name: &str) -> Result<f64> {
        let name = SettingName::parse(name)?;
        self.get_value(&name)?.as_f64(name.as_str())
    }

    /// Fetches a setting as a boolean.
    ///
    /// Accepts `true`/`on`/`yes`/`1` and `false`/`off`/`no`/`0`; any other
    /// string is an `InvalidValue` error.
    fn get_bool(&self, name: &str) -> Result<bool> {
        let name = SettingName::parse(name)?;
        self.get_value(&name)?.as_bool(name.as_str())
    }

    /// Fetches a setting as a `Duration`, reading the integer value as nanoseconds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use confserv::domain::{Result, SettingName, SettingValue, SettingsClient};
    /// # use std::time::Duration;
    /// # struct Fixed;
    /// # impl SettingsClient for Fixed {
    /// #     fn get_value(&self, _name: &SettingName) -> Result<SettingValue> {
    /// #         Ok(SettingValue::serialized("3"))
    /// #     }
    /// # }
    /// let client = Fixed;
    /// assert_eq!(client.get_duration("retry.count").unwrap(), Duration::from_nanos(3));
    /// ```
    fn get_duration(&self, name: &str) -> Result<Duration> {
        let name = SettingName::parse(name)?;
        self.get_value(&name)?.as_duration(name.as_str())
    }

    /// Fetches a setting and deserializes it as JSON into `T`.
    ///
    /// Returns `Ok(None)` when the setting has no value.
    fn get_object<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        Self: Sized,
    {
        let name = SettingName::parse(name)?;
        self.get_value(&name)?.deserialize(name.as_str())
    }

    /// Fetches a setting and deserializes it over `target`.
    ///
    /// When the setting has no value, `target` is left unmodified and the call
    /// succeeds.
    fn bind_object<T>(&self, name: &str, target: &mut T) -> Result<()>
    where
        T: DeserializeOwned,
        Self: Sized,
    {
        let name = SettingName::parse(name)?;
        self.get_value(&name)?.bind(name.as_str(), target)
    }
}
