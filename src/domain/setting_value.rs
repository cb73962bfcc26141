// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decoded setting values and their type coercions.
//!
//! A [`SettingValue`] is what remains of a response body once the wire protocol
//! has unpacked it. The coercion methods here define exactly how a value turns
//! into a string, integer, float, boolean, duration, or structured object.
//!
//! # Integer convention
//!
//! - JSON numbers (scalar responses): integral values are taken exactly,
//!   fractional values are truncated toward zero. Values outside the `i64`
//!   range are an error, never saturated.
//! - Serialized strings (envelope responses): parsed strictly as a base-10
//!   `i64`. `"3.7"` is an error, not `3`.

use crate::domain::errors::{Result, SettingsError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Strings accepted as `true` by [`SettingValue::as_bool`].
pub const TRUE_LITERALS: [&str; 4] = ["true", "on", "yes", "1"];

/// Strings accepted as `false` by [`SettingValue::as_bool`].
pub const FALSE_LITERALS: [&str; 4] = ["false", "off", "no", "0"];

/// 2^63 as an `f64`; the exclusive upper bound of `i64` in float space.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// A numeric value that does not fit the requested type.
#[derive(Debug, Error)]
#[error("{value} is out of range for {target}")]
pub struct ValueOutOfRange {
    /// The rejected value, rendered as text
    pub value: String,
    /// The target type name
    pub target: &'static str,
}

/// A setting value as returned by the remote service.
///
/// # Examples
///
/// ```
/// use confserv::domain::SettingValue;
/// use serde_json::json;
///
/// let value = SettingValue::from_json(json!(3.9));
/// assert_eq!(value.as_i64("retry.count").unwrap(), 3);
///
/// let value = SettingValue::serialized("yes");
/// assert!(value.as_bool("feature.enabled").unwrap());
///
/// assert_eq!(SettingValue::Absent.as_string("app.name").unwrap(), "");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum SettingValue {
    /// No value was present (JSON `null` or a missing envelope field).
    Absent,
    /// The body was the value itself, already decoded as JSON.
    Json(Value),
    /// The value arrived as a string inside an envelope.
    Serialized(String),
}

impl SettingValue {
    /// Wraps a decoded JSON body, mapping `null` to [`SettingValue::Absent`].
    pub fn from_json(value: Value) -> Self {
        if value.is_null() {
            SettingValue::Absent
        } else {
            SettingValue::Json(value)
        }
    }

    /// Wraps an envelope's inner string.
    pub fn serialized(value: impl Into<String>) -> Self {
        SettingValue::Serialized(value.into())
    }

    /// Returns `true` if no value was present.
    pub fn is_absent(&self) -> bool {
        matches!(self, SettingValue::Absent)
    }

    /// Converts the value to a `String`.
    ///
    /// Absent values become the empty string. JSON values must be strings.
    pub fn as_string(&self, setting: &str) -> Result<String> {
        match self {
            SettingValue::Absent => Ok(String::new()),
            SettingValue::Serialized(s) => Ok(s.clone()),
            SettingValue::Json(Value::String(s)) => Ok(s.clone()),
            SettingValue::Json(other) => Err(wrong_json_type(setting, "string", other)),
        }
    }

    /// Converts the value to an `i64`.
    ///
    /// See the module documentation for the integer convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use confserv::domain::SettingValue;
    /// use serde_json::json;
    ///
    /// assert_eq!(SettingValue::from_json(json!(-2.7)).as_i64("k").unwrap(), -2);
    /// assert_eq!(SettingValue::serialized("42").as_i64("k").unwrap(), 42);
    /// assert!(SettingValue::serialized("4.2").as_i64("k").is_err());
    /// ```
    pub fn as_i64(&self, setting: &str) -> Result<i64> {
        match self {
            SettingValue::Absent => Ok(0),
            SettingValue::Serialized(s) => s
                .parse::<i64>()
                .map_err(|e| SettingsError::from_parse_int_error(setting.to_string(), e)),
            SettingValue::Json(Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    return Ok(i);
                }
                let truncated = n.as_f64().map(f64::trunc).unwrap_or(f64::NAN);
                if (-I64_BOUND..I64_BOUND).contains(&truncated) {
                    Ok(truncated as i64)
                } else {
                    Err(out_of_range(setting, n.to_string(), "i64"))
                }
            }
            SettingValue::Json(other) => Err(wrong_json_type(setting, "number", other)),
        }
    }

    /// Converts the value to an `f64`.
    pub fn as_f64(&self, setting: &str) -> Result<f64> {
        match self {
            SettingValue::Absent => Ok(0.0),
            SettingValue::Serialized(s) => s
                .parse::<f64>()
                .map_err(|e| SettingsError::from_parse_float_error(setting.to_string(), e)),
            SettingValue::Json(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| out_of_range(setting, n.to_string(), "f64")),
            SettingValue::Json(other) => Err(wrong_json_type(setting, "number", other)),
        }
    }

    /// Converts the value to a boolean.
    ///
    /// JSON booleans are used as-is. Strings must be one of
    /// [`TRUE_LITERALS`] or [`FALSE_LITERALS`], compared exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use confserv::domain::SettingValue;
    ///
    /// assert!(SettingValue::serialized("on").as_bool("k").unwrap());
    /// assert!(!SettingValue::serialized("0").as_bool("k").unwrap());
    /// assert!(SettingValue::serialized("maybe").as_bool("k").is_err());
    /// ```
    pub fn as_bool(&self, setting: &str) -> Result<bool> {
        match self {
            SettingValue::Absent => Ok(false),
            SettingValue::Json(Value::Bool(b)) => Ok(*b),
            SettingValue::Json(Value::String(s)) | SettingValue::Serialized(s) => {
                parse_bool_literal(setting, s)
            }
            SettingValue::Json(other) => Err(wrong_json_type(setting, "boolean", other)),
        }
    }

    /// Converts the value to a `Duration`.
    ///
    /// The integer value is taken as a count of nanoseconds with no unit
    /// conversion. Negative values are rejected.
    pub fn as_duration(&self, setting: &str) -> Result<Duration> {
        let nanos = self.as_i64(setting)?;
        u64::try_from(nanos)
            .map(Duration::from_nanos)
            .map_err(|_| out_of_range(setting, nanos.to_string(), "Duration"))
    }

    /// Deserializes the value into `T`.
    ///
    /// JSON values are deserialized directly; serialized strings are parsed as
    /// JSON first. Returns `Ok(None)` when no value is present.
    pub fn deserialize<T: DeserializeOwned>(&self, setting: &str) -> Result<Option<T>> {
        let decoded = match self {
            SettingValue::Absent => return Ok(None),
            SettingValue::Json(v) => serde_json::from_value(v.clone()),
            SettingValue::Serialized(s) => serde_json::from_str(s),
        };
        decoded
            .map(Some)
            .map_err(|e| SettingsError::from_json_error(setting.to_string(), e))
    }

    /// Deserializes the value over `target`, leaving it untouched when absent.
    pub fn bind<T: DeserializeOwned>(&self, setting: &str, target: &mut T) -> Result<()> {
        if let Some(value) = self.deserialize(setting)? {
            *target = value;
        }
        Ok(())
    }
}

impl From<Value> for SettingValue {
    fn from(value: Value) -> Self {
        SettingValue::from_json(value)
    }
}

fn parse_bool_literal(setting: &str, s: &str) -> Result<bool> {
    if TRUE_LITERALS.contains(&s) {
        Ok(true)
    } else if FALSE_LITERALS.contains(&s) {
        Ok(false)
    } else {
        Err(SettingsError::InvalidValue {
            setting: setting.to_string(),
            value: s.to_string(),
            expected: "boolean",
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn wrong_json_type(setting: &str, expected: &str, found: &Value) -> SettingsError {
    SettingsError::Decode {
        setting: setting.to_string(),
        message: format!("expected {}, found {}", expected, json_kind(found)),
        source: None,
    }
}

fn out_of_range(setting: &str, value: String, target: &'static str) -> SettingsError {
    SettingsError::TypeConversion {
        setting: setting.to_string(),
        target_type: target.to_string(),
        source: Box::new(ValueOutOfRange { value, target }),
    }
}
