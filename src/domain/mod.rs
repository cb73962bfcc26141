// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and logic.
//!
//! This module contains setting names, decoded values and their coercions, the
//! wire protocol strategy, client configuration, and errors. It does not depend
//! on any HTTP library.

pub mod client_config;
pub mod errors;
pub mod protocol;
pub mod service;
pub mod setting_name;
pub mod setting_value;

// Re-export commonly used types
pub use client_config::{ClientConfig, PartialClientConfig, DEFAULT_SERVER};
pub use errors::{Result, SettingsError};
pub use protocol::WireProtocol;
pub use service::SettingsClient;
pub use setting_name::SettingName;
pub use setting_value::SettingValue;
