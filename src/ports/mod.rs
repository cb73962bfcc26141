// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the traits that decouple the settings client from the
//! outside world: the transport used to reach the service, and the layers that
//! supply construction parameters. Adapters implement them.

pub mod config_layer;
pub mod transport;

// Re-export commonly used types
pub use config_layer::ConfigLayer;
pub use transport::{Credential, RawResponse, SettingRequest, SettingsTransport};
