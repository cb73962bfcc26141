// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the settings client and configuration loading.

pub mod config_loader;
pub mod remote_client;

pub use config_loader::ConfigLoader;
pub use remote_client::{RemoteSettingsClient, SettingsClientBuilder};
