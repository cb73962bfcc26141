// SPDX-License-Identifier: MIT OR Apache-2.0

//! A typed client for a remote configuration service.
//!
//! Applications ask the service for a named setting and receive it coerced to
//! the type they need: string, integer, float, boolean, duration, or any
//! `serde` type. Each lookup is a single HTTP request; nothing is cached.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and logic (`SettingName`, `SettingValue`, `WireProtocol`, errors)
//! - **Ports**: Trait definitions that define interfaces (`SettingsTransport`, `ConfigLayer`)
//! - **Adapters**: The HTTP transport and the YAML, environment, and CLI configuration layers
//! - **Service**: The remote settings client and the layered configuration loader
//!
//! # Wire Protocols
//!
//! - `key-bearer` (default): `GET /settings/key/{name}` with `Authorization: Bearer <token>`;
//!   the body is the value as a JSON scalar
//! - `name-token`: `GET /settings/name/{name}` with a `Token` header; the body is
//!   `{"value": "<string>"}` or `{"value": null}`
//!
//! # Feature Flags
//!
//! - `yaml`: Load client parameters from YAML files (default)
//! - `env`: Load client parameters from `CONFSERV_*` environment variables (default)
//! - `cli`: Load client parameters from `--confserv-*` command-line flags (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use confserv::prelude::*;
//! use std::time::Duration;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let client = RemoteSettingsClient::new("http://127.0.0.1:1319", "my-token")?;
//!
//! let enabled: bool = client.get_bool("Feature.Enabled")?;
//! let retries: i64 = client.get_int("retry.count")?;
//! let backoff: Duration = client.get_duration("retry.backoff")?;
//! # let _ = (enabled, retries, backoff);
//! # Ok(())
//! # }
//! ```
//!
//! # Layered Configuration
//!
//! ```rust,no_run
//! use confserv::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::new()
//!     .with_yaml_file("confserv.yaml")?
//!     .with_env_vars()
//!     .load()?;
//!
//! let client = RemoteSettingsClient::from_config(&config)?;
//! # let _ = client;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::HttpTransport;
    pub use crate::domain::{
        ClientConfig, Result, SettingName, SettingValue, SettingsClient, SettingsError,
        WireProtocol,
    };
    pub use crate::ports::{ConfigLayer, SettingsTransport};
    pub use crate::service::{ConfigLoader, RemoteSettingsClient, SettingsClientBuilder};

    // Re-export adapters based on feature flags
    #[cfg(feature = "cli")]
    pub use crate::adapters::ClientArgs;
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarLayer;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlFileLayer;
}
