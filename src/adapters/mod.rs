// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing transport and configuration layer implementations.
//!
//! [`HttpTransport`] implements the `SettingsTransport` port over HTTP. The
//! remaining adapters implement the `ConfigLayer` port, each supplying client
//! construction parameters from one place.

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "env")]
pub mod env_var;
pub mod http;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "cli")]
pub use cli::ClientArgs;
#[cfg(feature = "env")]
pub use env_var::EnvVarLayer;
pub use http::HttpTransport;
#[cfg(feature = "yaml")]
pub use yaml_file::YamlFileLayer;
