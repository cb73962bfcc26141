// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration layer trait definition.
//!
//! A `ConfigLayer` is one place client construction parameters can come from:
//! a YAML file, environment variables, or command-line flags. Layers are merged
//! by priority into a single [`ClientConfig`](crate::domain::ClientConfig).

use crate::domain::{PartialClientConfig, Result};

/// A source of client construction parameters.
///
/// # Priority
///
/// Higher priority values override lower ones. The built-in layers use:
///
/// - **3 (highest)**: Command-line arguments
/// - **2**: Environment variables
/// - **1 (lowest)**: Configuration files
///
/// # Examples
///
/// ```rust
/// use confserv::ports::ConfigLayer;
/// use confserv::domain::{PartialClientConfig, Result};
///
/// struct Fixed;
///
/// impl ConfigLayer for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn priority(&self) -> u8 {
///         1
///     }
///
///     fn load(&self) -> Result<PartialClientConfig> {
///         Ok(PartialClientConfig {
///             token: Some("abc".to_string()),
///             ..Default::default()
///         })
///     }
/// }
/// ```
pub trait ConfigLayer: Send + Sync {
    /// Returns the name of this layer, used in logs and errors.
    fn name(&self) -> &str;

    /// Returns the priority of this layer.
    fn priority(&self) -> u8;

    /// Reads the overrides this layer provides.
    ///
    /// Fields the layer knows nothing about are left as `None`.
    fn load(&self) -> Result<PartialClientConfig>;
}
