// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered loading of client configuration.
//!
//! [`ConfigLoader`] merges any number of [`ConfigLayer`]s into one
//! [`ClientConfig`]. Layers are applied from lowest to highest priority on top
//! of `ClientConfig::default()`, so the highest-priority layer that sets a field
//! wins and unset fields keep their defaults.

use crate::domain::{ClientConfig, Result};
use crate::ports::ConfigLayer;

/// Merges configuration layers into a [`ClientConfig`].
///
/// # Examples
///
/// ```rust
/// use confserv::service::ConfigLoader;
///
/// # fn main() -> confserv::domain::Result<()> {
/// let config = ConfigLoader::new().with_env_vars().load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ConfigLoader {
    layers: Vec<Box<dyn ConfigLayer>>,
}

impl ConfigLoader {
    /// Creates a loader with no layers; it yields `ClientConfig::default()`.
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Loads the standard layers: the YAML file in the default OS location
    /// (when present) and `CONFSERV_*` environment variables.
    ///
    /// A default file that exists but cannot be read or parsed is an error.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn with_defaults(app_name: &str, qualifier: &str) -> Result<ClientConfig> {
        let mut loader = Self::new();

        #[cfg(feature = "yaml")]
        {
            use crate::adapters::YamlFileLayer;
            match YamlFileLayer::default_path(app_name, qualifier) {
                Ok(path) if path.exists() => {
                    loader = loader.with_yaml_file(&path)?;
                }
                Ok(path) => {
                    tracing::debug!("No configuration file at {}", path.display());
                }
                // No home directory, so there is no default file to read
                Err(e) => tracing::debug!("No default configuration location: {}", e),
            }
        }
        #[cfg(not(feature = "yaml"))]
        let _ = (app_name, qualifier);

        #[cfg(feature = "env")]
        {
            loader = loader.with_env_vars();
        }

        loader.load()
    }

    /// Adds a layer.
    pub fn with_layer(mut self, layer: Box<dyn ConfigLayer>) -> Self {
        self.layers.push(layer);
        self
    }

    /// Adds a YAML file layer.
    #[cfg(feature = "yaml")]
    pub fn with_yaml_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        use crate::adapters::YamlFileLayer;
        let layer = YamlFileLayer::from_file(path)?;
        Ok(self.with_layer(Box::new(layer)))
    }

    /// Adds the `CONFSERV_*` environment variable layer.
    #[cfg(feature = "env")]
    pub fn with_env_vars(self) -> Self {
        use crate::adapters::EnvVarLayer;
        self.with_layer(Box::new(EnvVarLayer::new()))
    }

    /// Adds an environment variable layer with a custom prefix.
    #[cfg(feature = "env")]
    pub fn with_env_prefix(self, prefix: impl Into<String>) -> Self {
        use crate::adapters::EnvVarLayer;
        self.with_layer(Box::new(EnvVarLayer::with_prefix(prefix)))
    }

    /// Adds parsed command-line arguments as a layer.
    #[cfg(feature = "cli")]
    pub fn with_cli_args(self, args: crate::adapters::ClientArgs) -> Self {
        self.with_layer(Box::new(args))
    }

    /// Returns the number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if no layers were added.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Resolves the configuration.
    ///
    /// Any layer failing to load fails the whole resolution.
    pub fn load(&self) -> Result<ClientConfig> {
        let mut ordered: Vec<&dyn ConfigLayer> = self.layers.iter().map(|l| &**l).collect();
        // Stable: among equal priorities, later layers win.
        ordered.sort_by_key(|layer| layer.priority());

        let mut config = ClientConfig::default();
        for layer in ordered {
            let partial = layer.load()?;
            tracing::debug!(
                "Applying configuration layer '{}' (priority {}, empty={})",
                layer.name(),
                layer.priority(),
                partial.is_empty()
            );
            config.apply(partial);
        }

        Ok(config)
    }
}
