// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file configuration layer.
//!
//! This module provides a layer that reads client construction parameters from
//! a YAML file. The parameters may sit at the top level of the document or
//! under a `confserv:` section, so they can share a file with the rest of an
//! application's configuration:
//!
//! ```yaml
//! confserv:
//!   server: https://conf.example.com
//!   token: abc123
//!   protocol: name-token
//!   timeout_secs: 10
//! ```

use crate::domain::{PartialClientConfig, Result, SettingsError};
use crate::ports::ConfigLayer;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for configuration files (1MB)
const MAX_YAML_FILE_SIZE: u64 = 1024 * 1024;

/// Section name used when the file holds more than client parameters.
const SECTION: &str = "confserv";

/// File name looked up in the OS configuration directory.
pub const DEFAULT_FILE_NAME: &str = "confserv.yaml";

/// Configuration layer backed by a YAML file.
///
/// The file is read once, when the layer is created.
///
/// # Priority
///
/// YAML files have a priority of 1, so both environment variables and
/// command-line arguments override them.
///
/// # Examples
///
/// ```rust,no_run
/// use confserv::adapters::YamlFileLayer;
///
/// let layer = YamlFileLayer::from_file("/etc/myapp/confserv.yaml").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileLayer {
    /// Path the values were read from, if any
    file_path: Option<PathBuf>,
    /// Parsed overrides
    values: PartialClientConfig,
    /// Priority for this layer
    priority: u8,
}

impl YamlFileLayer {
    /// Parses YAML content into client overrides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use confserv::adapters::YamlFileLayer;
    /// use confserv::domain::WireProtocol;
    ///
    /// let values = YamlFileLayer::parse("protocol: name-token\ntoken: t").unwrap();
    /// assert_eq!(values.protocol, Some(WireProtocol::NameToken));
    /// ```
    pub fn parse(content: &str) -> Result<PartialClientConfig> {
        let document: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| yaml_error(e.to_string(), e))?;

        let section = match document.get(SECTION) {
            Some(section) => section.clone(),
            None => document,
        };

        if section.is_null() {
            return Ok(PartialClientConfig::default());
        }

        serde_yaml::from_value(section).map_err(|e| yaml_error(e.to_string(), e))
    }

    /// Creates a layer from YAML content held in memory.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(Self {
            file_path: None,
            values: Self::parse(content)?,
            priority: 1,
        })
    }

    /// Creates a layer from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref();

        let canonical_path = file_path.canonicalize().map_err(|e| SettingsError::Configuration {
            layer: "yaml-file".to_string(),
            message: format!("Invalid or inaccessible path: {}", file_path.display()),
            source: Some(Box::new(e)),
        })?;

        // Check file size before reading
        let metadata = fs::metadata(&canonical_path)?;
        if metadata.len() > MAX_YAML_FILE_SIZE {
            return Err(SettingsError::Configuration {
                layer: "yaml-file".to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_YAML_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = fs::read_to_string(&canonical_path)?;
        let values = Self::parse(&content)?;

        tracing::debug!("Loaded client configuration from {}", canonical_path.display());

        Ok(Self {
            file_path: Some(canonical_path),
            values,
            priority: 1,
        })
    }

    /// Creates a layer from `confserv.yaml` in the OS-appropriate config
    /// directory (e.g. `~/.config/<app>/` on Linux).
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::from_file(Self::default_path(app_name, qualifier)?)
    }

    /// Returns the path [`from_default_location`](Self::from_default_location) reads.
    pub fn default_path(app_name: &str, qualifier: &str) -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| SettingsError::Configuration {
                layer: "yaml-file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Ok(proj_dirs.config_dir().join(DEFAULT_FILE_NAME))
    }

    /// Overrides the priority of this layer.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the file the layer was read from.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

impl ConfigLayer for YamlFileLayer {
    fn name(&self) -> &str {
        "yaml-file"
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn load(&self) -> Result<PartialClientConfig> {
        Ok(self.values.clone())
    }
}

fn yaml_error(message: String, err: serde_yaml::Error) -> SettingsError {
    SettingsError::Configuration {
        layer: "yaml-file".to_string(),
        message: format!("Failed to parse YAML: {}", message),
        source: Some(Box::new(err)),
    }
}
