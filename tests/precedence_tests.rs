// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for configuration layer precedence.

use confserv::domain::DEFAULT_SERVER;
use confserv::prelude::*;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper to set and clean up environment variables
struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}

fn yaml_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
#[cfg(all(feature = "env", feature = "yaml"))]
fn test_precedence_env_over_yaml() {
    let mut env_guard = EnvGuard::new();
    env_guard.set("PREC_A_TOKEN", "env-token");

    let file = yaml_file("server: http://from-yaml:1\ntoken: yaml-token\n");

    // Layers added in reverse priority order
    let config = ConfigLoader::new()
        .with_env_prefix("PREC_A_")
        .with_yaml_file(file.path())
        .unwrap()
        .load()
        .unwrap();

    // Environment variable wins (priority 2 > 1); unset fields fall through
    assert_eq!(config.token, "env-token");
    assert_eq!(config.server, "http://from-yaml:1");
}

#[test]
#[cfg(all(feature = "cli", feature = "env"))]
fn test_precedence_cli_over_env() {
    let mut env_guard = EnvGuard::new();
    env_guard.set("PREC_B_PROTOCOL", "key-bearer");
    env_guard.set("PREC_B_TIMEOUT_SECS", "9");

    let args = ClientArgs::from_args(["--confserv-protocol", "name-token"]).unwrap();
    let config = ConfigLoader::new()
        .with_cli_args(args)
        .with_env_prefix("PREC_B_")
        .load()
        .unwrap();

    // CLI wins (priority 3 > 2)
    assert_eq!(config.protocol, WireProtocol::NameToken);
    assert_eq!(config.timeout_secs, Some(9));
}

#[test]
#[cfg(all(feature = "cli", feature = "env", feature = "yaml"))]
fn test_all_three_layers() {
    let mut env_guard = EnvGuard::new();
    env_guard.set("PREC_C_TOKEN", "env-token");
    env_guard.set("PREC_C_SERVER", "http://from-env:2");

    let file = yaml_file(
        "app:\n  name: demo\n\
         confserv:\n  server: http://from-yaml:1\n  token: yaml-token\n  timeout_secs: 4\n",
    );
    let args = ClientArgs::from_args(["--confserv-server=http://from-cli:3"]).unwrap();

    let config = ConfigLoader::new()
        .with_yaml_file(file.path())
        .unwrap()
        .with_env_prefix("PREC_C_")
        .with_cli_args(args)
        .load()
        .unwrap();

    assert_eq!(config.server, "http://from-cli:3");
    assert_eq!(config.token, "env-token");
    assert_eq!(config.timeout_secs, Some(4));
    assert_eq!(config.protocol, WireProtocol::KeyBearer);
}

#[test]
#[cfg(feature = "env")]
fn test_invalid_env_value_fails_load() {
    let mut env_guard = EnvGuard::new();
    env_guard.set("PREC_D_TIMEOUT_SECS", "forever");

    let result = ConfigLoader::new().with_env_prefix("PREC_D_").load();
    assert!(matches!(result, Err(SettingsError::Configuration { .. })));
}

#[test]
#[cfg(feature = "env")]
fn test_blank_server_keeps_default() {
    let mut env_guard = EnvGuard::new();
    env_guard.set("PREC_E_SERVER", "  ");

    let config = ConfigLoader::new().with_env_prefix("PREC_E_").load().unwrap();
    assert_eq!(config.server, DEFAULT_SERVER);
}

#[test]
#[cfg(feature = "yaml")]
fn test_loaded_config_builds_client() {
    let file = yaml_file("server: http://127.0.0.1:1\nprotocol: name-token\n");
    let config = ConfigLoader::new()
        .with_yaml_file(file.path())
        .unwrap()
        .load()
        .unwrap();

    let client = RemoteSettingsClient::from_config(&config).unwrap();
    assert_eq!(client.protocol(), WireProtocol::NameToken);
    assert_eq!(client.transport_name(), "http");
}

#[test]
#[cfg(all(target_os = "linux", feature = "yaml"))]
fn test_default_location_file() {
    let mut env_guard = EnvGuard::new();
    let config_home = tempfile::tempdir().unwrap();
    env_guard.set("XDG_CONFIG_HOME", config_home.path().to_str().unwrap());

    // Absent file is skipped
    let config = ConfigLoader::with_defaults("defaultsapp", "com.example").unwrap();
    assert_eq!(config.server, DEFAULT_SERVER);

    let app_dir = config_home.path().join("defaultsapp");
    std::fs::create_dir_all(&app_dir).unwrap();
    let path = app_dir.join("confserv.yaml");

    // Valid file is applied
    std::fs::write(&path, "server: http://from-default:1\ntoken: default-token\n").unwrap();
    let layer = YamlFileLayer::from_default_location("defaultsapp", "com.example").unwrap();
    assert_eq!(layer.load().unwrap().token.as_deref(), Some("default-token"));
    let config = ConfigLoader::with_defaults("defaultsapp", "com.example").unwrap();
    assert_eq!(config.server, "http://from-default:1");

    // Malformed file is reported, not silently replaced by defaults
    std::fs::write(&path, "server: [unclosed\ntoken: real-token\n").unwrap();
    let result = ConfigLoader::with_defaults("defaultsapp", "com.example");
    assert!(matches!(result, Err(SettingsError::Configuration { .. })));
}
