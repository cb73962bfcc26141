// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the settings client.
//!
//! These tests drive `RemoteSettingsClient` through a mock transport and verify
//! the typed getters end to end for both wire protocols.

mod common;

use common::MockTransport;
use confserv::domain::{SettingsClient, SettingsError, WireProtocol};
use confserv::service::RemoteSettingsClient;
use serde::Deserialize;
use std::time::Duration;

fn key_bearer(transport: MockTransport) -> RemoteSettingsClient {
    RemoteSettingsClient::builder()
        .token("t0k")
        .with_transport(Box::new(transport))
        .build()
        .unwrap()
}

fn name_token(transport: MockTransport) -> RemoteSettingsClient {
    RemoteSettingsClient::builder()
        .token("t0k")
        .protocol(WireProtocol::NameToken)
        .with_transport(Box::new(transport))
        .build()
        .unwrap()
}

#[test]
fn test_feature_flag_yes_and_maybe() {
    let client = name_token(
        MockTransport::new().with_body("/settings/name/feature.enabled", r#"{"value":"yes"}"#),
    );
    assert!(client.get_bool("Feature.Enabled").unwrap());

    let client = name_token(
        MockTransport::new().with_body("/settings/name/feature.enabled", r#"{"value":"maybe"}"#),
    );
    let err = client.get_bool("Feature.Enabled").unwrap_err();
    assert!(matches!(err, SettingsError::InvalidValue { .. }));
}

#[test]
fn test_retry_count_as_int_and_duration() {
    let client = name_token(
        MockTransport::new().with_body("/settings/name/retry.count", r#"{"value":"3"}"#),
    );
    assert_eq!(client.get_int("retry.count").unwrap(), 3);
    assert_eq!(
        client.get_duration("retry.count").unwrap(),
        Duration::from_nanos(3)
    );
}

#[test]
fn test_key_bearer_scalars() {
    let transport = MockTransport::new()
        .with_body("/settings/key/app.name", r#""demo""#)
        .with_body("/settings/key/pool.size", "16")
        .with_body("/settings/key/ratio", "0.25")
        .with_body("/settings/key/enabled", "true")
        .with_body("/settings/key/limit", "7.9");
    let client = key_bearer(transport);

    assert_eq!(client.get_string("App.Name").unwrap(), "demo");
    assert_eq!(client.get_int("pool.size").unwrap(), 16);
    assert_eq!(client.get_float("ratio").unwrap(), 0.25);
    assert!(client.get_bool("enabled").unwrap());
    // Fractional JSON numbers truncate toward zero
    assert_eq!(client.get_int("limit").unwrap(), 7);
}

#[test]
fn test_missing_values_yield_zero_values() {
    // Unknown paths answer 404 with a null body
    let client = key_bearer(MockTransport::new());

    assert_eq!(client.get_string("missing").unwrap(), "");
    assert_eq!(client.get_int("missing").unwrap(), 0);
    assert_eq!(client.get_float("missing").unwrap(), 0.0);
    assert!(!client.get_bool("missing").unwrap());
    assert_eq!(client.get_duration("missing").unwrap(), Duration::ZERO);
    assert_eq!(client.get_object::<Vec<String>>("missing").unwrap(), None);
}

#[test]
fn test_envelope_null_value_is_absent() {
    let client = name_token(
        MockTransport::new().with_body("/settings/name/app.name", r#"{"value":null}"#),
    );
    assert_eq!(client.get_string("app.name").unwrap(), "");
}

#[test]
fn test_serialized_integer_is_strict() {
    let client = name_token(
        MockTransport::new()
            .with_body("/settings/name/a", r#"{"value":"3.7"}"#)
            .with_body("/settings/name/b", r#"{"value":" 3"}"#),
    );
    assert!(matches!(
        client.get_int("a"),
        Err(SettingsError::TypeConversion { .. })
    ));
    assert!(client.get_int("b").is_err());
}

#[test]
fn test_negative_duration_rejected() {
    let client = key_bearer(MockTransport::new().with_body("/settings/key/timeout", "-5"));
    assert_eq!(client.get_int("timeout").unwrap(), -5);
    assert!(client.get_duration("timeout").is_err());
}

#[test]
fn test_server_errors() {
    let transport = MockTransport::new()
        .with_response("/settings/key/a", 500, "not json at all")
        .with_response("/settings/key/b", 503, r#""cached""#);
    let client = key_bearer(transport);

    let err = client.get_string("a").unwrap_err();
    assert_eq!(err.status(), Some(500));

    let err = client.get_string("b").unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[test]
fn test_malformed_body_is_decode_error() {
    let client = key_bearer(MockTransport::new().with_body("/settings/key/a", "{broken"));
    assert!(matches!(
        client.get_string("a"),
        Err(SettingsError::Decode { .. })
    ));
}

#[test]
fn test_wrong_json_type_is_decode_error() {
    let client = key_bearer(MockTransport::new().with_body("/settings/key/a", "[1,2]"));
    assert!(matches!(
        client.get_int("a"),
        Err(SettingsError::Decode { .. })
    ));
}

#[test]
fn test_empty_name_never_reaches_transport() {
    let transport = MockTransport::new();
    let requests = transport.requests();
    let client = key_bearer(transport);

    assert!(matches!(
        client.get_string("   "),
        Err(SettingsError::InvalidSettingName { .. })
    ));
    assert!(requests.lock().unwrap().is_empty());
}

#[test]
fn test_no_caching_between_calls() {
    let transport = MockTransport::new().with_body("/settings/key/a", "1");
    let requests = transport.requests();
    let client = key_bearer(transport);

    client.get_int("a").unwrap();
    client.get_int("A").unwrap();
    client.get_string("a").unwrap_err();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 3);
    assert!(requests
        .iter()
        .all(|r| r.path_string() == "/settings/key/a"));
}

#[derive(Debug, Deserialize, PartialEq)]
struct Limits {
    max: u32,
    burst: u32,
}

#[test]
fn test_objects_from_both_protocols() {
    let client = key_bearer(
        MockTransport::new().with_body("/settings/key/limits", r#"{"max":10,"burst":2}"#),
    );
    assert_eq!(
        client.get_object::<Limits>("limits").unwrap(),
        Some(Limits { max: 10, burst: 2 })
    );

    let client = name_token(MockTransport::new().with_body(
        "/settings/name/limits",
        r#"{"value":"{\"max\":4,\"burst\":1}"}"#,
    ));
    assert_eq!(
        client.get_object::<Limits>("limits").unwrap(),
        Some(Limits { max: 4, burst: 1 })
    );
}

#[test]
fn test_bind_object_keeps_target_when_absent() {
    let client = key_bearer(MockTransport::new());
    let mut limits = Limits { max: 1, burst: 1 };
    client.bind_object("limits", &mut limits).unwrap();
    assert_eq!(limits, Limits { max: 1, burst: 1 });
}

#[test]
fn test_bind_object_envelope_null_is_noop() {
    let client = name_token(
        MockTransport::new().with_body("/settings/name/limits", r#"{"value":null}"#),
    );
    let mut limits = Limits { max: 8, burst: 3 };
    client.bind_object("Limits", &mut limits).unwrap();
    assert_eq!(limits, Limits { max: 8, burst: 3 });

    let client = name_token(MockTransport::new().with_body(
        "/settings/name/limits",
        r#"{"value":"{\"max\":2,\"burst\":0}"}"#,
    ));
    client.bind_object("limits", &mut limits).unwrap();
    assert_eq!(limits, Limits { max: 2, burst: 0 });
}
