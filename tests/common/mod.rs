// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use confserv::domain::Result;
use confserv::ports::{RawResponse, SettingRequest, SettingsTransport};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A transport that answers from canned responses keyed by request path.
///
/// Paths with no canned response answer `404` with a JSON `null` body. Every
/// request is recorded.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: HashMap<String, RawResponse>,
    requests: Arc<Mutex<Vec<SettingRequest>>>,
}

#[allow(dead_code)]
impl MockTransport {
    /// Creates a transport with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `path` with `200` and `body`.
    pub fn with_body(self, path: &str, body: &str) -> Self {
        self.with_response(path, 200, body)
    }

    /// Answers `path` with the given status and body.
    pub fn with_response(mut self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .insert(path.to_string(), RawResponse::new(status, body.as_bytes().to_vec()));
        self
    }

    /// Returns a handle to the recorded requests.
    pub fn requests(&self) -> Arc<Mutex<Vec<SettingRequest>>> {
        Arc::clone(&self.requests)
    }
}

impl SettingsTransport for MockTransport {
    fn name(&self) -> &str {
        "mock"
    }

    fn get(&self, request: &SettingRequest) -> Result<RawResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        Ok(self
            .responses
            .get(&request.path_string())
            .cloned()
            .unwrap_or_else(|| RawResponse::new(404, b"null".to_vec())))
    }
}
