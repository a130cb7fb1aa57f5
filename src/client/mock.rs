//! Recording transport for testing
//!
//! Captures every request handed to the transport and replays canned
//! responses, so resource clients can be tested without a server.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use tokio::sync::Mutex;

use super::base::{ApiRequest, ApiResponse, RequestOptions, Transport};
use crate::error::{ApiError, Result};

/// A captured transport call for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    pub method: Method,
    /// Rendered path, e.g. `/api/v2/orgs/abc/members`
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
    pub content_type: Option<&'static str>,
    pub options: Option<RequestOptions>,
}

/// Mock transport for testing.
///
/// Responses are returned in the order they were queued; once the queue is
/// empty every call answers `204 No Content`.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new()
///     .with_response(r#"{"orgs": []}"#)
///     .await;
/// let client = OrgsClient::new(mock);
/// ```
#[derive(Default)]
pub struct MockTransport {
    /// Bodies to return, consumed front to back
    responses: Arc<Mutex<VecDeque<String>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Captured requests for test assertions
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a `200 OK` response body.
    pub async fn with_response(self, body: &str) -> Self {
        self.responses.lock().await.push_back(body.to_string());
        self
    }

    /// Fail the next call with `error`.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// All requests seen so far.
    pub async fn captured(&self) -> Vec<CapturedRequest> {
        self.captured.lock().await.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        request: ApiRequest,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        self.captured.lock().await.push(CapturedRequest {
            method: request.method.clone(),
            path: request.path(),
            query: request.query.clone(),
            body: request.body.clone(),
            content_type: request.content_type,
            options: options.cloned(),
        });

        if let Some(error) = self.error.lock().await.take() {
            return Err(error.into());
        }

        match self.responses.lock().await.pop_front() {
            Some(body) => Ok(ApiResponse {
                status: StatusCode::OK,
                body,
            }),
            None => Ok(ApiResponse {
                status: StatusCode::NO_CONTENT,
                body: String::new(),
            }),
        }
    }
}
