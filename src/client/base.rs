//! Shared base client for the InfluxDB v2 HTTP API
//!
//! Every generated resource client funnels its calls through a [`Transport`].
//! [`ApiBase`] is the reqwest implementation: it assembles the URL, attaches
//! the token and JSON body, applies per-call options and maps HTTP statuses
//! to [`ApiError`]. It makes exactly one HTTP call per request and never
//! retries.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue, RETRY_AFTER};
use reqwest::{Client as HttpClient, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Content type of every request body sent by this client
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Retry-After fallback when a 429 carries no usable header
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Optional per-call transport overrides.
///
/// Cancellation is done by dropping the future returned by the API call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Extra headers sent with the request
    pub headers: BTreeMap<String, String>,
    /// Overrides the client-wide timeout for this call
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn apply(&self, mut builder: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder> {
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidRequest(format!("header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::InvalidRequest(format!("header '{}': {}", name, e)))?;
            builder = builder.header(name, value);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder)
    }
}

/// A fully described API call: verb, path, query and optional body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Unencoded path segments, e.g. `["api", "v2", "orgs", "<id>"]`
    pub segments: Vec<String>,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
    pub content_type: Option<&'static str>,
}

impl ApiRequest {
    pub fn new<S: AsRef<str>>(method: Method, segments: &[S]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.as_ref().to_string()).collect(),
            query: Vec::new(),
            body: None,
            content_type: None,
        }
    }

    pub fn get<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(Method::GET, segments)
    }

    pub fn post<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(Method::POST, segments)
    }

    pub fn patch<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(Method::PATCH, segments)
    }

    pub fn delete<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(Method::DELETE, segments)
    }

    /// Append query parameters.
    pub fn query(mut self, params: Vec<(&'static str, String)>) -> Self {
        self.query.extend(params);
        self
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        self.content_type = Some(JSON_CONTENT_TYPE);
        Ok(self)
    }

    /// Path template with parameters substituted, without encoding.
    #[cfg(test)]
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Resolve against the server URL.
    ///
    /// Any path prefix on `base` is kept. Each segment is percent-encoded on
    /// its own, so IDs can never introduce extra path levels.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ApiError::InvalidRequest(format!("'{}' cannot be used as a base URL", base))
            })?;
            path.pop_if_empty();
            path.extend(self.segments.iter());
        }
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

/// Successful response from the server
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }
}

/// Performs API calls on behalf of resource clients.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return the successful response.
    async fn send(&self, request: ApiRequest, options: Option<&RequestOptions>)
    -> Result<ApiResponse>;
}

/// reqwest-backed transport
pub struct ApiBase {
    http: HttpClient,
    base_url: Url,
    token: Option<String>,
}

impl ApiBase {
    /// Create a new base client for the server at `url`.
    pub fn new(url: &str, token: Option<String>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(url)
            .map_err(|e| ApiError::InvalidRequest(format!("invalid server URL '{}': {}", url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidRequest(format!(
                "'{}' cannot be used as a base URL",
                url
            ))
            .into());
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            token,
        })
    }
}

#[async_trait]
impl Transport for ApiBase {
    async fn send(
        &self,
        request: ApiRequest,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse> {
        let url = request.url(&self.base_url)?;
        debug!("{} {}", request.method, url);

        let mut builder = self.http.request(request.method.clone(), url);

        if let Some(ref token) = self.token {
            builder = builder.header(AUTHORIZATION, format!("Token {}", token));
        }

        if let Some(ref body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, request.content_type.unwrap_or(JSON_CONTENT_TYPE))
                .body(serde_json::to_vec(body)?);
        }

        if let Some(options) = options {
            builder = options.apply(builder)?;
        }

        let response = builder.send().await.map_err(ApiError::from)?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            let body = response.text().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to read response: {}", e))
            })?;
            return Ok(ApiResponse { status, body });
        }

        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        let body = response.text().await.unwrap_or_default();

        Err(error_for_status(status, retry_after, &body).into())
    }
}

/// InfluxDB error body: `{"code": "not found", "message": "organization not found"}`
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn error_message(body: &str, fallback: impl FnOnce() -> String) -> String {
    if let Ok(ErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<ErrorBody>(body)
    {
        if !message.is_empty() {
            return message;
        }
    }

    let text = body.trim();
    if text.is_empty() {
        fallback()
    } else {
        text.to_string()
    }
}

/// Map a non-success status to an API error.
pub(crate) fn error_for_status(
    status: StatusCode,
    retry_after: Option<u64>,
    body: &str,
) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => {
            ApiError::NotFound(error_message(body, || "Resource not found".to_string()))
        }
        StatusCode::CONFLICT => {
            ApiError::Conflict(error_message(body, || "Resource already exists".to_string()))
        }
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit(Duration::from_secs(
            retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        )),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::BadRequest(error_message(body, || "Bad request".to_string()))
        }
        status if status.is_server_error() => {
            ApiError::ServerError(error_message(body, || format!("Server error: {}", status)))
        }
        _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}
