//! HTTP client for Unsent API communication.
//!
//! This module provides the [`HttpClient`] type, which owns the request
//! root, the default headers, and the single network round trip behind every
//! resource operation.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{normalize_response, ApiResponse};
use crate::clients::query::QueryString;
use crate::config::UnsentConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for every API operation.
///
/// The outer `Result` carries failures that stopped the request (transport
/// errors, invalid requests); the inner [`ApiResponse`] carries what the API
/// answered.
pub type ApiResult<T> = Result<ApiResponse<T>, HttpError>;

/// HTTP client for making requests to the Unsent API.
///
/// The client handles:
/// - Request root construction (`<base>/v1`)
/// - Default headers: bearer `Authorization`, JSON `Content-Type`, `User-Agent`
/// - Merging per-request headers without touching the defaults
/// - Normalizing every response into an [`ApiResponse`]
///
/// There is no retry, timeout or caching logic here; each call is exactly one
/// round trip.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and holds no mutable state, so calls can be
/// issued concurrently.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Versioned request root (e.g., `https://api.unsent.dev/v1`).
    api_root: String,
    /// Default headers to include in all requests.
    default_headers: HeaderMap,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a resolved configuration.
    ///
    /// No network call is made.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &UnsentConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}unsent-rust v{SDK_VERSION}");

        let mut default_headers = HeaderMap::new();
        // ApiKey only admits visible ASCII, so the bearer value is always valid.
        if let Ok(value) = HeaderValue::from_str(&config.api_key().bearer()) {
            default_headers.insert(AUTHORIZATION, value);
        }
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&user_agent) {
            default_headers.insert(USER_AGENT, value);
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_root: config.api_root(),
            default_headers,
        }
    }

    /// Returns the versioned request root.
    #[must_use]
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Sends a request and normalizes the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The transport fails before a response is received (`Network`)
    ///
    /// API errors and undecodable bodies are not errors at this level; they
    /// are returned as [`ApiResponse::Error`].
    pub async fn request<T: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<T> {
        request.verify()?;

        let url = format!("{}{}", self.api_root, request.path_and_query());
        let headers = self.merge_headers(&request)?;

        tracing::debug!("Sending {} request to {}", request.http_method, request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        }
        .headers(headers);

        if let Some(body) = &request.body {
            req_builder = req_builder.body(serde_json::to_string(body)?);
        }

        let res = req_builder.send().await?;

        let status = res.status();
        let status_text = status
            .canonical_reason()
            .map_or_else(|| status.as_str().to_string(), str::to_string);
        let body_text = res.text().await?;

        tracing::debug!("Received {} for {}", status, request.path);

        Ok(normalize_response(
            status.is_success(),
            &status_text,
            &body_text,
        ))
    }

    /// Sends a GET request to `path`.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.request(request).await
    }

    /// Sends a GET request to `path` with the given query string.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: QueryString,
    ) -> ApiResult<T> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query)
            .build()?;
        self.request(request).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`]. Also fails with
    /// [`HttpError::Serialization`] if `body` cannot be encoded.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_with_body(HttpMethod::Post, path, body).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::post`].
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_with_body(HttpMethod::Put, path, body).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::post`].
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.send_with_body(HttpMethod::Patch, path, body).await
    }

    /// Sends a DELETE request, with a JSON body only if one is supplied.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::post`].
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> ApiResult<T> {
        let mut builder = HttpRequest::builder(HttpMethod::Delete, path);
        if let Some(body) = body {
            builder = builder.body(body.clone());
        }
        self.request(builder.build()?).await
    }

    async fn send_with_body<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = HttpRequest::builder(method, path)
            .body(serde_json::to_value(body)?)
            .build()?;
        self.request(request).await
    }

    /// Builds the header set for one request: defaults first, then the
    /// request's extra headers replacing any default with the same name.
    fn merge_headers(&self, request: &HttpRequest) -> Result<HeaderMap, InvalidHttpRequestError> {
        let mut headers = self.default_headers.clone();

        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                let invalid = || InvalidHttpRequestError::InvalidHeader { name: key.clone() };
                let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?;
                let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
                headers.insert(name, value);
            }
        }

        Ok(headers)
    }
}
