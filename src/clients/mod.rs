//! HTTP client types for Unsent API communication.
//!
//! This module provides the shared request/response layer that every
//! resource accessor delegates to.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client; one network round trip per call
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`ApiResponse`]: The `data`/`error` result envelope
//! - [`ErrorResponse`]: A structured API error (`code` + `message`)
//! - [`QueryString`]: Ordered query-string construction for list filters
//! - [`HttpError`]: Failures that prevent a response from being produced
//!
//! # Example
//!
//! ```rust,ignore
//! use unsent::{HttpClient, HttpMethod, HttpRequest, UnsentConfig};
//!
//! let config = UnsentConfig::builder().api_key("un_xxxx").build()?;
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/domains").build()?;
//! let response: unsent::ApiResponse<serde_json::Value> = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Transport failures surface as [`HttpError::Network`]; callers that
//! need retries or timeouts wrap calls themselves.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{ApiResult, HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{
    normalize_response, ApiResponse, ErrorResponse, INTERNAL_SERVER_ERROR, INVALID_JSON_MESSAGE,
};
pub use query::{QueryParams, QueryString, QueryValue};

pub(crate) use query::query_for;
