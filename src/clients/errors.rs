//! HTTP-specific error types for the Unsent SDK.
//!
//! Only failures that prevent a request from completing live here. Errors
//! reported by the API itself are not Rust errors at this layer; they arrive
//! as [`ApiResponse::Error`](crate::ApiResponse::Error).
//!
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type for everything that stops a call
//!
//! # Example
//!
//! ```rust,ignore
//! use unsent::{ApiResponse, HttpError};
//!
//! match client.domains().list().await {
//!     Ok(ApiResponse::Data(domains)) => println!("{domains}"),
//!     Ok(ApiResponse::Error(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("Request not sent: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST, PUT or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A supplementary header has a name or value that is not valid in HTTP.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Unified error type for calls that could not produce an API response.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request body could not be encoded as JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
