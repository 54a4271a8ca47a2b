//! # Unsent Rust SDK
//!
//! A typed client for the [Unsent](https://unsent.dev) transactional email API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Client construction from an explicit API key or the environment via [`Unsent`]
//! - Validated configuration via [`UnsentConfig`] and [`UnsentConfigBuilder`]
//! - One accessor per API resource (emails, domains, contacts, webhooks, ...)
//!   in [`resources`]
//! - A uniform [`ApiResponse`] envelope: every call yields either data or a
//!   structured [`ErrorResponse`], never an unhandled API failure
//! - Rendering of markup components into HTML email bodies via [`render`]
//!
//! ## Quick Start
//!
//! ```rust
//! use unsent::{Unsent, UnsentConfig};
//!
//! let config = UnsentConfig::builder()
//!     .api_key("un_xxxx")
//!     .base_url("https://api.unsent.dev")
//!     .build()
//!     .unwrap();
//!
//! let client = Unsent::from_config(config);
//! assert_eq!(client.api_root(), "https://api.unsent.dev/v1");
//! ```
//!
//! ## Sending Email
//!
//! ```rust,ignore
//! use unsent::resources::{EmailRequestOptions, SendEmail};
//! use unsent::Unsent;
//!
//! let client = Unsent::new("un_xxxx")?;
//!
//! let email = SendEmail::new("hello@example.com", "user@example.com")
//!     .subject("Your receipt")
//!     .html("<p>Thanks for your order.</p>");
//! let options = EmailRequestOptions::idempotency_key("order-1234");
//!
//! let response = client.emails().send(email, Some(&options)).await?;
//! if let Some(error) = response.error() {
//!     eprintln!("send failed: {error}");
//! }
//! ```
//!
//! ## Error Model
//!
//! Two layers:
//!
//! - [`HttpError`] (the outer `Err`) means no response was obtained: the
//!   transport failed, a body could not be serialized, or a request was
//!   malformed.
//! - [`ApiResponse::Error`] means the API answered with an error, or answered
//!   with a body that could not be decoded. The client synthesizes an
//!   `INTERNAL_SERVER_ERROR` for the latter.
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events at `debug`
//! (request and response lines) and `warn` (undecodable success bodies).
//! Install any subscriber to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: API keys and base URLs validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **One call, one request**: No retries, timeouts, or background work

pub mod clients;
pub mod config;
pub mod error;
pub mod render;
pub mod resources;

mod client;

pub use client::Unsent;

pub use config::{ApiKey, BaseUrl, UnsentConfig, UnsentConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiResponse, ApiResult, ErrorResponse, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, InvalidHttpRequestError, QueryParams, QueryString, QueryValue,
};

// Re-export shared resource filters
pub use resources::{DateRangeParams, PaginationParams, Period, PeriodParams};
