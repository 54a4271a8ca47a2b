//! Error types for the Unsent SDK.
//!
//! This module contains the error raised while constructing a client. These
//! errors are fatal and synchronous: they are never delivered through the
//! [`ApiResponse`](crate::ApiResponse) envelope.
//!
//! # Example
//!
//! ```rust
//! use unsent::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring or constructing a client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No API key was passed and none was found in the environment.
    #[error("Missing API key. Pass it to the constructor `new unsent(\"un_xxxx\")`")]
    MissingApiKey,

    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Unsent API key.")]
    EmptyApiKey,

    /// API key contains characters that cannot be sent in an HTTP header.
    #[error("Invalid API key. The key must only contain visible ASCII characters.")]
    InvalidApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.unsent.dev').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_error_message() {
        let error = ConfigError::MissingApiKey;
        assert_eq!(
            error.to_string(),
            "Missing API key. Pass it to the constructor `new unsent(\"un_xxxx\")`"
        );
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("scheme"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyApiKey;
        let _: &dyn std::error::Error = &error;
    }
}
