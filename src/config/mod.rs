//! Configuration types for the Unsent SDK.
//!
//! This module provides the configuration used to construct an
//! [`Unsent`](crate::Unsent) client.
//!
//! # Overview
//!
//! - [`UnsentConfig`]: The resolved configuration (API key, base URL, user agent prefix)
//! - [`UnsentConfigBuilder`]: A builder that falls back to the environment for
//!   anything not set explicitly
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Environment
//!
//! | Variable          | Used for                          |
//! |-------------------|-----------------------------------|
//! | `UNSENT_API_KEY`  | API key when none is passed       |
//! | `UNSENT_BASE_URL` | Base URL when none is passed      |
//!
//! # Example
//!
//! ```rust
//! use unsent::UnsentConfig;
//!
//! let config = UnsentConfig::builder()
//!     .api_key("un_xxxx")
//!     .base_url("https://custom.api")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_root(), "https://custom.api/v1");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use crate::error::ConfigError;

/// Production host used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.unsent.dev";

/// Environment variable holding the fallback API key.
pub const API_KEY_ENV: &str = "UNSENT_API_KEY";

/// Environment variable holding the fallback base URL.
pub const BASE_URL_ENV: &str = "UNSENT_BASE_URL";

/// Resolved configuration for an Unsent client.
///
/// `UnsentConfig` is immutable once built and is `Clone + Send + Sync`.
#[derive(Clone, Debug)]
pub struct UnsentConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl UnsentConfig {
    /// Creates a new builder for constructing an `UnsentConfig`.
    #[must_use]
    pub fn builder() -> UnsentConfigBuilder {
        UnsentConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL (without the version segment).
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the versioned request root, e.g. `https://api.unsent.dev/v1`.
    #[must_use]
    pub fn api_root(&self) -> String {
        self.base_url.api_root()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify UnsentConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<UnsentConfig>();
};

/// Builder for constructing [`UnsentConfig`] instances.
///
/// # Defaults
///
/// - `api_key`: `UNSENT_API_KEY` from the environment (required)
/// - `base_url`: `UNSENT_BASE_URL` from the environment, then [`DEFAULT_BASE_URL`]
/// - `user_agent_prefix`: `None`
///
/// Empty strings are treated as "not set", both for explicit values and for
/// environment variables.
#[derive(Debug, Default)]
pub struct UnsentConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    user_agent_prefix: Option<String>,
}

impl UnsentConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Overrides the base URL. Requests go to `<url>/v1`.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`UnsentConfig`], reading the process environment for any
    /// value that was not set explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no key was given and
    /// `UNSENT_API_KEY` is unset or empty. Returns other [`ConfigError`]
    /// variants if the key or base URL fail validation.
    pub fn build(self) -> Result<UnsentConfig, ConfigError> {
        self.build_with_env(|name| std::env::var(name).ok())
    }

    /// Builds the configuration using `env` to look up fallback variables.
    pub(crate) fn build_with_env<F>(self, env: F) -> Result<UnsentConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        let api_key = non_empty(self.api_key)
            .or_else(|| non_empty(env(API_KEY_ENV)))
            .ok_or(ConfigError::MissingApiKey)?;
        let base_url = non_empty(self.base_url)
            .or_else(|| non_empty(env(BASE_URL_ENV)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(UnsentConfig {
            api_key: ApiKey::new(api_key)?,
            base_url: BaseUrl::new(base_url)?,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
