//! Service health and version probes.

use serde_json::Value;

use crate::clients::{ApiResult, HttpClient};

/// Accessor for `/health` and `/version`.
#[derive(Clone, Copy, Debug)]
pub struct System<'a> {
    client: &'a HttpClient,
}

impl<'a> System<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Checks API health.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn health(&self) -> ApiResult<Value> {
        self.client.get("/health").await
    }

    /// Fetches the API version.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn version(&self) -> ApiResult<Value> {
        self.client.get("/version").await
    }
}
