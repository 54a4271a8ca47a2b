use serde_json::Value;

use crate::clients::{ApiResult, HttpClient};

/// Accessor for `/settings`.
#[derive(Clone, Copy, Debug)]
pub struct Settings<'a> {
    client: &'a HttpClient,
}

impl<'a> Settings<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches team settings and plan limits.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn get(&self) -> ApiResult<Value> {
        self.client.get("/settings").await
    }
}
