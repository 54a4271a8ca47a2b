use serde_json::Value;

use crate::clients::{ApiResult, HttpClient};

/// Accessor for `/team` and `/teams`.
#[derive(Clone, Copy, Debug)]
pub struct Teams<'a> {
    client: &'a HttpClient,
}

impl<'a> Teams<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches the team that owns the API key.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn get(&self) -> ApiResult<Value> {
        self.client.get("/team").await
    }

    /// Lists every team the API key can see.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn list(&self) -> ApiResult<Value> {
        self.client.get("/teams").await
    }
}
