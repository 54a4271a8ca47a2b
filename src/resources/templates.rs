//! Stored email templates.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiResult, HttpClient};

/// Accessor for `/templates`.
#[derive(Clone, Copy, Debug)]
pub struct Templates<'a> {
    client: &'a HttpClient,
}

impl<'a> Templates<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists templates.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent
    /// or the payload could not be serialized.
    pub async fn list(&self) -> ApiResult<Value> {
        self.client.get("/templates").await
    }

    /// Creates a template.
    ///
    /// # Errors
    ///
    /// See [`Templates::list`].
    pub async fn create<P: Serialize + ?Sized>(&self, payload: &P) -> ApiResult<Value> {
        self.client.post("/templates", payload).await
    }

    /// Fetches a template.
    ///
    /// # Errors
    ///
    /// See [`Templates::list`].
    pub async fn get(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("/templates/{id}")).await
    }

    /// Updates a template.
    ///
    /// # Errors
    ///
    /// See [`Templates::list`].
    pub async fn update<P: Serialize + ?Sized>(&self, id: &str, payload: &P) -> ApiResult<Value> {
        self.client.patch(&format!("/templates/{id}"), payload).await
    }

    /// Deletes a template.
    ///
    /// # Errors
    ///
    /// See [`Templates::list`].
    pub async fn delete(&self, id: &str) -> ApiResult<Value> {
        self.client.delete(&format!("/templates/{id}"), None).await
    }
}
