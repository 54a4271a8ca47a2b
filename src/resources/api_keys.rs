//! API key management.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{ApiResult, HttpClient};

/// Scope granted to an API key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiKeyPermission {
    /// Full account access.
    Full,
    /// Sending only.
    Sending,
}

/// Payload for [`ApiKeys::create`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateApiKey {
    /// Display name for the key.
    pub name: String,
    /// Scope of the key; the API defaults to full access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<ApiKeyPermission>,
}

impl CreateApiKey {
    /// Creates a payload with just a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permission: None,
        }
    }
}

/// Accessor for `/api-keys`.
#[derive(Clone, Copy, Debug)]
pub struct ApiKeys<'a> {
    client: &'a HttpClient,
}

impl<'a> ApiKeys<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists API keys.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn list(&self) -> ApiResult<Value> {
        self.client.get("/api-keys").await
    }

    /// Creates an API key. The response carries the secret token, which is
    /// only returned once.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn create(&self, payload: &CreateApiKey) -> ApiResult<Value> {
        self.client.post("/api-keys", payload).await
    }

    /// Deletes an API key.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn delete(&self, id: &str) -> ApiResult<Value> {
        self.client.delete(&format!("/api-keys/{id}"), None).await
    }
}
