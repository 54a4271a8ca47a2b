//! Webhook endpoints that receive delivery events.
//!
//! Request payloads are typed; responses are returned as parsed JSON.
//!
//! ```rust
//! use unsent::resources::CreateWebhook;
//!
//! let webhook = CreateWebhook::new(
//!     "https://example.com/hooks/unsent",
//!     vec!["email.delivered".to_string(), "email.bounced".to_string()],
//! );
//! let body = serde_json::to_value(&webhook).unwrap();
//! assert_eq!(body["eventTypes"][0], "email.delivered");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::{ApiResult, HttpClient};

/// Payload for [`Webhooks::create`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhook {
    /// Delivery URL.
    pub url: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Event types to subscribe to.
    pub event_types: Vec<String>,
    /// Signing secret; generated by the API when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl CreateWebhook {
    /// Creates a payload for a URL and event types.
    #[must_use]
    pub fn new(url: impl Into<String>, event_types: Vec<String>) -> Self {
        Self {
            url: url.into(),
            event_types,
            ..Self::default()
        }
    }
}

/// Payload for [`Webhooks::update`]. Unset fields are left unchanged.
///
/// `description: Some(None)` clears the description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebhook {
    /// New delivery URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// New description; `Some(None)` sends `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    /// New event types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_types: Option<Vec<String>>,
    /// Enables or pauses delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Requests a new signing secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_secret: Option<bool>,
    /// Sets an explicit signing secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Accessor for `/webhooks`.
#[derive(Clone, Copy, Debug)]
pub struct Webhooks<'a> {
    client: &'a HttpClient,
}

impl<'a> Webhooks<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists webhooks.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn list(&self) -> ApiResult<Value> {
        self.client.get("/webhooks").await
    }

    /// Fetches a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn get(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("/webhooks/{id}")).await
    }

    /// Registers a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn create(&self, payload: &CreateWebhook) -> ApiResult<Value> {
        self.client.post("/webhooks", payload).await
    }

    /// Updates a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn update(&self, id: &str, payload: &UpdateWebhook) -> ApiResult<Value> {
        self.client.patch(&format!("/webhooks/{id}"), payload).await
    }

    /// Deletes a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn delete(&self, id: &str) -> ApiResult<Value> {
        self.client.delete(&format!("/webhooks/{id}"), None).await
    }

    /// Queues a test delivery to the webhook. The response carries the
    /// `callId` of the delivery.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn test(&self, id: &str) -> ApiResult<Value> {
        self.client
            .post(&format!("/webhooks/{id}/test"), &json!({}))
            .await
    }
}
