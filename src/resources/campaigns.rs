//! Broadcast campaigns.

use serde::Serialize;
use serde_json::{json, Value};

use crate::clients::{ApiResult, HttpClient};

/// Accessor for `/campaigns`.
///
/// Campaign payloads are passed through unchanged; any serializable value
/// (a struct of your own or a `serde_json::json!` literal) can be sent.
#[derive(Clone, Copy, Debug)]
pub struct Campaigns<'a> {
    client: &'a HttpClient,
}

impl<'a> Campaigns<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists campaigns.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent
    /// or the payload could not be serialized.
    pub async fn list(&self) -> ApiResult<Value> {
        self.client.get("/campaigns").await
    }

    /// Creates a campaign.
    ///
    /// # Errors
    ///
    /// See [`Campaigns::list`].
    pub async fn create<P: Serialize + ?Sized>(&self, payload: &P) -> ApiResult<Value> {
        self.client.post("/campaigns", payload).await
    }

    /// Fetches a campaign.
    ///
    /// # Errors
    ///
    /// See [`Campaigns::list`].
    pub async fn get(&self, campaign_id: &str) -> ApiResult<Value> {
        self.client.get(&format!("/campaigns/{campaign_id}")).await
    }

    /// Schedules a campaign for sending.
    ///
    /// # Errors
    ///
    /// See [`Campaigns::list`].
    pub async fn schedule<P: Serialize + ?Sized>(
        &self,
        campaign_id: &str,
        payload: &P,
    ) -> ApiResult<Value> {
        self.client
            .post(&format!("/campaigns/{campaign_id}/schedule"), payload)
            .await
    }

    /// Pauses a running campaign.
    ///
    /// # Errors
    ///
    /// See [`Campaigns::list`].
    pub async fn pause(&self, campaign_id: &str) -> ApiResult<Value> {
        self.client
            .post(&format!("/campaigns/{campaign_id}/pause"), &json!({}))
            .await
    }

    /// Resumes a paused campaign.
    ///
    /// # Errors
    ///
    /// See [`Campaigns::list`].
    pub async fn resume(&self, campaign_id: &str) -> ApiResult<Value> {
        self.client
            .post(&format!("/campaigns/{campaign_id}/resume"), &json!({}))
            .await
    }
}
