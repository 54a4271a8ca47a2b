//! Sending domains.

use serde::Serialize;
use serde_json::{json, Value};

use crate::clients::{query_for, ApiResult, HttpClient};
use crate::resources::{DateRangeParams, PeriodParams};

/// Accessor for `/domains`.
#[derive(Clone, Copy, Debug)]
pub struct Domains<'a> {
    client: &'a HttpClient,
}

impl<'a> Domains<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists sending domains.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent
    /// or the payload could not be serialized.
    pub async fn list(&self) -> ApiResult<Value> {
        self.client.get("/domains").await
    }

    /// Registers a sending domain.
    ///
    /// # Errors
    ///
    /// See [`Domains::list`].
    pub async fn create<P: Serialize + ?Sized>(&self, payload: &P) -> ApiResult<Value> {
        self.client.post("/domains", payload).await
    }

    /// Triggers DNS verification for a domain.
    ///
    /// # Errors
    ///
    /// See [`Domains::list`].
    pub async fn verify(&self, id: &str) -> ApiResult<Value> {
        self.client
            .put(&format!("/domains/{id}/verify"), &json!({}))
            .await
    }

    /// Fetches a domain.
    ///
    /// # Errors
    ///
    /// See [`Domains::list`].
    pub async fn get(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("/domains/{id}")).await
    }

    /// Deletes a domain.
    ///
    /// # Errors
    ///
    /// See [`Domains::list`].
    pub async fn delete(&self, id: &str) -> ApiResult<Value> {
        self.client.delete(&format!("/domains/{id}"), None).await
    }

    /// Fetches engagement analytics for a domain.
    ///
    /// # Errors
    ///
    /// See [`Domains::list`].
    pub async fn analytics(&self, id: &str, params: Option<&PeriodParams>) -> ApiResult<Value> {
        self.client
            .get_with_query(&format!("/domains/{id}/analytics"), query_for(params))
            .await
    }

    /// Fetches sending statistics for a domain over a date range.
    ///
    /// # Errors
    ///
    /// See [`Domains::list`].
    pub async fn stats(&self, id: &str, params: Option<&DateRangeParams>) -> ApiResult<Value> {
        self.client
            .get_with_query(&format!("/domains/{id}/stats"), query_for(params))
            .await
    }
}
