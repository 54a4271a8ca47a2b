//! Account-level sending metrics.

use serde_json::Value;

use crate::clients::{query_for, ApiResult, HttpClient};
use crate::resources::PeriodParams;

/// Accessor for `/metrics`.
#[derive(Clone, Copy, Debug)]
pub struct Metrics<'a> {
    client: &'a HttpClient,
}

impl<'a> Metrics<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches metrics, optionally bucketed by period.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn get(&self, params: Option<&PeriodParams>) -> ApiResult<Value> {
        self.client
            .get_with_query("/metrics", query_for(params))
            .await
    }
}
