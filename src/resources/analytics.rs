//! Sending analytics: overview, time series and reputation.

use serde_json::Value;

use crate::clients::{query_for, ApiResult, HttpClient, QueryParams, QueryString};

/// Filter for [`Analytics::time_series`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeSeriesParams {
    /// Number of days to cover.
    pub days: Option<u32>,
    /// Restrict to one sending domain.
    pub domain: Option<String>,
}

impl QueryParams for TimeSeriesParams {
    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query
            .push("days", self.days)
            .push("domain", self.domain.as_ref());
        query
    }
}

/// Filter for [`Analytics::reputation`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReputationParams {
    /// Restrict to one sending domain.
    pub domain: Option<String>,
}

impl QueryParams for ReputationParams {
    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query.push("domain", self.domain.as_ref());
        query
    }
}

/// Accessor for `/analytics`.
#[derive(Clone, Copy, Debug)]
pub struct Analytics<'a> {
    client: &'a HttpClient,
}

impl<'a> Analytics<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches the analytics overview.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn get(&self) -> ApiResult<Value> {
        self.client.get("/analytics").await
    }

    /// Fetches per-day sending metrics.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn time_series(&self, params: Option<&TimeSeriesParams>) -> ApiResult<Value> {
        self.client
            .get_with_query("/analytics/time-series", query_for(params))
            .await
    }

    /// Fetches the sender reputation summary.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn reputation(&self, params: Option<&ReputationParams>) -> ApiResult<Value> {
        self.client
            .get_with_query("/analytics/reputation", query_for(params))
            .await
    }
}
