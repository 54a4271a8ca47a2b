use serde_json::Value;

use crate::clients::{query_for, ApiResult, HttpClient};
use crate::resources::DateRangeParams;

/// Accessor for `/stats`.
#[derive(Clone, Copy, Debug)]
pub struct Stats<'a> {
    client: &'a HttpClient,
}

impl<'a> Stats<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches sending statistics over a date range.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn get(&self, params: Option<&DateRangeParams>) -> ApiResult<Value> {
        self.client
            .get_with_query("/stats", query_for(params))
            .await
    }
}
