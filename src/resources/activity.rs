//! Account activity feed.

use serde_json::Value;

use crate::clients::{query_for, ApiResult, HttpClient};
use crate::resources::PaginationParams;

/// Accessor for `/activity`.
#[derive(Clone, Copy, Debug)]
pub struct Activity<'a> {
    client: &'a HttpClient,
}

impl<'a> Activity<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches the activity feed, optionally paginated.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn get(&self, params: Option<&PaginationParams>) -> ApiResult<Value> {
        self.client
            .get_with_query("/activity", query_for(params))
            .await
    }
}
