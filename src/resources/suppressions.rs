//! Suppression list: addresses that will not receive email.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::clients::{query_for, ApiResult, HttpClient, QueryParams, QueryString, QueryValue};

/// Why an address is suppressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuppressionReason {
    /// The address hard-bounced.
    HardBounce,
    /// The recipient marked an email as spam.
    Complaint,
    /// Added by hand.
    Manual,
    /// The recipient unsubscribed.
    Unsubscribe,
}

impl SuppressionReason {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HardBounce => "HARD_BOUNCE",
            Self::Complaint => "COMPLAINT",
            Self::Manual => "MANUAL",
            Self::Unsubscribe => "UNSUBSCRIBE",
        }
    }
}

impl fmt::Display for SuppressionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryValue for SuppressionReason {
    fn to_query_value(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}

/// Filter for [`Suppressions::list`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuppressionListParams {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Substring match on the address.
    pub search: Option<String>,
    /// Only entries with this reason.
    pub reason: Option<SuppressionReason>,
}

impl QueryParams for SuppressionListParams {
    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query
            .push("page", self.page)
            .push("limit", self.limit)
            .push("search", self.search.as_ref())
            .push("reason", self.reason);
        query
    }
}

/// One page of suppressed addresses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuppressionList {
    /// Entries on this page, or the whole body if it had no
    /// `suppressions` field.
    pub suppressions: Value,
    /// Total number of matching entries, if reported.
    pub total: Option<u64>,
}

impl SuppressionList {
    /// Splits a list body into its entries and total.
    #[must_use]
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut map) if map.contains_key("suppressions") => Self {
                total: map.get("total").and_then(Value::as_u64),
                suppressions: map.remove("suppressions").unwrap_or_default(),
            },
            other => Self {
                suppressions: other,
                total: None,
            },
        }
    }
}

/// Payload for [`Suppressions::add`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSuppression {
    /// Address to suppress.
    pub email: String,
    /// Reason recorded with the entry.
    pub reason: SuppressionReason,
}

impl AddSuppression {
    /// Creates a payload.
    #[must_use]
    pub fn new(email: impl Into<String>, reason: SuppressionReason) -> Self {
        Self {
            email: email.into(),
            reason,
        }
    }
}

/// Accessor for `/suppressions`.
#[derive(Clone, Copy, Debug)]
pub struct Suppressions<'a> {
    client: &'a HttpClient,
}

impl<'a> Suppressions<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists suppressed addresses.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn list(&self, params: Option<&SuppressionListParams>) -> ApiResult<SuppressionList> {
        let response = self
            .client
            .get_with_query::<Value>("/suppressions", query_for(params))
            .await?;
        Ok(response.map(SuppressionList::from_body))
    }

    /// Suppresses an address.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn add(&self, payload: &AddSuppression) -> ApiResult<Value> {
        self.client.post("/suppressions", payload).await
    }

    /// Removes an address from the suppression list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn delete(&self, email: &str) -> ApiResult<Value> {
        self.client
            .delete(&format!("/suppressions/email/{email}"), None)
            .await
    }
}
