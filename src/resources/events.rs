//! Delivery events across all emails.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::clients::{query_for, ApiResult, HttpClient, QueryParams, QueryString, QueryValue};

/// Lifecycle status of an email.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailStatus {
    Scheduled,
    Queued,
    Sent,
    DeliveryDelayed,
    Bounced,
    Rejected,
    RenderingFailure,
    Delivered,
    Opened,
    Clicked,
    Complained,
    Failed,
    Cancelled,
    Suppressed,
}

impl EmailStatus {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Queued => "QUEUED",
            Self::Sent => "SENT",
            Self::DeliveryDelayed => "DELIVERY_DELAYED",
            Self::Bounced => "BOUNCED",
            Self::Rejected => "REJECTED",
            Self::RenderingFailure => "RENDERING_FAILURE",
            Self::Delivered => "DELIVERED",
            Self::Opened => "OPENED",
            Self::Clicked => "CLICKED",
            Self::Complained => "COMPLAINED",
            Self::Failed => "FAILED",
            Self::Cancelled => "CANCELLED",
            Self::Suppressed => "SUPPRESSED",
        }
    }
}

impl fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryValue for EmailStatus {
    fn to_query_value(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}

/// Filter for [`Events::list`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventListParams {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Only events with this status.
    pub status: Option<EmailStatus>,
    /// Only events on or after this date.
    pub start_date: Option<String>,
}

impl QueryParams for EventListParams {
    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query
            .push("page", self.page)
            .push("limit", self.limit)
            .push("status", self.status)
            .push("startDate", self.start_date.as_ref());
        query
    }
}

/// Accessor for `/events`.
#[derive(Clone, Copy, Debug)]
pub struct Events<'a> {
    client: &'a HttpClient,
}

impl<'a> Events<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists email events.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn list(&self, params: Option<&EventListParams>) -> ApiResult<Value> {
        self.client
            .get_with_query("/events", query_for(params))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_status_wire_values_match_serde() {
        for status in [
            EmailStatus::DeliveryDelayed,
            EmailStatus::RenderingFailure,
            EmailStatus::Cancelled,
        ] {
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                Value::String(status.as_str().to_string())
            );
        }
    }

    #[test]
    fn test_event_list_params() {
        let params = EventListParams {
            status: Some(EmailStatus::Delivered),
            start_date: Some("2024-01-01".to_string()),
            ..EventListParams::default()
        };
        assert_eq!(
            params.to_query().to_string(),
            "?status=DELIVERED&startDate=2024-01-01"
        );
    }
}
