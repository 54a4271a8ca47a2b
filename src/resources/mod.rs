//! Resource accessors for the Unsent API.
//!
//! Each accessor groups the operations of one resource and borrows the
//! client's [`HttpClient`](crate::HttpClient). Accessors are cheap `Copy`
//! handles obtained from [`Unsent`](crate::Unsent):
//!
//! ```rust,ignore
//! let client = unsent::Unsent::new("un_xxxx")?;
//! let domains = client.domains().list().await?;
//! let stats = client.stats().get(None).await?;
//! ```
//!
//! Every method maps to exactly one endpoint and returns an
//! [`ApiResult`](crate::ApiResult). Response bodies are passed through as
//! [`serde_json::Value`], so any JSON the API returns on success arrives as
//! data. List endpoints that unwrap an inner shape fall back to the whole
//! body when that shape is missing.
//!
//! This module also holds the filter types shared by several resources.

mod activity;
mod analytics;
mod api_keys;
mod campaigns;
mod contact_books;
mod contacts;
mod domains;
mod emails;
mod events;
mod metrics;
mod settings;
mod stats;
mod suppressions;
mod system;
mod teams;
mod templates;
mod webhooks;

pub use activity::Activity;
pub use analytics::{Analytics, ReputationParams, TimeSeriesParams};
pub use api_keys::{ApiKeyPermission, ApiKeys, CreateApiKey};
pub use campaigns::Campaigns;
pub use contact_books::{ContactBooks, CreateContactBook, UpdateContactBook};
pub use contacts::{ContactListParams, Contacts};
pub use domains::Domains;
pub use emails::{
    Attachment, EmailList, EmailListParams, EmailRequestOptions, Emails, Recipients, SendEmail,
};
pub use events::{EmailStatus, EventListParams, Events};
pub use metrics::Metrics;
pub use settings::Settings;
pub use stats::Stats;
pub use suppressions::{
    AddSuppression, SuppressionList, SuppressionListParams, SuppressionReason, Suppressions,
};
pub use system::System;
pub use teams::Teams;
pub use templates::Templates;
pub use webhooks::{CreateWebhook, UpdateWebhook, Webhooks};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::clients::{QueryParams, QueryString, QueryValue};

/// `page` / `limit` pagination filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationParams {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

impl PaginationParams {
    /// Creates pagination parameters for the given page and size.
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }
}

impl QueryParams for PaginationParams {
    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query.push("page", self.page).push("limit", self.limit);
        query
    }
}

/// `startDate` / `endDate` filter.
///
/// Dates are passed through as given (e.g. `2024-01-01` or an RFC 3339
/// timestamp).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateRangeParams {
    /// Start of the range.
    pub start_date: Option<String>,
    /// End of the range.
    pub end_date: Option<String>,
}

impl QueryParams for DateRangeParams {
    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query
            .push("startDate", self.start_date.as_ref())
            .push("endDate", self.end_date.as_ref());
        query
    }
}

/// Aggregation period for metrics and analytics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Daily buckets.
    Day,
    /// Weekly buckets.
    Week,
    /// Monthly buckets.
    Month,
}

impl Period {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryValue for Period {
    fn to_query_value(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }
}

/// `period` filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeriodParams {
    /// Aggregation period.
    pub period: Option<Period>,
}

impl PeriodParams {
    /// Creates a filter for the given period.
    #[must_use]
    pub const fn new(period: Period) -> Self {
        Self {
            period: Some(period),
        }
    }
}

impl QueryParams for PeriodParams {
    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query.push("period", self.period);
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params_order() {
        assert_eq!(
            PaginationParams::new(2, 25).to_query().to_string(),
            "?page=2&limit=25"
        );
    }

    #[test]
    fn test_pagination_page_zero_is_omitted() {
        let params = PaginationParams {
            page: Some(0),
            limit: Some(10),
        };
        assert_eq!(params.to_query().to_string(), "?limit=10");
    }

    #[test]
    fn test_date_range_params_order() {
        let params = DateRangeParams {
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-01-31".to_string()),
        };
        assert_eq!(
            params.to_query().to_string(),
            "?startDate=2024-01-01&endDate=2024-01-31"
        );
    }

    #[test]
    fn test_period_params() {
        assert_eq!(
            PeriodParams::new(Period::Month).to_query().to_string(),
            "?period=month"
        );
        assert_eq!(PeriodParams::default().to_query().to_string(), "");
    }
}
