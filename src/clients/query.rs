//! Ordered query-string construction.
//!
//! Every list/filter endpoint serializes its parameters the same way:
//!
//! - fields are emitted in the filter type's declared order
//! - a field is emitted only when its value is *present*; zero numbers,
//!   `false` and empty strings count as absent
//! - multi-valued fields emit one `key=value` pair per element, in order
//! - keys and values are percent-encoded
//! - with no pairs, no `?` is emitted at all
//!
//! # Example
//!
//! ```rust
//! use unsent::QueryString;
//!
//! let mut query = QueryString::new();
//! query
//!     .push("page", Some(0u32))
//!     .push("limit", Some(25u32))
//!     .push_all("domainId", ["d1", "d2"]);
//!
//! assert_eq!(query.to_string(), "?limit=25&domainId=d1&domainId=d2");
//! ```

use std::fmt;

/// A value that can appear in a query string.
///
/// Returning `None` from [`QueryValue::to_query_value`] marks the value as
/// absent, so the field is left out entirely.
pub trait QueryValue {
    /// Returns the unencoded query value, or `None` if the value is absent.
    fn to_query_value(&self) -> Option<String>;
}

macro_rules! impl_query_value_for_numbers {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> Option<String> {
                    (*self != 0).then(|| self.to_string())
                }
            }
        )*
    };
}

impl_query_value_for_numbers!(u8, u16, u32, u64, usize, i32, i64);

impl QueryValue for bool {
    fn to_query_value(&self) -> Option<String> {
        self.then(|| "true".to_string())
    }
}

impl QueryValue for str {
    fn to_query_value(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> Option<String> {
        self.as_str().to_query_value()
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> Option<String> {
        (**self).to_query_value()
    }
}

/// An ordered list of query parameters.
///
/// Renders through [`fmt::Display`] as either an empty string or
/// `?key=value&key=value`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Creates an empty query string.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends `key=value` if `value` is present.
    pub fn push<V: QueryValue>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value.and_then(|v| v.to_query_value()) {
            self.pairs.push((key.to_string(), value));
        }
        self
    }

    /// Appends one `key=value` pair per element, preserving element order.
    pub fn push_all<I>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: QueryValue,
    {
        for value in values {
            if let Some(value) = value.to_query_value() {
                self.pairs.push((key.to_string(), value));
            }
        }
        self
    }

    /// Returns `true` if no parameters were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the unencoded pairs in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            let separator = if i == 0 { '?' } else { '&' };
            write!(
                f,
                "{separator}{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

/// Filter types that serialize themselves into a [`QueryString`].
pub trait QueryParams {
    /// Builds the query string in this type's fixed field order.
    fn to_query(&self) -> QueryString;
}

/// Builds the query for optional filter parameters.
pub(crate) fn query_for<P: QueryParams>(params: Option<&P>) -> QueryString {
    params.map(QueryParams::to_query).unwrap_or_default()
}
