//! The result envelope returned by every Unsent operation.
//!
//! Every call resolves to exactly one of two outcomes: a decoded payload or a
//! structured API error. [`ApiResponse`] makes that invariant part of the
//! type, and serializes to the wire-familiar `{ "data": .., "error": .. }`
//! shape when needed.
//!
//! # Normalization
//!
//! Responses are normalized by [`normalize_response`]:
//!
//! | Status      | Body                              | Result                                        |
//! |-------------|-----------------------------------|-----------------------------------------------|
//! | non-2xx     | `{ "code": .., "message": .. }`   | `Error(body)`                                 |
//! | non-2xx     | `{ "error": { "code": .. } }`     | `Error(body.error)`                           |
//! | non-2xx     | anything else                     | `Error(INTERNAL_SERVER_ERROR, <status text>)` |
//! | 2xx         | JSON matching `T`                 | `Data(body)`                                  |
//! | 2xx         | anything else                     | `Error(INTERNAL_SERVER_ERROR, invalid JSON)`  |

use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Error code used for failures synthesized by the client.
pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

/// Message used when a successful response carries an undecodable body.
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON response from server";

/// A structured error reported by the API.
///
/// `code` is a short machine-readable tag such as `BAD_REQUEST`,
/// `NOT_FOUND`, `FORBIDDEN`, `UNAUTHORIZED`, `INTERNAL_SERVER_ERROR` or
/// `SERVICE_UNAVAILABLE`; `message` is free text.
///
/// # Example
///
/// ```rust
/// use unsent::ErrorResponse;
///
/// let error = ErrorResponse::new("NOT_FOUND", "Email not found");
/// assert_eq!(error.to_string(), "NOT_FOUND: Email not found");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable explanation.
    #[serde(default)]
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error with the given code and message.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates an `INTERNAL_SERVER_ERROR` with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(INTERNAL_SERVER_ERROR, message)
    }

    /// Returns `true` if this error carries the given code.
    #[must_use]
    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }
}

/// The outcome of an API call: either a payload or an API error.
///
/// # Example
///
/// ```rust
/// use unsent::{ApiResponse, ErrorResponse};
///
/// let ok: ApiResponse<u32> = ApiResponse::Data(7);
/// assert_eq!(ok.data(), Some(&7));
/// assert!(ok.error().is_none());
///
/// let failed: ApiResponse<u32> = ApiResponse::Error(ErrorResponse::new("NOT_FOUND", "gone"));
/// assert_eq!(failed.into_parts(), (None, Some(ErrorResponse::new("NOT_FOUND", "gone"))));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// The call succeeded and the payload was decoded.
    Data(T),
    /// The API reported an error, or the response could not be decoded.
    Error(ErrorResponse),
}

impl<T> ApiResponse<T> {
    /// Returns the payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Error(_) => None,
        }
    }

    /// Returns the error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Data(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Returns `true` if this response carries a payload.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }

    /// Returns `true` if this response carries an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Consumes the response, returning the payload if present.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Error(_) => None,
        }
    }

    /// Consumes the response, returning the error if present.
    #[must_use]
    pub fn into_error(self) -> Option<ErrorResponse> {
        match self {
            Self::Data(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Splits the response into its `(data, error)` pair. Exactly one side
    /// is `Some`.
    #[must_use]
    pub fn into_parts(self) -> (Option<T>, Option<ErrorResponse>) {
        match self {
            Self::Data(data) => (Some(data), None),
            Self::Error(error) => (None, Some(error)),
        }
    }

    /// Converts into a standard `Result`, so API errors can be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns the [`ErrorResponse`] if the response is an error.
    pub fn into_result(self) -> Result<T, ErrorResponse> {
        match self {
            Self::Data(data) => Ok(data),
            Self::Error(error) => Err(error),
        }
    }

    /// Maps the payload, leaving errors untouched.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        match self {
            Self::Data(data) => ApiResponse::Data(f(data)),
            Self::Error(error) => ApiResponse::Error(error),
        }
    }
}

impl<T> From<Result<T, ErrorResponse>> for ApiResponse<T> {
    fn from(result: Result<T, ErrorResponse>) -> Self {
        match result {
            Ok(data) => Self::Data(data),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ApiResponse", 2)?;
        state.serialize_field("data", &self.data())?;
        state.serialize_field("error", &self.error())?;
        state.end()
    }
}

/// Normalizes a completed HTTP exchange into an [`ApiResponse`].
///
/// `status_text` is used as the message when an error body cannot be
/// interpreted. [`HttpClient`](crate::HttpClient) passes the canonical reason
/// phrase for the status code (e.g. `Service Unavailable` for 503), not the
/// reason phrase the server sent.
///
/// With `T = serde_json::Value` any parseable success body becomes
/// [`ApiResponse::Data`]; only bodies that are not JSON at all produce the
/// invalid JSON error. A narrower `T` also rejects JSON that does not fit it.
#[must_use]
pub fn normalize_response<T: DeserializeOwned>(
    is_success: bool,
    status_text: &str,
    body: &str,
) -> ApiResponse<T> {
    if !is_success {
        return ApiResponse::Error(
            extract_error(body).unwrap_or_else(|| ErrorResponse::internal(status_text)),
        );
    }

    match serde_json::from_str::<T>(body) {
        Ok(data) => ApiResponse::Data(data),
        Err(e) => {
            tracing::warn!("Failed to decode successful response body: {}", e);
            ApiResponse::Error(ErrorResponse::internal(INVALID_JSON_MESSAGE))
        }
    }
}

/// Extracts an error from either a top-level `{code, message}` body or one
/// nested under `error`.
fn extract_error(body: &str) -> Option<ErrorResponse> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    if value.get("code").is_some() {
        return serde_json::from_value(value).ok();
    }

    value
        .get("error")
        .filter(|error| error.get("code").is_some())
        .and_then(|error| serde_json::from_value(error.clone()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_success_with_json_body_is_data() {
        let response: ApiResponse<Value> = normalize_response(true, "OK", r#"{"id":"email_1"}"#);
        assert_eq!(response, ApiResponse::Data(json!({"id": "email_1"})));
    }

    #[test]
    fn test_success_with_invalid_json_is_internal_error() {
        let response: ApiResponse<Value> = normalize_response(true, "OK", "<html>oops</html>");
        assert_eq!(
            response,
            ApiResponse::Error(ErrorResponse::new(
                "INTERNAL_SERVER_ERROR",
                "Invalid JSON response from server"
            ))
        );
    }

    #[test]
    fn test_success_with_empty_body_is_internal_error() {
        let response: ApiResponse<Value> = normalize_response(true, "No Content", "");
        assert_eq!(response.error().unwrap().message, INVALID_JSON_MESSAGE);
    }

    #[test]
    fn test_error_with_nested_error_shape() {
        let body = json!({"error": {"code": "BAD_REQUEST", "message": "Invalid name"}});
        let response: ApiResponse<Value> =
            normalize_response(false, "Bad Request", &body.to_string());
        assert_eq!(
            response,
            ApiResponse::Error(ErrorResponse::new("BAD_REQUEST", "Invalid name"))
        );
    }

    #[test]
    fn test_error_with_top_level_shape() {
        let body = json!({"code": "NOT_FOUND", "message": "Domain not found"});
        let response: ApiResponse<Value> =
            normalize_response(false, "Not Found", &body.to_string());
        assert_eq!(
            response,
            ApiResponse::Error(ErrorResponse::new("NOT_FOUND", "Domain not found"))
        );
    }

    #[test]
    fn test_error_with_unparseable_body_uses_status_text() {
        let response: ApiResponse<Value> =
            normalize_response(false, "Service Unavailable", "upstream timeout");
        assert_eq!(
            response,
            ApiResponse::Error(ErrorResponse::new(
                "INTERNAL_SERVER_ERROR",
                "Service Unavailable"
            ))
        );
    }

    #[test]
    fn test_error_with_unrecognized_json_uses_status_text() {
        let response: ApiResponse<Value> =
            normalize_response(false, "Forbidden", r#"{"detail":"nope"}"#);
        assert_eq!(
            response,
            ApiResponse::Error(ErrorResponse::internal("Forbidden"))
        );
    }

    #[test]
    fn test_error_without_message_defaults_to_empty() {
        let response: ApiResponse<Value> =
            normalize_response(false, "Unauthorized", r#"{"code":"UNAUTHORIZED"}"#);
        assert_eq!(
            response,
            ApiResponse::Error(ErrorResponse::new("UNAUTHORIZED", ""))
        );
    }

    #[test]
    fn test_typed_payload_mismatch_is_internal_error() {
        #[derive(Debug, Deserialize)]
        struct Token {
            #[allow(dead_code)]
            token: String,
        }

        let response: ApiResponse<Token> = normalize_response(true, "OK", r#"{"id":1}"#);
        assert!(response.is_error());
    }

    #[test]
    fn test_exactly_one_side_is_set() {
        let cases = [
            (true, r#"{"ok":true}"#),
            (true, "not json"),
            (false, r#"{"code":"X","message":"y"}"#),
            (false, r#"{"error":{"code":"X","message":"y"}}"#),
            (false, ""),
        ];

        for (is_success, body) in cases {
            let (data, error) = normalize_response::<Value>(is_success, "Status", body).into_parts();
            assert!(data.is_some() ^ error.is_some(), "body: {body}");
        }
    }

    #[test]
    fn test_envelope_serializes_as_data_error_pair() {
        let ok: ApiResponse<Value> = ApiResponse::Data(json!({"id": "1"}));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"data": {"id": "1"}, "error": null})
        );

        let failed: ApiResponse<Value> = ApiResponse::Error(ErrorResponse::new("NOT_FOUND", "x"));
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"data": null, "error": {"code": "NOT_FOUND", "message": "x"}})
        );
    }

    #[test]
    fn test_into_result_and_map() {
        let response: ApiResponse<u32> = ApiResponse::Data(2);
        assert_eq!(response.clone().map(|n| n * 2).into_result(), Ok(4));

        let failed: ApiResponse<u32> = ApiResponse::Error(ErrorResponse::internal("boom"));
        assert_eq!(
            failed.map(|n| n * 2).into_result(),
            Err(ErrorResponse::internal("boom"))
        );
    }
}
