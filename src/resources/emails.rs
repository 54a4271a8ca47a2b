//! Transactional email: send, batch, schedule, inspect.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::{
    query_for, ApiResult, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder, QueryParams,
    QueryString,
};
use crate::render::HtmlComponent;
use crate::resources::PaginationParams;

const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// One address or a list of addresses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    /// A single address, sent as a JSON string.
    One(String),
    /// Several addresses, sent as a JSON array.
    Many(Vec<String>),
}

impl Default for Recipients {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl From<&str> for Recipients {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for Recipients {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl From<&[&str]> for Recipients {
    fn from(value: &[&str]) -> Self {
        Self::Many(value.iter().map(|s| (*s).to_string()).collect())
    }
}

/// A file attached to an email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// File name shown to the recipient.
    pub filename: String,
    /// Base64-encoded file content.
    pub content: String,
}

/// An email to send.
///
/// Either `html`, `text`, `template_id` or a [`component`](Self::component)
/// supplies the body. A component is rendered into `html` by
/// [`Emails::send`]; it is never serialized itself.
///
/// # Example
///
/// ```rust
/// use unsent::resources::SendEmail;
///
/// let email = SendEmail::new("hello@example.com", "user@example.com")
///     .subject("Welcome")
///     .html("<p>Hi there</p>");
///
/// let body = serde_json::to_value(&email).unwrap();
/// assert_eq!(body["to"], "user@example.com");
/// assert!(body.get("cc").is_none());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmail {
    /// Sender address.
    pub from: String,
    /// Recipients.
    pub to: Recipients,
    /// Subject line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// HTML body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Plain-text body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Reply-to address(es).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Recipients>,
    /// Carbon copy recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Recipients>,
    /// Blind carbon copy recipients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Recipients>,
    /// Stored template to render server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Template variables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    /// Delivery time (RFC 3339). Sends immediately when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    /// Message ID this email replies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to_id: Option<String>,
    /// File attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    /// Custom MIME headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// Markup component rendered into `html` before sending.
    #[serde(skip)]
    pub component: Option<HtmlComponent>,
}

impl SendEmail {
    /// Creates an email with a sender and recipients.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<Recipients>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            ..Self::default()
        }
    }

    /// Sets the subject line.
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the HTML body.
    #[must_use]
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Sets the plain-text body.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets a component to render as the HTML body.
    #[must_use]
    pub fn component(mut self, component: HtmlComponent) -> Self {
        self.component = Some(component);
        self
    }

    /// Replaces `html` with the rendered component, if one is set.
    fn render_component(&mut self) {
        if let Some(component) = self.component.take() {
            self.html = Some(component.render());
        }
    }
}

/// Per-call options for [`Emails::send`] and [`Emails::batch`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailRequestOptions {
    /// Sent verbatim as the `Idempotency-Key` header.
    pub idempotency_key: Option<String>,
}

impl EmailRequestOptions {
    /// Creates options carrying an idempotency key.
    #[must_use]
    pub fn idempotency_key(key: impl Into<String>) -> Self {
        Self {
            idempotency_key: Some(key.into()),
        }
    }
}

/// Filter for [`Emails::list`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailListParams {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Start of the range.
    pub start_date: Option<String>,
    /// End of the range.
    pub end_date: Option<String>,
    /// Restrict to these domains; each ID becomes its own `domainId` pair.
    pub domain_ids: Vec<String>,
}

impl QueryParams for EmailListParams {
    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query
            .push("page", self.page)
            .push("limit", self.limit)
            .push("startDate", self.start_date.as_ref())
            .push("endDate", self.end_date.as_ref())
            .push_all("domainId", &self.domain_ids);
        query
    }
}

/// One page of emails.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailList {
    /// Emails on this page, or the whole body if it had no `data` field.
    pub data: Value,
    /// Total number of matching emails, if reported.
    pub count: Option<u64>,
}

impl EmailList {
    /// Splits a list body into its page and count.
    #[must_use]
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut map) if map.contains_key("data") => Self {
                count: map.get("count").and_then(Value::as_u64),
                data: map.remove("data").unwrap_or_default(),
            },
            other => Self {
                data: other,
                count: None,
            },
        }
    }
}

/// Returns the inner `data` of a batch body, or the body itself.
fn unwrap_batch(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or_default()
        }
        other => other,
    }
}

/// Accessor for `/emails`.
#[derive(Clone, Copy, Debug)]
pub struct Emails<'a> {
    client: &'a HttpClient,
}

impl<'a> Emails<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Sends an email. Alias of [`Emails::send`].
    ///
    /// # Errors
    ///
    /// See [`Emails::send`].
    pub async fn create(
        &self,
        email: SendEmail,
        options: Option<&EmailRequestOptions>,
    ) -> ApiResult<Value> {
        self.send(email, options).await
    }

    /// Sends an email.
    ///
    /// A [`component`](SendEmail::component), if set, is rendered into `html`
    /// first. The response carries the new email's ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the email cannot be
    /// serialized, the idempotency key is not a valid header value, or the
    /// request could not be sent.
    pub async fn send(
        &self,
        mut email: SendEmail,
        options: Option<&EmailRequestOptions>,
    ) -> ApiResult<Value> {
        email.render_component();
        let body = serde_json::to_value(&email)?;
        let request = Self::with_options(HttpRequest::builder(HttpMethod::Post, "/emails"), options)
            .body(body)
            .build()?;
        self.client.request(request).await
    }

    /// Sends up to the API's batch limit of emails in one request.
    ///
    /// Components are not rendered here; set `html` directly.
    ///
    /// # Errors
    ///
    /// See [`Emails::send`].
    pub async fn batch(
        &self,
        emails: &[SendEmail],
        options: Option<&EmailRequestOptions>,
    ) -> ApiResult<Value> {
        if emails.iter().any(|email| email.component.is_some()) {
            tracing::warn!("Batch send ignores email components; set html instead");
        }
        let body = serde_json::to_value(emails)?;
        let request = Self::with_options(
            HttpRequest::builder(HttpMethod::Post, "/emails/batch"),
            options,
        )
        .body(body)
        .build()?;
        let response = self.client.request::<Value>(request).await?;
        Ok(response.map(unwrap_batch))
    }

    /// Lists sent emails.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn list(&self, params: Option<&EmailListParams>) -> ApiResult<EmailList> {
        let response = self
            .client
            .get_with_query::<Value>("/emails", query_for(params))
            .await?;
        Ok(response.map(EmailList::from_body))
    }

    /// Fetches an email.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn get(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("/emails/{id}")).await
    }

    /// Updates a scheduled email. The payload is sent as is.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the payload cannot be
    /// serialized or the request could not be sent.
    pub async fn update<P: Serialize + ?Sized>(&self, id: &str, payload: &P) -> ApiResult<Value> {
        self.client.patch(&format!("/emails/{id}"), payload).await
    }

    /// Cancels a scheduled email.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn cancel(&self, id: &str) -> ApiResult<Value> {
        self.client
            .post(&format!("/emails/{id}/cancel"), &json!({}))
            .await
    }

    /// Lists spam complaints.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn complaints(&self, params: Option<&PaginationParams>) -> ApiResult<Value> {
        self.client
            .get_with_query("/emails/complaints", query_for(params))
            .await
    }

    /// Lists bounces.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn bounces(&self, params: Option<&PaginationParams>) -> ApiResult<Value> {
        self.client
            .get_with_query("/emails/bounces", query_for(params))
            .await
    }

    /// Lists unsubscribes.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn unsubscribes(&self, params: Option<&PaginationParams>) -> ApiResult<Value> {
        self.client
            .get_with_query("/emails/unsubscribes", query_for(params))
            .await
    }

    /// Lists delivery events for one email.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn events(&self, id: &str, params: Option<&PaginationParams>) -> ApiResult<Value> {
        self.client
            .get_with_query(&format!("/emails/{id}/events"), query_for(params))
            .await
    }

    fn with_options(
        builder: HttpRequestBuilder,
        options: Option<&EmailRequestOptions>,
    ) -> HttpRequestBuilder {
        match options.and_then(|o| o.idempotency_key.as_deref()) {
            Some(key) => builder.header(IDEMPOTENCY_KEY_HEADER, key),
            None => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_email_serializes_camel_case_in_field_order() {
        let mut email = SendEmail::new("a@example.com", "b@example.com").subject("Hi");
        email.reply_to = Some("r@example.com".into());
        email.scheduled_at = Some("2024-01-01T00:00:00Z".to_string());

        assert_eq!(
            serde_json::to_string(&email).unwrap(),
            r#"{"from":"a@example.com","to":"b@example.com","subject":"Hi","replyTo":"r@example.com","scheduledAt":"2024-01-01T00:00:00Z"}"#
        );
    }

    #[test]
    fn test_recipients_many_serializes_as_array() {
        let email = SendEmail::new(
            "a@example.com",
            vec!["b@example.com".to_string(), "c@example.com".to_string()],
        );
        let value = serde_json::to_value(&email).unwrap();
        assert_eq!(value["to"], json!(["b@example.com", "c@example.com"]));
    }

    #[test]
    fn test_component_is_never_serialized() {
        let email = SendEmail::new("a@example.com", "b@example.com")
            .component(HtmlComponent::new(|| "<p>x</p>".to_string()));
        let value = serde_json::to_value(&email).unwrap();
        assert!(value.get("component").is_none());
        assert!(value.get("html").is_none());
    }

    #[test]
    fn test_render_component_replaces_html() {
        let mut email = SendEmail::new("a@example.com", "b@example.com")
            .html("<p>old</p>")
            .component(HtmlComponent::new(|| "<p>new</p>".to_string()));
        email.render_component();
        assert_eq!(email.html.as_deref(), Some("<p>new</p>"));
        assert!(email.component.is_none());
    }

    #[test]
    fn test_render_without_component_keeps_html() {
        let mut email = SendEmail::new("a@example.com", "b@example.com").html("<p>keep</p>");
        email.render_component();
        assert_eq!(email.html.as_deref(), Some("<p>keep</p>"));
    }

    #[test]
    fn test_email_list_params_repeat_domain_id() {
        let params = EmailListParams {
            page: Some(1),
            limit: Some(10),
            domain_ids: vec!["d1".to_string(), "d2".to_string()],
            ..EmailListParams::default()
        };
        assert_eq!(
            params.to_query().to_string(),
            "?page=1&limit=10&domainId=d1&domainId=d2"
        );
    }

    #[test]
    fn test_email_list_without_count() {
        let list = EmailList::from_body(json!({"data": [{"id": "e1"}]}));
        assert_eq!(list.data, json!([{"id": "e1"}]));
        assert_eq!(list.count, None);
    }

    #[test]
    fn test_email_list_keeps_unexpected_body() {
        let list = EmailList::from_body(json!({"items": [], "count": 3}));
        assert_eq!(list.data, json!({"items": [], "count": 3}));
        assert_eq!(list.count, None);
    }

    #[test]
    fn test_unwrap_batch() {
        assert_eq!(
            unwrap_batch(json!({"data": [{"emailId": "e1"}]})),
            json!([{"emailId": "e1"}])
        );
        assert_eq!(unwrap_batch(json!({})), json!({}));
        assert_eq!(unwrap_batch(json!([1, 2])), json!([1, 2]));
    }
}
