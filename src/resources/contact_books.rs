//! Contact books: named lists of contacts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{ApiResult, HttpClient};

/// Payload for [`ContactBooks::create`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateContactBook {
    /// Display name.
    pub name: String,
    /// Optional emoji shown next to the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Custom property definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
}

impl CreateContactBook {
    /// Creates a payload with just a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Payload for [`ContactBooks::update`]. Unset fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateContactBook {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New emoji.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// New property definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
}

/// Accessor for `/contactBooks`.
#[derive(Clone, Copy, Debug)]
pub struct ContactBooks<'a> {
    client: &'a HttpClient,
}

impl<'a> ContactBooks<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists contact books.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn list(&self) -> ApiResult<Value> {
        self.client.get("/contactBooks").await
    }

    /// Creates a contact book.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn create(&self, payload: &CreateContactBook) -> ApiResult<Value> {
        self.client.post("/contactBooks", payload).await
    }

    /// Fetches a contact book with its details.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn get(&self, id: &str) -> ApiResult<Value> {
        self.client.get(&format!("/contactBooks/{id}")).await
    }

    /// Updates a contact book.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn update(&self, id: &str, payload: &UpdateContactBook) -> ApiResult<Value> {
        self.client
            .patch(&format!("/contactBooks/{id}"), payload)
            .await
    }

    /// Deletes a contact book.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn delete(&self, id: &str) -> ApiResult<Value> {
        self.client
            .delete(&format!("/contactBooks/{id}"), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_payload_only_sends_set_fields() {
        let payload = UpdateContactBook {
            emoji: Some("📬".to_string()),
            ..UpdateContactBook::default()
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"emoji":"📬"}"#
        );
    }
}
