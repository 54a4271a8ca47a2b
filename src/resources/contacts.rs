//! Contacts stored in a contact book.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{query_for, ApiResult, HttpClient, QueryParams, QueryString};

/// Filter for [`Contacts::list`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactListParams {
    /// Comma-separated email addresses to match.
    pub emails: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Comma-separated contact IDs to match.
    pub ids: Option<String>,
}

impl QueryParams for ContactListParams {
    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query
            .push("emails", self.emails.as_ref())
            .push("page", self.page)
            .push("limit", self.limit)
            .push("ids", self.ids.as_ref());
        query
    }
}

/// Accessor for `/contactBooks/{contactBookId}/contacts`.
///
/// Contact payloads are passed through unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Contacts<'a> {
    client: &'a HttpClient,
}

impl<'a> Contacts<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists contacts in a contact book.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent
    /// or the payload could not be serialized.
    pub async fn list(
        &self,
        contact_book_id: &str,
        params: Option<&ContactListParams>,
    ) -> ApiResult<Value> {
        self.client
            .get_with_query(
                &format!("/contactBooks/{contact_book_id}/contacts"),
                query_for(params),
            )
            .await
    }

    /// Adds a contact to a contact book.
    ///
    /// # Errors
    ///
    /// See [`Contacts::list`].
    pub async fn create<P: Serialize + ?Sized>(
        &self,
        contact_book_id: &str,
        payload: &P,
    ) -> ApiResult<Value> {
        self.client
            .post(&format!("/contactBooks/{contact_book_id}/contacts"), payload)
            .await
    }

    /// Fetches a contact.
    ///
    /// # Errors
    ///
    /// See [`Contacts::list`].
    pub async fn get(&self, contact_book_id: &str, contact_id: &str) -> ApiResult<Value> {
        self.client
            .get(&Self::contact_path(contact_book_id, contact_id))
            .await
    }

    /// Partially updates a contact.
    ///
    /// # Errors
    ///
    /// See [`Contacts::list`].
    pub async fn update<P: Serialize + ?Sized>(
        &self,
        contact_book_id: &str,
        contact_id: &str,
        payload: &P,
    ) -> ApiResult<Value> {
        self.client
            .patch(&Self::contact_path(contact_book_id, contact_id), payload)
            .await
    }

    /// Creates or replaces a contact.
    ///
    /// # Errors
    ///
    /// See [`Contacts::list`].
    pub async fn upsert<P: Serialize + ?Sized>(
        &self,
        contact_book_id: &str,
        contact_id: &str,
        payload: &P,
    ) -> ApiResult<Value> {
        self.client
            .put(&Self::contact_path(contact_book_id, contact_id), payload)
            .await
    }

    /// Removes a contact.
    ///
    /// # Errors
    ///
    /// See [`Contacts::list`].
    pub async fn delete(
        &self,
        contact_book_id: &str,
        contact_id: &str,
    ) -> ApiResult<Value> {
        self.client
            .delete(&Self::contact_path(contact_book_id, contact_id), None)
            .await
    }

    fn contact_path(contact_book_id: &str, contact_id: &str) -> String {
        format!("/contactBooks/{contact_book_id}/contacts/{contact_id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_list_params_order() {
        let params = ContactListParams {
            emails: Some("test@example.com".to_string()),
            page: Some(2),
            limit: Some(20),
            ids: None,
        };
        assert_eq!(
            params.to_query().to_string(),
            "?emails=test%40example.com&page=2&limit=20"
        );
    }

    #[test]
    fn test_contact_path() {
        assert_eq!(
            Contacts::contact_path("book_123", "contact_1"),
            "/contactBooks/book_123/contacts/contact_1"
        );
    }
}
