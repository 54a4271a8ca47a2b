//! The [`Unsent`] client and its resource accessors.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiResult, HttpClient};
use crate::config::{UnsentConfig, UnsentConfigBuilder};
use crate::error::ConfigError;
use crate::resources::{
    Activity, Analytics, ApiKeys, Campaigns, ContactBooks, Contacts, Domains, Emails, Events,
    Metrics, Settings, Stats, Suppressions, System, Teams, Templates, Webhooks,
};

/// Client for the Unsent API.
///
/// Construction resolves the API key and base URL once and never touches the
/// network. Each resource is reached through an accessor that borrows the
/// client:
///
/// ```rust,ignore
/// use unsent::{resources::SendEmail, Unsent};
///
/// let client = Unsent::new("un_xxxx")?;
///
/// let email = SendEmail::new("hello@example.com", "user@example.com")
///     .subject("Welcome")
///     .html("<p>Hi!</p>");
///
/// match client.emails().send(email, None).await?.into_result() {
///     Ok(created) => println!("queued {}", created["emailId"]),
///     Err(error) => eprintln!("{}: {}", error.code, error.message),
/// }
/// ```
///
/// # Thread Safety
///
/// `Unsent` is `Send + Sync` and holds no mutable state. Share it behind an
/// `Arc` to issue calls from several tasks.
#[derive(Debug)]
pub struct Unsent {
    config: UnsentConfig,
    http: HttpClient,
}

// Verify Unsent is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Unsent>();
};

impl Unsent {
    /// Creates a client with the given API key.
    ///
    /// An empty key falls back to `UNSENT_API_KEY`. The base URL comes from
    /// `UNSENT_BASE_URL` or defaults to `https://api.unsent.dev`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no key is available, or
    /// another [`ConfigError`] if a value fails validation.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder().api_key(api_key).build().map(Self::from_config)
    }

    /// Creates a client with an explicit API key and base URL.
    ///
    /// # Errors
    ///
    /// See [`Unsent::new`].
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::builder()
            .api_key(api_key)
            .base_url(base_url)
            .build()
            .map(Self::from_config)
    }

    /// Creates a client entirely from `UNSENT_API_KEY` and `UNSENT_BASE_URL`.
    ///
    /// # Errors
    ///
    /// See [`Unsent::new`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder().build().map(Self::from_config)
    }

    /// Returns a configuration builder; pass its result to
    /// [`Unsent::from_config`].
    #[must_use]
    pub fn builder() -> UnsentConfigBuilder {
        UnsentConfigBuilder::new()
    }

    /// Creates a client from a resolved configuration.
    #[must_use]
    pub fn from_config(config: UnsentConfig) -> Self {
        let http = HttpClient::new(&config);
        tracing::debug!("Created Unsent client for {}", http.api_root());
        Self { config, http }
    }

    /// Returns the resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &UnsentConfig {
        &self.config
    }

    /// Returns the versioned request root, e.g. `https://api.unsent.dev/v1`.
    #[must_use]
    pub fn api_root(&self) -> &str {
        self.http.api_root()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }

    // Accessors

    /// Emails.
    #[must_use]
    pub const fn emails(&self) -> Emails<'_> {
        Emails::new(&self.http)
    }

    /// Sending domains.
    #[must_use]
    pub const fn domains(&self) -> Domains<'_> {
        Domains::new(&self.http)
    }

    /// Contacts inside contact books.
    #[must_use]
    pub const fn contacts(&self) -> Contacts<'_> {
        Contacts::new(&self.http)
    }

    /// Contact books.
    #[must_use]
    pub const fn contact_books(&self) -> ContactBooks<'_> {
        ContactBooks::new(&self.http)
    }

    /// Email templates.
    #[must_use]
    pub const fn templates(&self) -> Templates<'_> {
        Templates::new(&self.http)
    }

    /// Webhooks.
    #[must_use]
    pub const fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(&self.http)
    }

    /// Account analytics.
    #[must_use]
    pub const fn analytics(&self) -> Analytics<'_> {
        Analytics::new(&self.http)
    }

    /// Campaigns.
    #[must_use]
    pub const fn campaigns(&self) -> Campaigns<'_> {
        Campaigns::new(&self.http)
    }

    /// Suppression list.
    #[must_use]
    pub const fn suppressions(&self) -> Suppressions<'_> {
        Suppressions::new(&self.http)
    }

    /// API keys.
    #[must_use]
    pub const fn api_keys(&self) -> ApiKeys<'_> {
        ApiKeys::new(&self.http)
    }

    /// Team settings.
    #[must_use]
    pub const fn settings(&self) -> Settings<'_> {
        Settings::new(&self.http)
    }

    /// Email events.
    #[must_use]
    pub const fn events(&self) -> Events<'_> {
        Events::new(&self.http)
    }

    /// Sending metrics.
    #[must_use]
    pub const fn metrics(&self) -> Metrics<'_> {
        Metrics::new(&self.http)
    }

    /// Sending statistics.
    #[must_use]
    pub const fn stats(&self) -> Stats<'_> {
        Stats::new(&self.http)
    }

    /// Activity feed.
    #[must_use]
    pub const fn activity(&self) -> Activity<'_> {
        Activity::new(&self.http)
    }

    /// Teams.
    #[must_use]
    pub const fn teams(&self) -> Teams<'_> {
        Teams::new(&self.http)
    }

    /// Health and version probes.
    #[must_use]
    pub const fn system(&self) -> System<'_> {
        System::new(&self.http)
    }

    // Raw verbs for endpoints without an accessor

    /// Sends a GET request to a path under the API root.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the request could not be sent.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.http.get(path).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`](crate::HttpError) if the body cannot be
    /// serialized or the request could not be sent.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.http.post(path, body).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Unsent::post`].
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.http.put(path, body).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Unsent::post`].
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.http.patch(path, body).await
    }

    /// Sends a DELETE request, with a JSON body only if one is given.
    ///
    /// # Errors
    ///
    /// See [`Unsent::post`].
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> ApiResult<T> {
        self.http.delete(path, body).await
    }
}
