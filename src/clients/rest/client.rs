//! REST client implementation for eBay APIs.
//!
//! This module provides the [`RestClient`] type, the crate's
//! [`RestTransport`] implementation on top of [`HttpClient`].

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, RequestBody,
    RequestOptions, RestTransport,
};
use crate::config::FeedConfig;

/// REST API client for eBay APIs.
///
/// Provides `get`, `post`, `put` and `delete` through [`RestTransport`].
/// Paths are sent as given; API surfaces prepend their own base path.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use ebay_feed::clients::{RequestOptions, RestClient, RestTransport};
/// use ebay_feed::{AccessToken, FeedConfig};
///
/// let config = FeedConfig::builder()
///     .access_token(AccessToken::new("token")?)
///     .build()?;
/// let client = RestClient::new(&config);
///
/// let response = client
///     .get("/sell/feed/v1/task", RequestOptions::new().query_param("limit", "10"))
///     .await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given configuration.
    #[must_use]
    pub fn new(config: &FeedConfig) -> Self {
        tracing::debug!(
            environment = %config.environment(),
            base_uri = config.api_base_uri(),
            "Creating eBay REST client"
        );

        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Wraps an existing [`HttpClient`].
    #[must_use]
    pub const fn from_http_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(method, path);

        if let Some(body) = body {
            let body_type = body.data_type();
            builder = builder.body(body).body_type(body_type);
        }

        if !options.query.is_empty() {
            builder = builder.query(options.query);
        }
        if !options.headers.is_empty() {
            builder = builder.extra_headers(options.headers);
        }

        let request = builder.build()?;
        self.http_client.request(request).await
    }
}

#[async_trait]
impl RestTransport for RestClient {
    async fn get(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path, None, options).await
    }

    async fn post(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, path, body, options)
            .await
    }

    async fn put(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Put, path, body, options).await
    }

    async fn delete(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Delete, path, None, options)
            .await
    }

    fn multipart_header(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            DataType::Multipart.as_content_type().to_string(),
        );
        headers
    }
}
