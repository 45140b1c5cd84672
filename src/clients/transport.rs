//! The REST transport capability consumed by API surfaces.
//!
//! [`RestTransport`] is the seam between an API surface such as
//! [`Feed`](crate::feed::Feed) and whatever sends requests. The crate
//! implements it for [`RestClient`](crate::clients::RestClient); tests and
//! callers with their own HTTP stack can provide another implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::errors::HttpError;
use crate::clients::http_request::RequestBody;
use crate::clients::http_response::HttpResponse;

/// Per-call query parameters and headers.
///
/// # Example
///
/// ```rust
/// use ebay_feed::clients::RequestOptions;
///
/// let options = RequestOptions::new()
///     .query_param("limit", "10")
///     .header("accept-language", "en-US");
///
/// assert_eq!(options.query.get("limit").map(String::as_str), Some("10"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Query string parameters.
    pub query: HashMap<String, String>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options carrying only query parameters.
    #[must_use]
    pub fn with_query(query: HashMap<String, String>) -> Self {
        Self {
            query,
            headers: HashMap::new(),
        }
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Adds every header from `headers`, replacing existing values.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }
}

/// The verbs and helpers an API surface needs from its transport.
///
/// Paths are absolute below the API host (e.g. `/sell/feed/v1/task`).
/// Implementations own authentication, serialization and error conversion;
/// callers hand the result back unmodified.
#[async_trait]
pub trait RestTransport: Send + Sync {
    /// Sends a GET request.
    async fn get(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, HttpError>;

    /// Sends a POST request with an optional body.
    async fn post(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError>;

    /// Sends a PUT request with an optional body.
    async fn put(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError>;

    /// Sends a DELETE request.
    async fn delete(&self, path: &str, options: RequestOptions)
        -> Result<HttpResponse, HttpError>;

    /// Returns the header set marking a request as a multipart upload.
    fn multipart_header(&self) -> HashMap<String, String>;
}

#[async_trait]
impl<'a, T: RestTransport + ?Sized> RestTransport for &'a T {
    async fn get(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, HttpError> {
        (**self).get(path, options).await
    }

    async fn post(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        (**self).post(path, body, options).await
    }

    async fn put(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        (**self).put(path, body, options).await
    }

    async fn delete(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        (**self).delete(path, options).await
    }

    fn multipart_header(&self) -> HashMap<String, String> {
        (**self).multipart_header()
    }
}

#[async_trait]
impl<T: RestTransport + ?Sized> RestTransport for Arc<T> {
    async fn get(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, HttpError> {
        (**self).get(path, options).await
    }

    async fn post(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        (**self).post(path, body, options).await
    }

    async fn put(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        (**self).put(path, body, options).await
    }

    async fn delete(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        (**self).delete(path, options).await
    }

    fn multipart_header(&self) -> HashMap<String, String> {
        (**self).multipart_header()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_options_builders() {
        let mut extra = HashMap::new();
        extra.insert("Content-Type".to_string(), "multipart/form-data".to_string());

        let options = RequestOptions::new()
            .query_param("offset", "20")
            .header("accept-language", "de-DE")
            .headers(extra);

        assert_eq!(options.query.get("offset"), Some(&"20".to_string()));
        assert_eq!(options.headers.len(), 2);
        assert_eq!(
            options.headers.get("Content-Type"),
            Some(&"multipart/form-data".to_string())
        );
    }

    #[test]
    fn test_with_query_has_no_headers() {
        let mut query = HashMap::new();
        query.insert("limit".to_string(), "5".to_string());
        let options = RequestOptions::with_query(query.clone());
        assert_eq!(options.query, query);
        assert!(options.headers.is_empty());
    }

    #[test]
    fn test_trait_is_object_safe() {
        fn takes_dyn(_: Option<&dyn RestTransport>) {}
        takes_dyn(None);
    }
}
