//! HTTP client for eBay API communication.
//!
//! This module provides the [`HttpClient`] type, the reqwest-backed executor
//! that every higher-level call ends up in.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest, MultipartForm, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::FeedConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the marketplace the call is made for.
pub const MARKETPLACE_ID_HEADER: &str = "x-ebay-c-marketplace-id";

/// HTTP client for making requests to the eBay API.
///
/// The client handles:
/// - Base URI selection from the configured environment or host override
/// - Default headers (User-Agent, Accept, Authorization, marketplace, language)
/// - JSON and multipart bodies
/// - Conversion of non-2xx responses into [`HttpError::Response`]
///
/// Header names are kept lowercase so per-request headers replace defaults
/// regardless of the caller's casing.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use ebay_feed::{FeedConfig, HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&FeedConfig::default());
/// let request = HttpRequest::builder(HttpMethod::Get, "/sell/feed/v1/task")
///     .query_param("feed_type", "LMS_ORDER_REPORT")
///     .build()?;
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.ebay.com`).
    base_uri: String,
    /// Default headers to include in all requests, keyed by lowercase name.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &FeedConfig) -> Self {
        let base_uri = config.api_base_uri().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}eBay Feed API Client v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("user-agent".to_string(), user_agent);
        default_headers.insert("accept".to_string(), "application/json".to_string());

        if let Some(token) = config.access_token() {
            default_headers.insert(
                "authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }
        if let Some(marketplace) = config.marketplace_id() {
            default_headers.insert(MARKETPLACE_ID_HEADER.to_string(), marketplace.to_string());
        }
        if let Some(language) = config.content_language() {
            default_headers.insert("content-language".to_string(), language.to_string());
        }

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the eBay API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);
        let headers = self.merge_headers(&request);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            let mut pairs: Vec<(&String, &String)> = query.iter().collect();
            pairs.sort();
            req_builder = req_builder.query(&pairs);
        }

        match &request.body {
            Some(RequestBody::Json(value)) => {
                req_builder = req_builder.body(value.to_string());
            }
            Some(RequestBody::Multipart(form)) => {
                req_builder = req_builder.multipart(Self::build_form(form)?);
            }
            None => {}
        }

        tracing::debug!(method = %request.http_method, %url, "Sending eBay API request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let bytes = res.bytes().await?.to_vec();
        let response = HttpResponse::new(code, res_headers, bytes);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            method = %request.http_method,
            path = %request.path,
            code,
            request_id = response.request_id().unwrap_or_default(),
            "eBay API request failed"
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Merges default headers, the body content type and per-request headers.
    ///
    /// Multipart bodies drop any `content-type`: reqwest writes its own with
    /// the boundary parameter.
    fn merge_headers(&self, request: &HttpRequest) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();

        if let Some(body_type) = &request.body_type {
            headers.insert(
                "content-type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.to_ascii_lowercase(), value.clone());
            }
        }
        if matches!(request.body, Some(RequestBody::Multipart(_))) {
            headers.remove("content-type");
        }

        headers
    }

    /// Converts a [`MultipartForm`] into a reqwest form.
    fn build_form(form: &MultipartForm) -> Result<reqwest::multipart::Form, HttpError> {
        let mut out = reqwest::multipart::Form::new();

        for (name, value) in form.text_fields() {
            out = out.text(name.clone(), value.clone());
        }
        for file in form.files() {
            let mut part = reqwest::multipart::Part::bytes(file.content.clone())
                .file_name(file.file_name.clone());
            if let Some(mime) = &file.mime_type {
                part = part.mime_str(mime).map_err(|_| {
                    InvalidHttpRequestError::InvalidMimeType { mime: mime.clone() }
                })?;
            }
            out = out.part(file.field_name.clone(), part);
        }

        Ok(out)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response.
    ///
    /// eBay error payloads carry `errors` and `warnings` arrays; those are kept.
    /// Anything else is reported as the raw body text.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "warnings", "error", "error_description"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if error_body.is_empty() {
            return String::from_utf8_lossy(&response.bytes).into_owned();
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
