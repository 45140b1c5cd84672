//! HTTP-specific error types for the eBay Feed API client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Feed operations hand these back exactly as the transport produced them.
//!
//! # Example
//!
//! ```rust,ignore
//! use ebay_feed::HttpError;
//!
//! match feed.get_task("task-1").await {
//!     Ok(response) => println!("Task: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message holds the serialized `errors`/`warnings` arrays eBay returns
/// in error payloads, or the raw body text when it is not JSON.
///
/// # Example
///
/// ```rust
/// use ebay_feed::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"errors":[{"errorId":160022}]}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error payload.
    pub message: String,
    /// Request ID reported by eBay, if any.
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before a request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// The body and its declared type disagree, e.g. a multipart form sent as JSON.
    #[error("Body type {body_type} does not match the supplied {body_kind} body.")]
    BodyTypeMismatch {
        /// The declared content type.
        body_type: String,
        /// The kind of body that was supplied.
        body_kind: &'static str,
    },

    /// A multipart file part carries a MIME type that cannot be parsed.
    #[error("Invalid MIME type '{mime}' on multipart file part.")]
    InvalidMimeType {
        /// The rejected value.
        mime: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
