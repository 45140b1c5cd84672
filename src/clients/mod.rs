//! HTTP transport types for eBay API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client executing requests
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`RequestBody`] and [`MultipartForm`]: JSON and multipart payloads
//! - [`RestTransport`]: The capability an API surface is composed over
//! - [`RestClient`]: The default [`RestTransport`]
//!
//! # Example
//!
//! ```rust,ignore
//! use ebay_feed::clients::{HttpClient, HttpMethod, HttpRequest};
//! use ebay_feed::FeedConfig;
//!
//! let client = HttpClient::new(&FeedConfig::default());
//! let request = HttpRequest::builder(HttpMethod::Get, "/sell/feed/v1/schedule")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, MARKETPLACE_ID_HEADER, SDK_VERSION};
pub use http_request::{
    DataType, FilePart, HttpMethod, HttpRequest, HttpRequestBuilder, MultipartForm, RequestBody,
};
pub use http_response::HttpResponse;
pub use transport::{RequestOptions, RestTransport};

pub use rest::RestClient;
