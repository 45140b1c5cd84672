//! REST API client for eBay APIs.
//!
//! [`RestClient`] is a thin verb layer over
//! [`HttpClient`](crate::clients::HttpClient) and the crate's default
//! [`RestTransport`](crate::clients::RestTransport).
//!
//! # Example
//!
//! ```rust,ignore
//! use ebay_feed::clients::RestClient;
//! use ebay_feed::{Feed, FeedConfig};
//!
//! let client = RestClient::new(&FeedConfig::default());
//! let feed = Feed::new(client);
//! let response = feed.get_tasks(None).await?;
//! ```
//!
//! # Retry Behavior
//!
//! Requests are sent exactly once. Failures are returned to the caller.

mod client;

pub use client::RestClient;
