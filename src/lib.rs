//! # eBay Feed API Rust Client
//!
//! A typed async client for the eBay Sell Feed API: order and inventory
//! report tasks, upload/download tasks, schedules, schedule templates and
//! customer service metric tasks.
//!
//! ## Overview
//!
//! This crate provides:
//! - Instance-based configuration via [`FeedConfig`] and [`FeedConfigBuilder`]
//! - Validated newtypes for the access token, host override and marketplace
//! - A reqwest-backed transport ([`HttpClient`], [`clients::RestClient`])
//! - The [`clients::RestTransport`] trait the API surface is composed over
//! - [`Feed`], one method per Feed API endpoint
//!
//! ## Quick Start
//!
//! ```rust
//! use ebay_feed::{AccessToken, Environment, FeedConfig, MarketplaceId};
//!
//! let config = FeedConfig::builder()
//!     .environment(Environment::Sandbox)
//!     .access_token(AccessToken::new("v^1.1#i^1#...").unwrap())
//!     .marketplace_id(MarketplaceId::new("EBAY_US").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making Feed API Calls
//!
//! ```rust,ignore
//! use ebay_feed::clients::{MultipartForm, RestClient};
//! use ebay_feed::feed::{CreateTaskRequest, FeedRequest};
//! use ebay_feed::{Feed, FeedConfig, FeedParams};
//!
//! let feed = Feed::new(RestClient::new(&config));
//!
//! // Create an upload task and push the file
//! let created = feed
//!     .create_task(
//!         CreateTaskRequest {
//!             feed_type: "LMS_ADD_FIXED_PRICE_ITEM".to_string(),
//!             schema_version: Some("1149".to_string()),
//!         }
//!         .to_body()?,
//!     )
//!     .await?;
//! let task_id = created.created_resource_id().unwrap_or_default().to_string();
//! feed.upload_file(&task_id, MultipartForm::file_upload("items.xml", xml_bytes))
//!     .await?;
//!
//! // Poll and download
//! let task = feed.get_task(&task_id).await?;
//! let report = feed.get_result_file(&task_id).await?;
//! let name = report.file_name().unwrap_or_else(|| "result.zip".to_string());
//! std::fs::write(name, &report.bytes)?;
//!
//! // List recent order reports
//! let tasks = feed
//!     .get_order_tasks(Some(FeedParams::new().feed_type("LMS_ORDER_REPORT").look_back_days(7)))
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Pass-through**: Feed calls return the transport's result unmodified
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod feed;

pub use config::{
    AccessToken, Environment, FeedConfig, FeedConfigBuilder, HostUrl, MarketplaceId,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, MultipartForm, RequestBody, RequestOptions,
    RestClient, RestTransport,
};

// Re-export the Feed API surface
pub use feed::{Feed, FeedParams, FEED_BASE_PATH};
