//! Error types for the eBay Feed API client.
//!
//! This module contains the configuration error type. HTTP errors live in
//! [`crate::clients`] and are returned unmodified from every Feed operation.
//!
//! # Example
//!
//! ```rust
//! use ebay_feed::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid eBay OAuth user or application token.")]
    EmptyAccessToken,

    /// Marketplace ID cannot be empty.
    #[error("Marketplace ID cannot be empty. Expected a value such as 'EBAY_US'.")]
    EmptyMarketplaceId,

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.ebay.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Environment name is not recognized.
    #[error("Invalid environment '{value}'. Expected 'production' or 'sandbox'.")]
    InvalidEnvironment {
        /// The unrecognized value.
        value: String,
    },

    /// Request timeout must be non-zero.
    #[error("Request timeout must be greater than zero.")]
    InvalidTimeout,
}
