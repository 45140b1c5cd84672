//! Configuration types for the eBay Feed API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`FeedConfig`]: Settings shared by every request (host, token, headers)
//! - [`FeedConfigBuilder`]: A builder for constructing [`FeedConfig`] instances
//! - [`AccessToken`]: An OAuth token newtype with masked debug output
//! - [`MarketplaceId`]: The marketplace header value
//! - [`HostUrl`]: A validated host override
//! - [`Environment`]: Production or sandbox
//!
//! # Example
//!
//! ```rust
//! use ebay_feed::{AccessToken, Environment, FeedConfig, MarketplaceId};
//!
//! let config = FeedConfig::builder()
//!     .environment(Environment::Sandbox)
//!     .access_token(AccessToken::new("v^1.1#token").unwrap())
//!     .marketplace_id(MarketplaceId::new("EBAY_US").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base_uri(), "https://api.sandbox.ebay.com");
//! ```

mod environment;
mod newtypes;

pub use environment::{Environment, PRODUCTION_API_HOST, SANDBOX_API_HOST};
pub use newtypes::{AccessToken, HostUrl, MarketplaceId};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the eBay Feed API client.
///
/// `FeedConfig` is `Clone`, `Send`, and `Sync`; build it once and share it
/// between clients.
#[derive(Clone, Debug, Default)]
pub struct FeedConfig {
    environment: Environment,
    access_token: Option<AccessToken>,
    api_host: Option<HostUrl>,
    marketplace_id: Option<MarketplaceId>,
    content_language: Option<String>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl FeedConfig {
    /// Creates a new builder for constructing a `FeedConfig`.
    #[must_use]
    pub fn builder() -> FeedConfigBuilder {
        FeedConfigBuilder::new()
    }

    /// Returns the target environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the marketplace ID, if configured.
    #[must_use]
    pub const fn marketplace_id(&self) -> Option<&MarketplaceId> {
        self.marketplace_id.as_ref()
    }

    /// Returns the `Content-Language` value, if configured.
    #[must_use]
    pub fn content_language(&self) -> Option<&str> {
        self.content_language.as_deref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the scheme and host requests are sent to.
    ///
    /// The host override wins over the environment's host.
    #[must_use]
    pub fn api_base_uri(&self) -> &str {
        self.api_host
            .as_ref()
            .map_or_else(|| self.environment.api_host(), AsRef::as_ref)
    }
}

// Verify FeedConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FeedConfig>();
};

/// Builder for constructing [`FeedConfig`] instances.
///
/// Every field is optional.
///
/// # Defaults
///
/// - `environment`: [`Environment::Production`]
/// - `access_token`: `None` (no `Authorization` header)
/// - `api_host`: `None`
/// - `marketplace_id`: `None`
/// - `content_language`: `None`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (reqwest default)
#[derive(Debug, Default)]
pub struct FeedConfigBuilder {
    environment: Option<Environment>,
    access_token: Option<AccessToken>,
    api_host: Option<HostUrl>,
    marketplace_id: Option<MarketplaceId>,
    content_language: Option<String>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl FeedConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target environment.
    #[must_use]
    pub const fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets the OAuth access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Overrides the API host.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the marketplace ID header.
    #[must_use]
    pub fn marketplace_id(mut self, id: MarketplaceId) -> Self {
        self.marketplace_id = Some(id);
        self
    }

    /// Sets the `Content-Language` header, e.g. `en-US`.
    #[must_use]
    pub fn content_language(mut self, language: impl Into<String>) -> Self {
        self.content_language = Some(language.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`FeedConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if a zero timeout was set.
    pub fn build(self) -> Result<FeedConfig, ConfigError> {
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(FeedConfig {
            environment: self.environment.unwrap_or_default(),
            access_token: self.access_token,
            api_host: self.api_host,
            marketplace_id: self.marketplace_id,
            content_language: self.content_language,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
