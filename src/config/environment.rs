//! eBay API environments.
//!
//! This module provides the [`Environment`] enum selecting which eBay API
//! host requests are sent to.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Production API host.
pub const PRODUCTION_API_HOST: &str = "https://api.ebay.com";

/// Sandbox API host.
pub const SANDBOX_API_HOST: &str = "https://api.sandbox.ebay.com";

/// The eBay environment to talk to.
///
/// # Example
///
/// ```rust
/// use ebay_feed::Environment;
///
/// let env: Environment = "Sandbox".parse().unwrap();
/// assert_eq!(env, Environment::Sandbox);
/// assert_eq!(env.api_host(), "https://api.sandbox.ebay.com");
/// assert_eq!(env.to_string(), "sandbox");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Live marketplace traffic.
    #[default]
    Production,
    /// eBay's developer sandbox.
    Sandbox,
}

impl Environment {
    /// Returns the REST API host for this environment, without a trailing slash.
    #[must_use]
    pub const fn api_host(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_API_HOST,
            Self::Sandbox => SANDBOX_API_HOST,
        }
    }

    /// Returns `true` for the sandbox environment.
    #[must_use]
    pub const fn is_sandbox(self) -> bool {
        matches!(self, Self::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Sandbox => write!(f, "sandbox"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            _ => Err(ConfigError::InvalidEnvironment {
                value: s.to_string(),
            }),
        }
    }
}
