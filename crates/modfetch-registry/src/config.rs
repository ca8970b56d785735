//! Public configuration for the registry client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

/// Default mod portal host.
pub(crate) const DEFAULT_BASE_URL: &str = "https://mods.factorio.com";

/// Configuration for the registry client.
///
/// # Example
///
/// ```
/// use modfetch_registry::RegistryClientConfig;
/// use std::time::Duration;
///
/// let config = RegistryClientConfig::new()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct RegistryClientConfig {
    /// Portal host that serves both `/api/mods` and the download paths
    pub(crate) base_url: String,
    /// User agent string for metadata requests
    pub(crate) user_agent: String,
    /// Request timeout for metadata lookups; `None` leaves it to reqwest
    pub(crate) timeout: Option<Duration>,
}

impl Default for RegistryClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("modfetch-registry/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl RegistryClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the portal host.
    ///
    /// Defaults to `https://mods.factorio.com`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the portal host if one is given, keeping the current one otherwise.
    #[must_use]
    pub fn with_optional_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.base_url = url;
        }
        self
    }

    /// Set the user agent string for metadata requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a metadata request timeout.
    ///
    /// Unset by default.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
