//! Internal API response types for the mod portal.
//!
//! These types are internal to `modfetch-registry`. External consumers see
//! `ReleaseDescriptor` from `modfetch-core`.

use serde::Deserialize;
use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the registry client.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Portal host (default: <https://mods.factorio.com>)
    pub base_url: Url,
}

impl RegistryConfig {
    /// Parse the configured base URL.
    pub fn parse(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
        })
    }
}

// ============================================================================
// API Responses
// ============================================================================

/// Body of `GET /api/mods/{name}`.
///
/// Only the fields modfetch needs are decoded; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ModInfo {
    /// Releases, oldest first
    pub releases: Vec<ModRelease>,
}

/// One entry of the `releases` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ModRelease {
    /// Release version string
    pub version: String,
    /// Download path relative to the portal host
    pub download_url: String,
}

impl ModInfo {
    /// The most recent release: the last entry of the list.
    pub fn latest_release(&self) -> Option<&ModRelease> {
        self.releases.last()
    }
}
