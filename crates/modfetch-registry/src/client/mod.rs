//! Mod portal client for resolving releases.
//!
//! Generic over the HTTP backend so tests can swap in a fake.

use crate::config::RegistryClientConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{ModInfo, RegistryConfig};
use crate::url::build_mod_info_url;
use modfetch_core::{ArtifactName, ReleaseDescriptor};
use tracing::debug;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default registry client using the reqwest HTTP backend.
pub type DefaultRegistryClient = RegistryClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the mod portal API.
///
/// Use `DefaultRegistryClient` for production code and interact with it
/// through the `RegistryPort` trait.
pub struct RegistryClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: RegistryConfig,
}

impl DefaultRegistryClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidUrl` if the base URL does not parse and
    /// `RegistryError::Network` if the HTTP client cannot be initialized.
    pub fn new(config: &RegistryClientConfig) -> RegistryResult<Self> {
        let internal_config = RegistryConfig::parse(&config.base_url)?;
        let backend = ReqwestBackend::new(config.user_agent.clone(), config.timeout)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }
}

impl<B: HttpBackend> RegistryClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: RegistryConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Fetch the release list for a mod and select its most recent release.
    ///
    /// "Most recent" is the last entry of the portal's list, whatever its
    /// version string says.
    pub(crate) async fn latest_release(&self, name: &ArtifactName) -> RegistryResult<ReleaseDescriptor> {
        let url = build_mod_info_url(&self.config, name.as_str());
        debug!(target: "modfetch.registry", mod_name = %name, "Fetching mod metadata");

        let info: ModInfo = self.backend.get_json(&url).await?;
        let release = info
            .latest_release()
            .ok_or_else(|| RegistryError::InvalidResponse {
                message: format!("mod '{name}' has no releases"),
            })?;

        debug!(
            target: "modfetch.registry",
            mod_name = %name,
            version = %release.version,
            releases = info.releases.len(),
            "Resolved latest release"
        );

        Ok(ReleaseDescriptor::new(
            name.clone(),
            &release.version,
            &release.download_url,
        ))
    }
}
