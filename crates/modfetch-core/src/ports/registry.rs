//! Registry port.
//!
//! Abstracts the remote registry that knows which releases exist for an
//! artifact and where to download them from.

use async_trait::async_trait;
use url::Url;

use crate::domain::{ArtifactName, Credentials, ReleaseDescriptor};
use crate::download::FetchError;

/// Port for resolving artifacts and authorizing their downloads.
///
/// Implementations must never log or embed credentials anywhere except the
/// URL returned by [`build_download_url`](Self::build_download_url).
#[async_trait]
pub trait RegistryPort: Send + Sync {
    /// Resolve an artifact to its most recent release.
    ///
    /// The most recent release is the last entry of the registry's release
    /// list. No version comparison is performed.
    ///
    /// # Errors
    ///
    /// - `FetchError::NotFound` if the registry has no such artifact
    /// - `FetchError::RegistryUnavailable` on network/HTTP failure
    /// - `FetchError::MalformedResponse` if the body has the wrong shape
    async fn resolve(&self, name: &ArtifactName) -> Result<ReleaseDescriptor, FetchError>;

    /// Build the authorized download URL for a release.
    ///
    /// Pure construction: no request is made.
    fn build_download_url(
        &self,
        release: &ReleaseDescriptor,
        credentials: &Credentials,
    ) -> Result<Url, FetchError>;
}
