//! `RegistryPort` implementation for `RegistryClient`.
//!
//! Internal `RegistryError`s are converted to core `FetchError`s here.

use async_trait::async_trait;
use modfetch_core::{ArtifactName, Credentials, FetchError, RegistryPort, ReleaseDescriptor};
use tracing::warn;
use url::Url;

use crate::client::RegistryClient;
use crate::error::RegistryError;
use crate::http::HttpBackend;
use crate::url::build_download_url;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert an internal `RegistryError` to a core `FetchError`.
fn map_error(name: &ArtifactName, err: RegistryError) -> FetchError {
    match err {
        RegistryError::ApiRequestFailed { status: 404, .. } => FetchError::not_found(name.as_str()),
        RegistryError::ApiRequestFailed { status, url } => FetchError::registry_unavailable_with_status(
            format!("mod portal returned status {status} for {url}"),
            status,
        ),
        RegistryError::ModNotFound { name } => FetchError::not_found(name),
        RegistryError::InvalidResponse { message } => FetchError::malformed(message),
        RegistryError::JsonParse(e) => {
            FetchError::malformed(format!("mod portal returned an unexpected body: {e}"))
        }
        RegistryError::Network(e) => {
            let status = e.status().map(|s| s.as_u16());
            let message = e.without_url().to_string();
            match status {
                Some(code) => FetchError::registry_unavailable_with_status(message, code),
                None => FetchError::registry_unavailable(message),
            }
        }
        RegistryError::InvalidUrl(e) => FetchError::malformed(format!("invalid mod portal URL: {e}")),
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> RegistryPort for RegistryClient<B> {
    async fn resolve(&self, name: &ArtifactName) -> Result<ReleaseDescriptor, FetchError> {
        self.latest_release(name).await.map_err(|e| {
            let error = map_error(name, e);
            warn!(
                target: "modfetch.registry",
                mod_name = %name,
                kind = error.kind(),
                "Failed to resolve mod: {error}"
            );
            error
        })
    }

    fn build_download_url(
        &self,
        release: &ReleaseDescriptor,
        credentials: &Credentials,
    ) -> Result<Url, FetchError> {
        build_download_url(&self.config, &release.download_path, credentials)
            .map_err(|e| map_error(&release.name, e))
    }
}
