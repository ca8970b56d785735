//! URL construction helpers for the mod portal.
//!
//! Pure functions: nothing here performs a request.

use crate::error::{RegistryError, RegistryResult};
use crate::models::RegistryConfig;
use modfetch_core::Credentials;
use url::Url;

/// Build the metadata URL for a mod: `{base}/api/mods/{name}`.
///
/// The name is percent-encoded as a single path segment.
pub fn build_mod_info_url(config: &RegistryConfig, name: &str) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!(
        "{base_path}/api/mods/{}",
        urlencoding::encode(name)
    ));
    url.set_query(None);
    url
}

/// Build the authorized download URL for a release path.
///
/// The path is resolved against the portal host and the credentials are
/// appended as form-encoded `username` and `token` query parameters.
///
/// A path that resolves to a different scheme, host or port is rejected
/// before any credential is attached.
pub fn build_download_url(
    config: &RegistryConfig,
    download_path: &str,
    credentials: &Credentials,
) -> RegistryResult<Url> {
    let mut url = config.base_url.join(download_path)?;
    if !same_origin(&config.base_url, &url) {
        return Err(RegistryError::InvalidResponse {
            message: format!(
                "download path points outside the mod portal (host {})",
                url.host_str().unwrap_or("<none>")
            ),
        });
    }
    url.query_pairs_mut()
        .append_pair("username", credentials.username())
        .append_pair("token", credentials.token());
    Ok(url)
}

fn same_origin(base: &Url, candidate: &Url) -> bool {
    base.scheme() == candidate.scheme()
        && base.host() == candidate.host()
        && base.port_or_known_default() == candidate.port_or_known_default()
}
