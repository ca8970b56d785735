//! HTTP backend abstraction for the mod portal API.
//!
//! The production implementation uses reqwest. Metadata lookups are not
//! retried: a failed lookup fails that one artifact and the batch moves on.

use crate::error::{RegistryError, RegistryResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `RegistryPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> RegistryResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
    user_agent: String,
}

impl ReqwestBackend {
    /// Create a new reqwest backend.
    pub fn new(user_agent: impl Into<String>, timeout: Option<Duration>) -> RegistryResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            user_agent: user_agent.into(),
        })
    }

    async fn fetch(&self, url: &Url) -> RegistryResult<reqwest::Response> {
        let response = self
            .client
            .get(url.as_str())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some(name) = extract_mod_name_from_path(url.path()) {
                return Err(RegistryError::ModNotFound { name });
            }
        }

        Err(RegistryError::ApiRequestFailed {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

/// Try to extract a mod name from an `/api/mods/{name}` path.
fn extract_mod_name_from_path(path: &str) -> Option<String> {
    let (_, rest) = path.split_once("/api/mods/")?;
    let segment = rest.split('/').next().filter(|s| !s.is_empty())?;
    let decoded = urlencoding::decode(segment).ok()?;
    Some(decoded.into_owned())
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> RegistryResult<T> {
        let response = self.fetch(url).await?;
        let bytes = response.bytes().await?;
        let data: T = serde_json::from_slice(&bytes)?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
