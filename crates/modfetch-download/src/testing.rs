//! Hand-written port fakes shared by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use modfetch_core::{
    ArtifactName, Credentials, FetchError, FetchEvent, FetchEventEmitterPort, RegistryPort,
    ReleaseDescriptor,
};
use url::Url;

/// Registry answering from a fixed table.
///
/// Unknown names resolve to `NotFound`. Download URLs point at `base`.
pub struct StaticRegistry {
    base: String,
    releases: HashMap<String, Result<ReleaseDescriptor, FetchError>>,
    panic_on: Option<String>,
}

impl StaticRegistry {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            releases: HashMap::new(),
            panic_on: None,
        }
    }

    /// Register `name` with a single release served from `/download/{name}/{version}`.
    pub fn with_release(mut self, name: &str, version: &str) -> Self {
        let descriptor = ReleaseDescriptor::new(
            ArtifactName::from(name),
            version,
            format!("/download/{name}/{version}"),
        );
        self.releases.insert(name.to_string(), Ok(descriptor));
        self
    }

    pub fn with_error(mut self, name: &str, error: FetchError) -> Self {
        self.releases.insert(name.to_string(), Err(error));
        self
    }

    /// Make `resolve` panic for `name`.
    pub fn panicking_on(mut self, name: &str) -> Self {
        self.panic_on = Some(name.to_string());
        self
    }
}

#[async_trait]
impl RegistryPort for StaticRegistry {
    async fn resolve(&self, name: &ArtifactName) -> Result<ReleaseDescriptor, FetchError> {
        if self.panic_on.as_deref() == Some(name.as_str()) {
            panic!("registry blew up resolving {name}");
        }
        self.releases
            .get(name.as_str())
            .cloned()
            .unwrap_or_else(|| Err(FetchError::not_found(name.as_str())))
    }

    fn build_download_url(
        &self,
        release: &ReleaseDescriptor,
        credentials: &Credentials,
    ) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base)
            .and_then(|base| base.join(&release.download_path))
            .map_err(|e| FetchError::malformed(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("username", credentials.username())
            .append_pair("token", credentials.token());
        Ok(url)
    }
}

/// Emitter that keeps every event in order.
#[derive(Default)]
pub struct RecordingEmitter {
    events: Mutex<Vec<FetchEvent>>,
}

impl RecordingEmitter {
    pub fn events(&self) -> Vec<FetchEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl FetchEventEmitterPort for RecordingEmitter {
    fn emit(&self, event: FetchEvent) {
        self.events.lock().unwrap().push(event);
    }
}
