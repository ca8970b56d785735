//! Single-artifact transfer.
//!
//! The executor takes a resolved release and turns it into an archive on
//! disk: skip if already present, otherwise stream the authorized download
//! into a staging file and commit it with a no-clobber rename.

mod destination;
mod response;
mod staging;

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::StreamExt;
use modfetch_core::{
    Credentials, FetchConfig, FetchError, FetchEvent, FetchEventEmitterPort, RegistryPort,
    ReleaseDescriptor, TransferResult,
};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use tracing::debug;

use crate::progress::ProgressThrottle;

pub use destination::ArtifactDestination;
use response::validate_response;
use staging::{CommitOutcome, StagingFile};

/// Downloads resolved releases into a directory.
pub struct TransferExecutor {
    client: reqwest::Client,
    registry: Arc<dyn RegistryPort>,
    emitter: Arc<dyn FetchEventEmitterPort>,
    user_agent: String,
}

impl TransferExecutor {
    /// Create an executor with a default HTTP client.
    pub fn new(
        registry: Arc<dyn RegistryPort>,
        emitter: Arc<dyn FetchEventEmitterPort>,
        config: &FetchConfig,
    ) -> Self {
        Self::with_client(reqwest::Client::new(), registry, emitter, config)
    }

    /// Create an executor sharing an existing HTTP client.
    pub fn with_client(
        client: reqwest::Client,
        registry: Arc<dyn RegistryPort>,
        emitter: Arc<dyn FetchEventEmitterPort>,
        config: &FetchConfig,
    ) -> Self {
        Self {
            client,
            registry,
            emitter,
            user_agent: config.user_agent.clone(),
        }
    }

    /// Transfer one release into `destination_dir`.
    ///
    /// Never panics on I/O or HTTP problems: every failure comes back as a
    /// failed `TransferResult`. Failure events are left to the caller.
    pub async fn transfer(
        &self,
        release: &ReleaseDescriptor,
        destination_dir: &Path,
        credentials: &Credentials,
    ) -> TransferResult {
        let destination = match ArtifactDestination::plan(destination_dir, release) {
            Ok(destination) => destination,
            Err(error) => return failed(release, error),
        };

        match tokio::fs::try_exists(&destination.path).await {
            Ok(true) => return self.skipped(release, destination),
            Ok(false) => {}
            Err(e) => return failed(release, FetchError::from_io_error(&e)),
        }

        self.emitter.emit(FetchEvent::ArtifactStarted {
            name: release.name.to_string(),
            version: release.version.clone(),
        });

        let started = Instant::now();
        match self.download(release, &destination, credentials).await {
            Ok(CommitOutcome::Committed { bytes }) => {
                let elapsed = started.elapsed();
                self.emitter.emit(FetchEvent::ArtifactCompleted {
                    name: release.name.to_string(),
                    bytes,
                    elapsed_ms: millis(elapsed),
                });
                TransferResult::downloaded(
                    release.name.clone(),
                    &release.version,
                    destination.path,
                    bytes,
                    elapsed,
                )
            }
            Ok(CommitOutcome::AlreadyPresent) => {
                debug!(
                    target: "modfetch.download",
                    artifact = %release.name,
                    "Destination appeared during transfer, discarding staged copy"
                );
                self.skipped(release, destination)
            }
            Err(error) => failed(release, error),
        }
    }

    async fn download(
        &self,
        release: &ReleaseDescriptor,
        destination: &ArtifactDestination,
        credentials: &Credentials,
    ) -> Result<CommitOutcome, FetchError> {
        let url = self.registry.build_download_url(release, credentials)?;

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(transport_error)?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        validate_response(response.status().as_u16(), content_type.as_deref())?;

        let total_bytes = response.content_length();
        let mut staging = StagingFile::create_in(&destination.dir)?;
        let mut throttle = ProgressThrottle::default();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(transport_error)?;
            staging.write_chunk(&chunk).await?;

            if throttle.ready() {
                self.emitter.emit(FetchEvent::ArtifactProgress {
                    name: release.name.to_string(),
                    bytes_written: staging.bytes_written(),
                    total_bytes,
                });
            }
        }

        staging.commit(&destination.path).await
    }

    fn skipped(&self, release: &ReleaseDescriptor, destination: ArtifactDestination) -> TransferResult {
        self.emitter.emit(FetchEvent::ArtifactSkipped {
            name: release.name.to_string(),
            file_name: destination.file_name,
        });
        TransferResult::skipped(release.name.clone(), &release.version, destination.path)
    }
}

fn failed(release: &ReleaseDescriptor, error: FetchError) -> TransferResult {
    TransferResult::failed(release.name.clone(), Some(release.version.clone()), error)
}

/// Map a reqwest failure without echoing the URL, which carries credentials.
fn transport_error(err: reqwest::Error) -> FetchError {
    let status = err.status().map(|s| s.as_u16());
    let message = err.without_url().to_string();
    match status {
        Some(code) => FetchError::registry_unavailable_with_status(message, code),
        None => FetchError::registry_unavailable(message),
    }
}

fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
