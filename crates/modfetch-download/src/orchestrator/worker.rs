//! Per-name worker.
//!
//! A worker owns nothing: it gets the name by value and shared read-only
//! dependencies, and hands back exactly one `TransferResult`.

use std::path::PathBuf;
use std::sync::Arc;

use modfetch_core::{
    ArtifactName, Credentials, FetchEvent, FetchEventEmitterPort, RegistryPort, TransferResult,
};
use tracing::debug;

use crate::executor::TransferExecutor;

/// Shared dependencies for all workers of one batch.
pub struct WorkerDeps {
    pub registry: Arc<dyn RegistryPort>,
    pub executor: Arc<TransferExecutor>,
    pub emitter: Arc<dyn FetchEventEmitterPort>,
    pub destination: PathBuf,
    pub credentials: Credentials,
}

/// Resolve `name` and transfer its latest release.
pub async fn run_job(name: ArtifactName, deps: &WorkerDeps) -> TransferResult {
    let result = match deps.registry.resolve(&name).await {
        Ok(release) => {
            deps.executor
                .transfer(&release, &deps.destination, &deps.credentials)
                .await
        }
        Err(error) => TransferResult::failed(name, None, error),
    };

    if let Some(error) = result.error() {
        debug!(
            target: "modfetch.download",
            artifact = %result.name,
            kind = error.kind(),
            "Artifact failed: {error}"
        );
        deps.emitter.emit(FetchEvent::ArtifactFailed {
            name: result.name.to_string(),
            error: error.clone(),
        });
    }

    result
}
