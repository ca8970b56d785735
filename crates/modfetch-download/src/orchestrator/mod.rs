//! Batch orchestration.
//!
//! `fetch_all` spawns one task per requested name onto a `JoinSet`, gates the
//! actual work with a semaphore sized by `FetchConfig`, and folds results
//! into a `BatchSummary` from a single collecting loop.

mod worker;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use modfetch_core::{
    ArtifactName, BatchError, BatchSummary, Credentials, FetchConfig, FetchError, FetchEvent,
    FetchEventEmitterPort, PathError, RegistryPort, TransferResult, check_output_directory,
};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::executor::TransferExecutor;
use worker::{WorkerDeps, run_job};

/// Runs batches of artifact fetches.
pub struct FetchOrchestrator {
    registry: Arc<dyn RegistryPort>,
    emitter: Arc<dyn FetchEventEmitterPort>,
    executor: Arc<TransferExecutor>,
    config: FetchConfig,
}

impl FetchOrchestrator {
    /// Create an orchestrator with a default HTTP client.
    pub fn new(
        registry: Arc<dyn RegistryPort>,
        emitter: Arc<dyn FetchEventEmitterPort>,
        config: FetchConfig,
    ) -> Self {
        Self::with_client(reqwest::Client::new(), registry, emitter, config)
    }

    /// Create an orchestrator whose transfers share `client`.
    pub fn with_client(
        client: reqwest::Client,
        registry: Arc<dyn RegistryPort>,
        emitter: Arc<dyn FetchEventEmitterPort>,
        config: FetchConfig,
    ) -> Self {
        let executor = Arc::new(TransferExecutor::with_client(
            client,
            Arc::clone(&registry),
            Arc::clone(&emitter),
            &config,
        ));
        Self {
            registry,
            emitter,
            executor,
            config,
        }
    }

    /// Fetch the latest release of every name into `destination_dir`.
    ///
    /// Duplicated names are scheduled independently. The returned summary has
    /// exactly one result per entry of `names`, in completion order.
    ///
    /// # Errors
    ///
    /// Returns `BatchError::Destination` if `destination_dir` is missing, not
    /// a directory or not writable. Nothing is dispatched in that case.
    pub async fn fetch_all(
        &self,
        names: &[ArtifactName],
        destination_dir: &Path,
        credentials: &Credentials,
    ) -> Result<BatchSummary, BatchError> {
        let dir = destination_dir.to_path_buf();
        tokio::task::spawn_blocking(move || check_output_directory(&dir))
            .await
            .map_err(|e| PathError::CheckInterrupted(e.to_string()))??;

        let pool_size = self.config.effective_concurrency();
        info!(
            target: "modfetch.download",
            requested = names.len(),
            pool_size,
            destination = %destination_dir.display(),
            "Starting batch"
        );
        self.emitter.emit(FetchEvent::BatchStarted {
            requested: names.len(),
            max_concurrent: pool_size,
        });

        let started = Instant::now();
        let deps = Arc::new(WorkerDeps {
            registry: Arc::clone(&self.registry),
            executor: Arc::clone(&self.executor),
            emitter: Arc::clone(&self.emitter),
            destination: destination_dir.to_path_buf(),
            credentials: credentials.clone(),
        });
        let semaphore = Arc::new(Semaphore::new(pool_size));

        // Names whose result has not come back yet, with multiplicity.
        let mut outstanding: HashMap<ArtifactName, usize> = HashMap::new();
        let mut tasks = JoinSet::new();

        for name in names {
            *outstanding.entry(name.clone()).or_default() += 1;

            let deps = Arc::clone(&deps);
            let semaphore = Arc::clone(&semaphore);
            let name = name.clone();
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                run_job(name, &deps).await
            });
        }

        let mut summary = BatchSummary::new(names.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(result) => {
                    settle(&mut outstanding, &result.name);
                    debug!(
                        target: "modfetch.download",
                        artifact = %result.name,
                        done = summary.count() + 1,
                        requested = names.len(),
                        "Task finished"
                    );
                    summary.record(result);
                }
                Err(join_error) => {
                    error!(target: "modfetch.download", "Fetch task aborted: {join_error}");
                }
            }
        }

        // Tasks that died without reporting still owe one result each.
        for (name, count) in outstanding {
            for _ in 0..count {
                let error = FetchError::task_aborted(format!(
                    "task for '{name}' ended without reporting a result"
                ));
                self.emitter.emit(FetchEvent::ArtifactFailed {
                    name: name.to_string(),
                    error: error.clone(),
                });
                summary.record(TransferResult::failed(name.clone(), None, error));
            }
        }

        summary.finish(started.elapsed());

        info!(
            target: "modfetch.download",
            requested = summary.count(),
            failed = summary.failure_count(),
            total_bytes = summary.total_bytes(),
            elapsed_ms = u64::try_from(summary.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Batch finished"
        );
        self.emitter.emit(FetchEvent::BatchCompleted {
            requested: summary.count(),
            failed: summary.failure_count(),
            total_bytes: summary.total_bytes(),
            elapsed_ms: u64::try_from(summary.elapsed().as_millis()).unwrap_or(u64::MAX),
        });

        Ok(summary)
    }
}

fn settle(outstanding: &mut HashMap<ArtifactName, usize>, name: &ArtifactName) {
    if let Some(count) = outstanding.get_mut(name) {
        *count -= 1;
        if *count == 0 {
            outstanding.remove(name);
        }
    }
}
