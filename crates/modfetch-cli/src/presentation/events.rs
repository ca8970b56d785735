//! `FetchEventEmitterPort` that writes progress through `tracing`.

use std::time::Duration;

use modfetch_core::{FetchEvent, FetchEventEmitterPort};
use tracing::{debug, info, warn};

use super::summary::rate_line;

/// Renders fetch events as log lines.
///
/// Skip/start/finish lines are `info`, failures `warn`, byte progress and
/// batch bookkeeping `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventEmitter;

impl TracingEventEmitter {
    pub const fn new() -> Self {
        Self
    }
}

impl FetchEventEmitterPort for TracingEventEmitter {
    fn emit(&self, event: FetchEvent) {
        match event {
            FetchEvent::BatchStarted {
                requested,
                max_concurrent,
            } => {
                debug!(target: "modfetch.cli", requested, max_concurrent, "Fetching mods");
            }
            FetchEvent::ArtifactSkipped { name, file_name } => {
                info!(target: "modfetch.cli", artifact = %name, "{file_name} already present");
            }
            FetchEvent::ArtifactStarted { name, version } => {
                info!(target: "modfetch.cli", artifact = %name, "Downloading {name} {version}");
            }
            FetchEvent::ArtifactProgress {
                name,
                bytes_written,
                total_bytes,
            } => match total_bytes {
                Some(total) => {
                    debug!(target: "modfetch.cli", artifact = %name, "{name}: {bytes_written}/{total} bytes");
                }
                None => debug!(target: "modfetch.cli", artifact = %name, "{name}: {bytes_written} bytes"),
            },
            FetchEvent::ArtifactCompleted {
                name,
                bytes,
                elapsed_ms,
            } => {
                let line = rate_line(
                    &format!("Downloaded {name}"),
                    bytes,
                    Duration::from_millis(elapsed_ms),
                );
                info!(target: "modfetch.cli", artifact = %name, "{line}");
            }
            FetchEvent::ArtifactFailed { name, error } => {
                warn!(target: "modfetch.cli", artifact = %name, kind = error.kind(), "Failed {name}: {error}");
            }
            FetchEvent::BatchCompleted {
                requested,
                failed,
                total_bytes,
                elapsed_ms,
            } => {
                debug!(
                    target: "modfetch.cli",
                    requested,
                    failed,
                    total_bytes,
                    elapsed_ms,
                    "Batch complete"
                );
            }
        }
    }
}
