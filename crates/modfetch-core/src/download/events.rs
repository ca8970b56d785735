//! Fetch events - discriminated union for everything a batch reports.
//!
//! The orchestrator and executor emit these through
//! [`FetchEventEmitterPort`](crate::ports::FetchEventEmitterPort); adapters
//! decide how to render them.

use serde::{Deserialize, Serialize};

use super::errors::FetchError;

/// Single discriminated union for all fetch events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FetchEvent {
    /// A batch was accepted and its tasks are being dispatched.
    BatchStarted {
        /// Number of names requested.
        requested: usize,
        /// Worker pool size.
        max_concurrent: usize,
    },

    /// The destination already existed; nothing will be downloaded.
    ArtifactSkipped {
        /// Artifact name.
        name: String,
        /// Destination file name.
        file_name: String,
    },

    /// A download request is about to be sent.
    ArtifactStarted {
        /// Artifact name.
        name: String,
        /// Release version being fetched.
        version: String,
    },

    /// Bytes written so far (rate-limited).
    ArtifactProgress {
        /// Artifact name.
        name: String,
        /// Bytes written so far.
        bytes_written: u64,
        /// Total bytes if the server announced a length.
        #[serde(skip_serializing_if = "Option::is_none")]
        total_bytes: Option<u64>,
    },

    /// The archive was committed to the destination.
    ArtifactCompleted {
        /// Artifact name.
        name: String,
        /// Bytes written.
        bytes: u64,
        /// Download plus write time in milliseconds.
        elapsed_ms: u64,
    },

    /// Resolution or transfer failed for this artifact.
    ArtifactFailed {
        /// Artifact name.
        name: String,
        /// What went wrong.
        error: FetchError,
    },

    /// Every task has finished.
    BatchCompleted {
        /// Number of names requested.
        requested: usize,
        /// Number of failed artifacts.
        failed: usize,
        /// Total bytes written.
        total_bytes: u64,
        /// Wall-clock time of the batch in milliseconds.
        elapsed_ms: u64,
    },
}
