//! Per-artifact results and the batch summary.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::ArtifactName;

use super::errors::FetchError;

/// How a single artifact's transfer ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferStatus {
    /// The archive was downloaded and committed to the destination.
    Downloaded,
    /// The destination file already existed; nothing was written.
    Skipped,
    /// Resolution or transfer failed.
    Failed(FetchError),
}

/// Outcome of one requested artifact. Exactly one per requested name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferResult {
    /// The requested artifact.
    pub name: ArtifactName,
    /// Resolved release version, if resolution succeeded.
    pub version: Option<String>,
    /// Destination path, if resolution succeeded.
    pub path: Option<PathBuf>,
    /// Bytes written to the destination (0 when skipped or failed).
    pub bytes: u64,
    /// Time spent downloading and writing (zero when skipped).
    pub elapsed: Duration,
    /// Final status.
    pub status: TransferStatus,
}

impl TransferResult {
    /// A completed download.
    pub fn downloaded(
        name: ArtifactName,
        version: impl Into<String>,
        path: PathBuf,
        bytes: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            name,
            version: Some(version.into()),
            path: Some(path),
            bytes,
            elapsed,
            status: TransferStatus::Downloaded,
        }
    }

    /// A skip because the destination already exists.
    pub fn skipped(name: ArtifactName, version: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name,
            version: Some(version.into()),
            path: Some(path),
            bytes: 0,
            elapsed: Duration::ZERO,
            status: TransferStatus::Skipped,
        }
    }

    /// A failure, with whatever was known about the release at the time.
    pub fn failed(name: ArtifactName, version: Option<String>, error: FetchError) -> Self {
        Self {
            name,
            version,
            path: None,
            bytes: 0,
            elapsed: Duration::ZERO,
            status: TransferStatus::Failed(error),
        }
    }

    /// Whether this artifact failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, TransferStatus::Failed(_))
    }

    /// Whether this artifact was skipped.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self.status, TransferStatus::Skipped)
    }

    /// The failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&FetchError> {
        match &self.status {
            TransferStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Throughput of this transfer in KiB/s.
    #[must_use]
    pub fn kib_per_sec(&self) -> f64 {
        kib_per_sec(self.bytes, self.elapsed)
    }
}

/// Aggregate of every [`TransferResult`] in one invocation.
///
/// `elapsed` is the wall-clock span of the whole batch, not the sum of the
/// per-item times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    requested: usize,
    total_bytes: u64,
    elapsed: Duration,
    results: Vec<TransferResult>,
}

impl BatchSummary {
    /// Start an empty summary for `requested` names.
    #[must_use]
    pub fn new(requested: usize) -> Self {
        Self {
            requested,
            total_bytes: 0,
            elapsed: Duration::ZERO,
            results: Vec::with_capacity(requested),
        }
    }

    /// Record one result. Results are kept in the order they are recorded.
    pub fn record(&mut self, result: TransferResult) {
        self.total_bytes += result.bytes;
        self.results.push(result);
    }

    /// Set the batch wall-clock time.
    pub const fn finish(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    /// Number of names requested, including duplicates, skips and failures.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.requested
    }

    /// Total bytes written across the batch.
    #[must_use]
    pub const fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Wall-clock time of the whole batch.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// All results in completion order.
    #[must_use]
    pub fn results(&self) -> &[TransferResult] {
        &self.results
    }

    /// Results that downloaded a file.
    pub fn downloaded(&self) -> impl Iterator<Item = &TransferResult> {
        self.results
            .iter()
            .filter(|r| r.status == TransferStatus::Downloaded)
    }

    /// Results skipped because the file already existed.
    pub fn skipped(&self) -> impl Iterator<Item = &TransferResult> {
        self.results.iter().filter(|r| r.is_skipped())
    }

    /// Results that failed.
    pub fn failed(&self) -> impl Iterator<Item = &TransferResult> {
        self.results.iter().filter(|r| r.is_failed())
    }

    /// Number of failed artifacts.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    /// True when no artifact failed.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failure_count() == 0
    }

    /// Batch throughput in KiB/s over the wall-clock span.
    #[must_use]
    pub fn kib_per_sec(&self) -> f64 {
        kib_per_sec(self.total_bytes, self.elapsed)
    }
}

/// Throughput in KiB/s. Zero when no time elapsed.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Display only
pub fn kib_per_sec(bytes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return 0.0;
    }
    bytes as f64 / 1024.0 / secs
}

/// Whole KiB, rounded down.
#[must_use]
pub const fn format_kib(bytes: u64) -> u64 {
    bytes / 1024
}
