#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

// Re-export core types for convenience
pub use modfetch_core::{
    ArtifactName, BatchError, BatchSummary, Credentials, FetchConfig, FetchError, FetchEvent,
    FetchEventEmitterPort, RegistryPort, ReleaseDescriptor, TransferResult, TransferStatus,
};

mod executor;
mod orchestrator;
pub(crate) mod progress;

pub use executor::{ArtifactDestination, TransferExecutor};
pub use orchestrator::FetchOrchestrator;
pub use progress::ProgressThrottle;

#[cfg(test)]
pub(crate) mod testing;

// Silence unused dev-dependency warnings for crates only used by integration tests
#[cfg(test)]
use modfetch_registry as _;
