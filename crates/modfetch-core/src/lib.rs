#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod download;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{ArtifactName, Credentials, ReleaseDescriptor};
pub use download::{
    BatchError, BatchSummary, FetchError, FetchEvent, TransferResult, TransferStatus,
    format_kib, kib_per_sec,
};
pub use ports::{
    FetchConfig, FetchEventEmitterPort, NoopFetchEmitter, RegistryPort,
};

// Re-export path utilities
pub use paths::{
    FactorioHomeResolution, FactorioHomeSource, PathError, check_output_directory,
    default_factorio_home, normalize_user_path, resolve_factorio_home,
};

// Silence unused dev-dependency warnings for crates only used by some test modules
#[cfg(test)]
use serde_json as _;
