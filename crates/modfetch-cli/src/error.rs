//! CLI error types and exit code mapping.

use modfetch_core::{BatchError, PathError};
use modfetch_registry::RegistryError;
use thiserror::Error;

use crate::sources::{CredentialsError, ModListError};

/// Everything that stops a run before or instead of producing a summary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument validation beyond what clap checks.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Output directory missing, not a directory or not writable.
    #[error("{0}")]
    Destination(#[from] BatchError),

    /// Factorio home could not be determined.
    #[error("Configuration error: {0}")]
    FactorioHome(#[from] PathError),

    /// Credentials could not be loaded.
    #[error("Credentials unavailable: {0}")]
    Credentials(#[from] CredentialsError),

    /// Mod list could not be loaded.
    #[error("{0}")]
    ModList(#[from] ModListError),

    /// Registry client could not be configured.
    #[error("Registry configuration error: {0}")]
    Registry(#[from] RegistryError),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Codes follow sysexits.h where one fits:
    /// - 2: invalid arguments (same as clap usage errors)
    /// - 74: `EX_IOERR`
    /// - 78: `EX_CONFIG`
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,
            Self::Destination(_) => 74,
            Self::FactorioHome(_) | Self::Credentials(_) | Self::ModList(_) | Self::Registry(_) => {
                78
            }
        }
    }
}
