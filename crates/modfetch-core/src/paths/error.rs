//! Errors from locating the Factorio home and checking output directories.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    /// `~` was used but the user's home directory is unknown.
    #[error("Cannot expand '~': home directory is unknown")]
    HomeUnknown,

    #[error("Cannot determine the Factorio home directory for this platform")]
    NoFactorioHome,

    /// The output path exists but is a file or something else.
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    /// Output directories are never created on the user's behalf.
    #[error("Output directory {0} does not exist")]
    MissingDirectory(PathBuf),

    #[error("Cannot write into {path}: {source}")]
    ReadOnly {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path flag or variable was set to an empty string.
    #[error("Path argument is blank")]
    Blank,

    /// A relative path could not be anchored to the working directory.
    #[error("Cannot resolve relative path '{path}': {source}")]
    Unanchored {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The directory check was cancelled or panicked before answering.
    #[error("Directory check did not complete: {0}")]
    CheckInterrupted(String),
}
