//! Artifact identity and release metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a remote artifact (a mod) as known to the registry.
///
/// Opaque: no normalization is applied, so two names are the same artifact
/// only if they are byte-for-byte equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactName(String);

impl ArtifactName {
    /// Create a new artifact name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtifactName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ArtifactName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for ArtifactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The release of an artifact selected for download.
///
/// Produced by a [`RegistryPort`](crate::ports::RegistryPort) lookup and never
/// cached across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDescriptor {
    /// Artifact this release belongs to.
    pub name: ArtifactName,
    /// Version string exactly as the registry reports it.
    pub version: String,
    /// Download path relative to the registry host (e.g. `/download/foo/5a5f`).
    pub download_path: String,
}

impl ReleaseDescriptor {
    /// Create a descriptor for `name`.
    pub fn new(
        name: ArtifactName,
        version: impl Into<String>,
        download_path: impl Into<String>,
    ) -> Self {
        Self {
            name,
            version: version.into(),
            download_path: download_path.into(),
        }
    }
}
