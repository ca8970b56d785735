//! Destination planning for archives.

use std::path::{Path, PathBuf};

use modfetch_core::{FetchError, ReleaseDescriptor};

/// Where one release will be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDestination {
    /// Directory the archive lives in.
    pub dir: PathBuf,
    /// `{name}_{version}.zip`
    pub file_name: String,
    /// `dir` joined with `file_name`.
    pub path: PathBuf,
}

impl ArtifactDestination {
    /// Plan the destination of `release` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::MalformedResponse` if the name or version would
    /// make the file land outside `dir`.
    pub fn plan(dir: &Path, release: &ReleaseDescriptor) -> Result<Self, FetchError> {
        let file_name = archive_file_name(release.name.as_str(), &release.version);

        if !is_plain_file_name(&file_name) {
            return Err(FetchError::malformed(format!(
                "release {} {} does not map to a plain file name",
                release.name, release.version
            )));
        }

        Ok(Self {
            dir: dir.to_path_buf(),
            path: dir.join(&file_name),
            file_name,
        })
    }
}

/// Archive naming contract: `{name}_{version}.zip`.
pub fn archive_file_name(name: &str, version: &str) -> String {
    format!("{name}_{version}.zip")
}

fn is_plain_file_name(file_name: &str) -> bool {
    !file_name.contains(['/', '\\', '\0']) && file_name != ".." && !file_name.starts_with("..")
}
