//! Output directory checks.
//!
//! A batch may only start once its destination directory exists and
//! accepts writes. Missing directories are reported, never created.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::error::PathError;

const WRITE_CHECK_FILE: &str = ".modfetch_write_test";

/// Check that `path` is an existing, writable directory.
///
/// Blocking: async callers should run it on the blocking pool.
pub fn check_output_directory(path: &Path) -> Result<(), PathError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => verify_writable(path),
        Ok(_) => Err(PathError::NotADirectory(path.to_path_buf())),
        Err(_) => Err(PathError::MissingDirectory(path.to_path_buf())),
    }
}

fn verify_writable(path: &Path) -> Result<(), PathError> {
    let check_file = path.join(WRITE_CHECK_FILE);
    let read_only = |source| PathError::ReadOnly {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&check_file)
        .map_err(read_only)?;
    file.write_all(b"ok").map_err(read_only)?;
    drop(file);
    let _ = fs::remove_file(&check_file);
    Ok(())
}
