//! Temporary file that becomes the archive only on success.

use std::io;
use std::path::Path;

use modfetch_core::FetchError;
use tempfile::TempPath;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

/// Size of the write buffer between the network stream and the disk.
pub const WRITE_BUFFER_SIZE: usize = 16 * 1024;

/// Requested mode for archives before the umask is applied.
#[cfg(unix)]
const ARCHIVE_MODE: u32 = 0o666;

/// How a commit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The archive was renamed into place.
    Committed {
        /// Bytes in the archive.
        bytes: u64,
    },
    /// Another writer created the destination first; staged bytes were discarded.
    AlreadyPresent,
}

/// A `.part` file in the destination directory.
///
/// Dropping it without [`commit`](Self::commit) deletes the file.
pub struct StagingFile {
    // Declared before `path` so the handle closes before the file is removed.
    writer: BufWriter<File>,
    path: TempPath,
    bytes_written: u64,
}

impl StagingFile {
    /// Create a hidden staging file inside `dir`.
    ///
    /// On unix the file gets the same mode a plain create would give it
    /// (`0o666` minus the umask), so the committed archive is readable by
    /// other users the way a directly written file is.
    pub fn create_in(dir: &Path) -> Result<Self, FetchError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(".modfetch-").suffix(".part");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(ARCHIVE_MODE));
        }
        let temp = builder
            .tempfile_in(dir)
            .map_err(|e| FetchError::from_io_error(&e))?;
        let (file, path) = temp.into_parts();

        Ok(Self {
            writer: BufWriter::with_capacity(WRITE_BUFFER_SIZE, File::from_std(file)),
            path,
            bytes_written: 0,
        })
    }

    /// Append a chunk.
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), FetchError> {
        self.writer
            .write_all(chunk)
            .await
            .map_err(|e| FetchError::from_io_error(&e))?;
        self.bytes_written += chunk.len() as u64;
        Ok(())
    }

    /// Bytes appended so far.
    pub const fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush, sync and rename onto `destination` without replacing an
    /// existing file.
    pub async fn commit(self, destination: &Path) -> Result<CommitOutcome, FetchError> {
        let Self {
            mut writer,
            path,
            bytes_written,
        } = self;

        flush_and_sync(&mut writer)
            .await
            .map_err(|e| FetchError::from_io_error(&e))?;
        drop(writer);

        match path.persist_noclobber(destination) {
            Ok(()) => Ok(CommitOutcome::Committed {
                bytes: bytes_written,
            }),
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                Ok(CommitOutcome::AlreadyPresent)
            }
            Err(e) => Err(FetchError::from_io_error(&e.error)),
        }
    }
}

async fn flush_and_sync(writer: &mut BufWriter<File>) -> io::Result<()> {
    writer.flush().await?;
    writer.get_mut().sync_all().await
}
