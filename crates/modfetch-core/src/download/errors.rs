//! Fetch error types.
//!
//! `FetchError` is per-artifact: it fails one transfer and is recorded in the
//! batch summary. `BatchError` is raised before any transfer is dispatched.
//!
//! `FetchError` is serializable and does not hold `std::io::Error` or
//! `reqwest::Error` values. For those we capture the kind and message as
//! strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths::PathError;

/// Error for a single artifact's resolution or transfer.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchError {
    /// The registry has no artifact with this name.
    #[error("Artifact '{name}' not found in registry")]
    NotFound {
        /// The artifact name that was looked up.
        name: String,
    },

    /// Network or HTTP failure reaching the registry or download host.
    #[error("Registry unavailable: {message}")]
    RegistryUnavailable {
        /// Detailed error message. Never contains credentials.
        message: String,
        /// HTTP status code if a response was received.
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
    },

    /// The registry answered, but not with the expected shape.
    #[error("Malformed registry response: {message}")]
    MalformedResponse {
        /// Description of what was wrong.
        message: String,
    },

    /// The download response failed status or content-type validation.
    #[error(
        "Invalid download response: status {status}, content type {}",
        .content_type.as_deref().unwrap_or("<missing>")
    )]
    InvalidResponse {
        /// Observed HTTP status code.
        status: u16,
        /// Observed `Content-Type` header, if present.
        #[serde(skip_serializing_if = "Option::is_none")]
        content_type: Option<String>,
    },

    /// The destination could not be written.
    #[error("Filesystem error ({io_kind}): {message}")]
    Filesystem {
        /// The kind of I/O error (e.g., "`PermissionDenied`").
        io_kind: String,
        /// Detailed error message.
        message: String,
    },

    /// The transfer task ended without producing a result.
    #[error("Transfer task aborted: {message}")]
    TaskAborted {
        /// Detailed error message.
        message: String,
    },
}

impl FetchError {
    /// Create a not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a registry-unavailable error without a status code.
    pub fn registry_unavailable(message: impl Into<String>) -> Self {
        Self::RegistryUnavailable {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a registry-unavailable error with the HTTP status received.
    pub fn registry_unavailable_with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::RegistryUnavailable {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create an invalid download response error.
    pub fn invalid_response(status: u16, content_type: Option<String>) -> Self {
        Self::InvalidResponse {
            status,
            content_type,
        }
    }

    /// Create a filesystem error from kind and message strings.
    pub fn filesystem(io_kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Filesystem {
            io_kind: io_kind.into(),
            message: message.into(),
        }
    }

    /// Create a filesystem error from a `std::io::Error`.
    #[must_use]
    pub fn from_io_error(err: &std::io::Error) -> Self {
        let kind = err.kind();
        Self::Filesystem {
            io_kind: format!("{kind:?}"),
            message: err.to_string(),
        }
    }

    /// Create a task-aborted error.
    pub fn task_aborted(message: impl Into<String>) -> Self {
        Self::TaskAborted {
            message: message.into(),
        }
    }

    /// Short, stable label for the error category.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::RegistryUnavailable { .. } => "registry_unavailable",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::InvalidResponse { .. } => "invalid_response",
            Self::Filesystem { .. } => "filesystem",
            Self::TaskAborted { .. } => "task_aborted",
        }
    }
}

/// Error that prevents a batch from starting at all.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The destination directory is missing, not a directory, or not writable.
    #[error("Destination directory unusable: {0}")]
    Destination(#[from] PathError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_found_message_names_artifact() {
        let err = FetchError::not_found("ghost");
        assert!(err.to_string().contains("ghost"));
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn test_invalid_response_message_includes_status_and_type() {
        let err = FetchError::invalid_response(200, Some("text/html".to_string()));
        let msg = err.to_string();
        assert!(msg.contains("200"));
        assert!(msg.contains("text/html"));
    }

    #[test]
    fn test_invalid_response_without_content_type() {
        let err = FetchError::invalid_response(403, None);
        assert!(err.to_string().contains("<missing>"));
    }

    #[test]
    fn test_from_io_error_captures_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = FetchError::from_io_error(&io);
        match err {
            FetchError::Filesystem { io_kind, message } => {
                assert_eq!(io_kind, "PermissionDenied");
                assert!(message.contains("denied"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_registry_unavailable_with_status() {
        let err = FetchError::registry_unavailable_with_status("bad gateway", 502);
        assert!(matches!(
            err,
            FetchError::RegistryUnavailable {
                status_code: Some(502),
                ..
            }
        ));
        assert_eq!(err.kind(), "registry_unavailable");
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let err = FetchError::malformed("missing releases");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "malformed_response");
        assert_eq!(json["message"], "missing releases");
    }

    #[test]
    fn test_batch_error_wraps_path_error() {
        let err: BatchError = PathError::MissingDirectory(PathBuf::from("/nope")).into();
        assert!(err.to_string().contains("/nope"));
    }
}
