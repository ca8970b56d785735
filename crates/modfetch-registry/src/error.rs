//! Internal error types for registry operations.
//!
//! These errors are mapped to `FetchError` at the port boundary.

use thiserror::Error;

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors related to mod portal API operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// API request failed with an HTTP error status.
    #[error("Mod portal request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The requested artifact does not exist on the portal.
    #[error("Mod '{name}' not found on the mod portal")]
    ModNotFound {
        /// The artifact name that was not found
        name: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from mod portal: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = RegistryError::ApiRequestFailed {
            status: 503,
            url: "https://mods.factorio.com/api/mods/alpha".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("mods.factorio.com"));
    }

    #[test]
    fn test_mod_not_found_error_message() {
        let error = RegistryError::ModNotFound {
            name: "ghost".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("ghost"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_invalid_response_error_message() {
        let error = RegistryError::InvalidResponse {
            message: "release list is empty".to_string(),
        };
        assert!(error.to_string().contains("release list is empty"));
    }
}
