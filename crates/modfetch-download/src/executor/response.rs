//! Acceptance check for download responses.

use modfetch_core::FetchError;

/// The only media type accepted for a mod archive.
pub const ZIP_MEDIA_TYPE: &str = "application/zip";

/// Accept a response only if it is 2xx and carries a zip body.
///
/// Media type parameters (`; charset=...`) are ignored and the comparison is
/// case-insensitive.
pub fn validate_response(status: u16, content_type: Option<&str>) -> Result<(), FetchError> {
    let success = (200..300).contains(&status);
    let is_zip = content_type.is_some_and(is_zip_media_type);

    if success && is_zip {
        Ok(())
    } else {
        Err(FetchError::invalid_response(
            status,
            content_type.map(str::to_owned),
        ))
    }
}

fn is_zip_media_type(value: &str) -> bool {
    value
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(ZIP_MEDIA_TYPE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_zip() {
        assert!(validate_response(200, Some("application/zip")).is_ok());
    }

    #[test]
    fn ignores_parameters_and_case() {
        assert!(validate_response(200, Some("Application/ZIP; charset=binary")).is_ok());
        assert!(validate_response(206, Some(" application/zip ")).is_ok());
    }

    #[test]
    fn rejects_other_media_types() {
        let err = validate_response(200, Some("text/html; charset=utf-8")).unwrap_err();
        assert_eq!(
            err,
            FetchError::invalid_response(200, Some("text/html; charset=utf-8".to_string()))
        );
        assert!(validate_response(200, Some("application/zip-compressed")).is_err());
    }

    #[test]
    fn rejects_missing_content_type() {
        let err = validate_response(200, None).unwrap_err();
        assert_eq!(err, FetchError::invalid_response(200, None));
    }

    #[test]
    fn rejects_non_success_status_even_with_zip() {
        let err = validate_response(403, Some("application/zip")).unwrap_err();
        assert!(matches!(err, FetchError::InvalidResponse { status: 403, .. }));
        assert!(validate_response(302, Some("application/zip")).is_err());
    }
}
