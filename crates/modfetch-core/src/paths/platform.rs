//! Platform-specific path helpers.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::Blank);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::HomeUnknown)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|source| PathError::Unanchored {
                path: trimmed.to_string(),
                source,
            })
    }
}

/// Platform default location of the Factorio user data directory.
#[cfg(target_os = "macos")]
pub(super) fn platform_factorio_home() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("Library/Application Support/factorio"))
}

/// Platform default location of the Factorio user data directory.
#[cfg(target_os = "windows")]
pub(super) fn platform_factorio_home() -> Option<PathBuf> {
    dirs::config_dir().map(|appdata| appdata.join("Factorio"))
}

/// Platform default location of the Factorio user data directory.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub(super) fn platform_factorio_home() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".factorio"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(normalize_user_path("   "), Err(PathError::Blank)));
    }

    #[test]
    fn absolute_path_is_kept() {
        let abs = env::temp_dir();
        let normalized = normalize_user_path(abs.to_str().unwrap()).unwrap();
        assert_eq!(normalized, abs);
    }

    #[test]
    fn relative_path_is_made_absolute() {
        let normalized = normalize_user_path("mods").unwrap();
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("mods"));
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(normalize_user_path("~").unwrap(), home);
            assert_eq!(normalize_user_path("~/factorio").unwrap(), home.join("factorio"));
        }
    }
}
