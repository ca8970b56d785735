//! Factorio home resolution.
//!
//! The Factorio home holds `player-data.json` (portal credentials) and, by
//! default, `mods/mod-list.json`.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::{normalize_user_path, platform_factorio_home};

/// Environment variable overriding the Factorio home.
pub const FACTORIO_HOME_ENV: &str = "MODFETCH_FACTORIO_HOME";

/// How the Factorio home was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorioHomeSource {
    /// The user passed an explicit path.
    Explicit,
    /// The path came from `MODFETCH_FACTORIO_HOME` / `.env`.
    EnvVar,
    /// Platform default.
    Default,
}

/// Resolution result for the Factorio home.
#[derive(Debug, Clone)]
pub struct FactorioHomeResolution {
    /// The resolved path.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: FactorioHomeSource,
}

/// Return the platform default Factorio home.
pub fn default_factorio_home() -> Result<PathBuf, PathError> {
    platform_factorio_home().ok_or(PathError::NoFactorioHome)
}

/// Resolve the Factorio home from an explicit override, env var, or default.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `MODFETCH_FACTORIO_HOME` environment variable
/// 3. Platform default
pub fn resolve_factorio_home(explicit: Option<&str>) -> Result<FactorioHomeResolution, PathError> {
    if let Some(path_str) = explicit {
        return Ok(FactorioHomeResolution {
            path: normalize_user_path(path_str)?,
            source: FactorioHomeSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(FACTORIO_HOME_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(FactorioHomeResolution {
                path: normalize_user_path(&env_path)?,
                source: FactorioHomeSource::EnvVar,
            });
        }
    }

    Ok(FactorioHomeResolution {
        path: default_factorio_home()?,
        source: FactorioHomeSource::Default,
    })
}
