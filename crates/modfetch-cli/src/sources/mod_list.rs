//! Mod names from `mod-list.json` or a comma-separated flag.

use std::path::{Path, PathBuf};

use modfetch_core::ArtifactName;
use serde::Deserialize;
use thiserror::Error;

/// The built-in mod shipped with the game. Never downloadable.
const BUILTIN_MOD: &str = "base";

#[derive(Debug, Error)]
pub enum ModListError {
    #[error("Cannot read mod list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse mod list {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct ModList {
    mods: Vec<ModEntry>,
}

#[derive(Deserialize)]
struct ModEntry {
    name: String,
    enabled: bool,
}

/// Enabled mods of a `mod-list.json`, in file order, without `base`.
pub fn read_mod_list(path: &Path) -> Result<Vec<ArtifactName>, ModListError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ModListError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let list: ModList = serde_json::from_str(&raw).map_err(|source| ModListError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(list
        .mods
        .into_iter()
        .filter(|m| m.enabled && m.name != BUILTIN_MOD)
        .map(|m| ArtifactName::new(m.name))
        .collect())
}

/// Split `a, b,,c` into `["a", "b", "c"]`.
pub fn parse_mod_names(raw: &str) -> Vec<ArtifactName> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ArtifactName::from)
        .collect()
}
