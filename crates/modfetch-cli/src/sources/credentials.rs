//! Portal credentials from `player-data.json`.

use std::path::{Path, PathBuf};

use modfetch_core::Credentials;
use serde::Deserialize;
use thiserror::Error;

/// File name of the player data inside the Factorio home.
pub const PLAYER_DATA_FILE: &str = "player-data.json";

/// Why credentials could not be loaded. Never carries the token.
#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} has no '{field}'; log in to the mod portal from the game first")]
    MissingField { path: PathBuf, field: &'static str },
}

#[derive(Deserialize)]
struct PlayerData {
    #[serde(rename = "service-username", default)]
    username: Option<String>,
    #[serde(rename = "service-token", default)]
    token: Option<String>,
}

/// Load the service username and token from `{factorio_home}/player-data.json`.
pub fn load_credentials(factorio_home: &Path) -> Result<Credentials, CredentialsError> {
    let path = factorio_home.join(PLAYER_DATA_FILE);
    let raw = std::fs::read_to_string(&path).map_err(|source| CredentialsError::Read {
        path: path.clone(),
        source,
    })?;
    let data: PlayerData = serde_json::from_str(&raw).map_err(|source| CredentialsError::Parse {
        path: path.clone(),
        source,
    })?;

    let username = non_empty(data.username).ok_or_else(|| CredentialsError::MissingField {
        path: path.clone(),
        field: "service-username",
    })?;
    let token = non_empty(data.token).ok_or(CredentialsError::MissingField {
        path,
        field: "service-token",
    })?;

    Ok(Credentials::new(username, token))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
