//! CLI bootstrap - the composition root.
//!
//! Turns parsed arguments into a ready-to-run context: Factorio home,
//! credentials, mod names, registry client and orchestrator. Everything that
//! can fail before the batch fails here.

use std::path::PathBuf;
use std::sync::Arc;

use modfetch_core::{
    ArtifactName, Credentials, FactorioHomeResolution, FetchConfig, resolve_factorio_home,
};
use modfetch_download::FetchOrchestrator;
use modfetch_registry::{DefaultRegistryClient, RegistryClientConfig};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;
use crate::presentation::TracingEventEmitter;
use crate::sources::{load_credentials, parse_mod_names, read_mod_list};

/// Where the mod names come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    /// A Factorio `mod-list.json`.
    ModList(PathBuf),
    /// The raw `--mods` value.
    Inline(String),
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Explicit Factorio home, if given.
    pub factorio_home: Option<String>,
    /// Output directory.
    pub destination: PathBuf,
    /// Mod name source.
    pub names: NameSource,
    /// Pool size override.
    pub jobs: Option<usize>,
    /// Registry base URL override.
    pub registry_url: Option<String>,
}

impl CliConfig {
    /// Build the config from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Arguments` if neither name source is present.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let names = match (&cli.mod_list, &cli.mods) {
            (Some(path), None) => NameSource::ModList(path.clone()),
            (None, Some(raw)) => NameSource::Inline(raw.clone()),
            _ => {
                return Err(CliError::Arguments(
                    "exactly one of --mod-list or --mods is required".to_string(),
                ));
            }
        };

        Ok(Self {
            factorio_home: cli.factorio_home.clone(),
            destination: cli.outdir.clone(),
            names,
            jobs: cli.jobs.map(usize::from),
            registry_url: cli.registry_url.clone(),
        })
    }
}

/// Everything a fetch run needs.
pub struct CliContext {
    /// Batch runner wired to the real registry and a tracing emitter.
    pub orchestrator: FetchOrchestrator,
    /// Portal credentials.
    pub credentials: Credentials,
    /// Names to fetch, in input order.
    pub names: Vec<ArtifactName>,
    /// Output directory.
    pub destination: PathBuf,
    /// Where the credentials were read from.
    pub factorio_home: FactorioHomeResolution,
}

/// Bootstrap a fetch run.
///
/// # Errors
///
/// Fails with a configuration error if the Factorio home, credentials, mod
/// list or registry URL is unusable.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let factorio_home = resolve_factorio_home(config.factorio_home.as_deref())?;
    debug!(
        target: "modfetch.cli",
        path = %factorio_home.path.display(),
        source = ?factorio_home.source,
        "Resolved Factorio home"
    );

    let credentials = load_credentials(&factorio_home.path)?;

    let names = match &config.names {
        NameSource::ModList(path) => read_mod_list(path)?,
        NameSource::Inline(raw) => parse_mod_names(raw),
    };

    let registry_config = RegistryClientConfig::new().with_optional_base_url(config.registry_url);
    let registry = DefaultRegistryClient::new(&registry_config)?;

    let mut fetch_config = FetchConfig::new();
    if let Some(jobs) = config.jobs {
        fetch_config = fetch_config.with_max_concurrent(jobs);
    }

    let orchestrator = FetchOrchestrator::new(
        Arc::new(registry),
        Arc::new(TracingEventEmitter::new()),
        fetch_config,
    );

    Ok(CliContext {
        orchestrator,
        credentials,
        names,
        destination: config.destination,
        factorio_home,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn home_with_credentials() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("player-data.json"),
            r#"{"service-username": "u", "service-token": "t"}"#,
        )
        .unwrap();
        dir
    }

    fn config(home: &TempDir, names: NameSource) -> CliConfig {
        CliConfig {
            factorio_home: Some(home.path().to_string_lossy().into_owned()),
            destination: home.path().to_path_buf(),
            names,
            jobs: Some(3),
            registry_url: None,
        }
    }

    #[test]
    fn from_cli_maps_flags() {
        let cli = Cli::parse_from([
            "modfetch",
            "--mods",
            "a,b",
            "--jobs",
            "5",
            "--factorio-home",
            "/games/factorio",
            "--registry-url",
            "http://mirror",
        ]);
        let config = CliConfig::from_cli(&cli).unwrap();

        assert_eq!(config.names, NameSource::Inline("a,b".to_string()));
        assert_eq!(config.jobs, Some(5));
        assert_eq!(config.factorio_home.as_deref(), Some("/games/factorio"));
        assert_eq!(config.registry_url.as_deref(), Some("http://mirror"));
    }

    #[test]
    fn bootstrap_reads_credentials_and_names() {
        let home = home_with_credentials();
        let ctx = bootstrap(config(&home, NameSource::Inline("alpha, beta".to_string()))).unwrap();

        assert_eq!(ctx.credentials, Credentials::new("u", "t"));
        let names: Vec<&str> = ctx.names.iter().map(ArtifactName::as_str).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
        assert_eq!(ctx.factorio_home.path, home.path());
    }

    #[test]
    fn bootstrap_without_credentials_is_config_error() {
        let home = TempDir::new().unwrap();
        let err = bootstrap(config(&home, NameSource::Inline("alpha".to_string())))
            .err()
            .unwrap();
        assert!(matches!(err, CliError::Credentials(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn bootstrap_with_unreadable_mod_list_is_config_error() {
        let home = home_with_credentials();
        let missing = home.path().join("mod-list.json");
        let err = bootstrap(config(&home, NameSource::ModList(missing)))
            .err()
            .unwrap();
        assert!(matches!(err, CliError::ModList(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn bootstrap_with_bad_registry_url_is_config_error() {
        let home = home_with_credentials();
        let mut config = config(&home, NameSource::Inline("alpha".to_string()));
        config.registry_url = Some("not a url".to_string());

        let err = bootstrap(config).err().unwrap();
        assert!(matches!(err, CliError::Registry(_)));
        assert_eq!(err.exit_code(), 78);
    }
}
