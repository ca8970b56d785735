//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Download the latest release of Factorio mods from the mod portal.
#[derive(Debug, Parser)]
#[command(name = "modfetch")]
#[command(about = "Download the latest release of Factorio mods")]
#[command(version)]
#[command(group(
    ArgGroup::new("names")
        .required(true)
        .args(["mod_list", "mods"])
))]
pub struct Cli {
    /// Factorio user directory holding `player-data.json`
    #[arg(long = "factorio-home", value_name = "PATH")]
    pub factorio_home: Option<String>,

    /// Directory the archives are written to (must exist)
    #[arg(long = "outdir", value_name = "PATH", default_value = ".")]
    pub outdir: PathBuf,

    /// Read enabled mods from a `mod-list.json`
    #[arg(long = "mod-list", value_name = "PATH")]
    pub mod_list: Option<PathBuf>,

    /// Comma-separated mod names
    #[arg(long = "mods", value_name = "NAMES")]
    pub mods: Option<String>,

    /// Number of concurrent transfers
    #[arg(
        short = 'j',
        long = "jobs",
        env = "MODFETCH_JOBS",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub jobs: Option<u16>,

    /// Mod portal base URL
    #[arg(long = "registry-url", env = "MODFETCH_REGISTRY_URL", value_name = "URL")]
    pub registry_url: Option<String>,

    /// Enable debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
