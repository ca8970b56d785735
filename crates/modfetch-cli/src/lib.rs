#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary target
use anyhow as _;
use dotenvy as _;
use tokio as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;
pub mod sources;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, NameSource, bootstrap};
pub use error::CliError;
pub use parser::Cli;
