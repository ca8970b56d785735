#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultRegistryClient is meant to be used through RegistryPort, not its
// internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultRegistryClient;

// Configuration
pub use config::RegistryClientConfig;

// Errors surfaced by client construction
pub use error::RegistryError;
