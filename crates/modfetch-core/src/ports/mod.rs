//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` types in any signature
//! - Errors crossing a port are `FetchError`
//! - Sinks are injected, never reached through globals

pub mod event_emitter;
pub mod fetch;
pub mod registry;

pub use event_emitter::{FetchEventEmitterPort, NoopFetchEmitter};
pub use fetch::FetchConfig;
pub use registry::RegistryPort;
