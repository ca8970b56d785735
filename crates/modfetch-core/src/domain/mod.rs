//! Domain types shared by every modfetch component.
//!
//! These are plain value types with no I/O.

mod artifact;
mod credentials;

pub use artifact::{ArtifactName, ReleaseDescriptor};
pub use credentials::Credentials;
