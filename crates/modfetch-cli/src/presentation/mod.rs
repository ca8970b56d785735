//! Human-readable output.
//!
//! Format-only: nothing here decides what succeeded or failed.

pub mod events;
pub mod summary;

pub use events::TracingEventEmitter;
pub use summary::{rate_line, render_summary};
