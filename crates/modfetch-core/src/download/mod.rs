//! Download domain: per-artifact results, batch summaries, events and errors.

mod errors;
mod events;
mod types;

pub use errors::{BatchError, FetchError};
pub use events::FetchEvent;
pub use types::{BatchSummary, TransferResult, TransferStatus, format_kib, kib_per_sec};
