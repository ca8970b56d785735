//! Fetch event emitter port.
//!
//! The orchestrator reports progress through this sink instead of writing to
//! a process-wide logger, so each batch decides where its output goes.

use crate::download::FetchEvent;

/// Port for emitting fetch events.
///
/// Called from many concurrent transfer tasks. Implementations must not
/// block and must not affect control flow.
pub trait FetchEventEmitterPort: Send + Sync {
    /// Emit a fetch event.
    fn emit(&self, event: FetchEvent);
}

/// A no-op emitter for tests and library callers that do not need progress.
#[derive(Debug, Clone, Default)]
pub struct NoopFetchEmitter;

impl NoopFetchEmitter {
    /// Create a new no-op emitter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FetchEventEmitterPort for NoopFetchEmitter {
    fn emit(&self, _event: FetchEvent) {}
}
