//! Telemetry utilities for dispatch timing and span construction.

use std::time::Instant;

/// Guard for timing a dispatch.
///
/// Emits the elapsed time at `trace` level when dropped. Create it after
/// entering the dispatch span so the event inherits the span's key.
pub struct DispatchTimer {
    start: Instant,
}

impl DispatchTimer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for DispatchTimer {
    fn drop(&mut self) {
        let micros = self.start.elapsed().as_micros() as u64;
        tracing::trace!(elapsed_us = micros, "dispatch finished");
    }
}

/// Standardized span constructors.
pub mod spans {
    use slashroute_proto::InteractionKind;
    use tracing::{Span, debug_span};

    /// Span for one dispatch call.
    pub fn dispatch(kind: InteractionKind, key: &str) -> Span {
        debug_span!("interaction.dispatch", kind = %kind, key = %key)
    }

    /// Span for one registration batch.
    pub fn register(table: &'static str, batch: usize) -> Span {
        debug_span!("router.register", table = table, batch = batch)
    }
}
