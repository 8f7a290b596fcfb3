//! # Recording Event Sink
//!
//! Event sink implementation for testing: records every published event
//! in order so tests can assert on the stream.

use crate::events::MarketEvent;
use crate::ports::outbound::EventSink;
use std::sync::RwLock;

/// Records emitted events in memory.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: RwLock<Vec<MarketEvent>>,
}

impl RecordingEventSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events published so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<MarketEvent> {
        self.events.read().unwrap().clone()
    }

    /// Count of events published so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().unwrap().len()
    }

    /// True if nothing was published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: MarketEvent) {
        self.events.write().unwrap().push(event);
    }
}

// =============================================================================
// TESTS
// =============================================================================
