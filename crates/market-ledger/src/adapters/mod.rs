//! # Adapters
//!
//! In-memory implementations of the outbound ports, used for
//! deterministic tests without a live registry or payment rail.

pub mod event_sink;
pub mod payments;
pub mod registry;

pub use event_sink::RecordingEventSink;
pub use payments::InMemoryPaymentChannel;
pub use registry::InMemoryAssetRegistry;
