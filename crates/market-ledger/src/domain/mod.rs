//! # Domain Layer
//!
//! Pure ledger logic: entities, value objects and invariant checks.
//! Nothing in this module talks to an asset registry or a payment
//! channel; those live behind the outbound ports.

pub mod entities;
pub mod invariants;
pub mod value_objects;
