//! # Ports
//!
//! Hexagonal boundary of the crate: the inbound API trait the host
//! drives, and the outbound capability traits the marketplace consumes.

pub mod inbound;
pub mod outbound;
