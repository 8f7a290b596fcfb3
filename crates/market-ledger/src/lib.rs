//! # Market Ledger
//!
//! The NFT marketplace ledger: a registry that lets a seller list a
//! non-fungible token for sale, escrows it, and atomically exchanges it
//! for payment from a buyer while routing a fixed listing fee to the
//! marketplace operator.
//!
//! ## Architecture (Hexagonal)
//!
//! ```text
//!        host (serialized calls)
//!                │
//!        MarketplaceApi (inbound port)
//!                │
//!        MarketplaceService ──── MarketLedger (domain aggregate)
//!           │         │
//!   AssetRegistry  PaymentChannel / EventSink (outbound ports)
//!           │         │
//!      adapters (in-memory for tests, live bridges in production)
//! ```
//!
//! ## Ledger Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Dense Ids | Item ids are exactly `1..=total_items` |
//! | 2 | Positive Price | Every record has `price > 0` |
//! | 3 | Owner/Sold Consistency | `sold` iff `owner != ZERO` |
//! | 4 | Counter Bounds | `items_sold` equals the sold-record count |
//!
//! A record's only lifecycle transition is `sold: false -> true`,
//! exactly once. There is no delisting, no price update and no
//! relisting; the ledger is append-only.
//!
//! ## Usage
//!
//! ```ignore
//! use market_ledger::{
//!     InMemoryAssetRegistry, InMemoryPaymentChannel, MarketplaceApi,
//!     MarketplaceConfig, MarketplaceService, RecordingEventSink,
//! };
//!
//! let config = MarketplaceConfig::new(operator, marketplace);
//! let mut market = MarketplaceService::new(config, registry, payments, events);
//!
//! let item_id = market.create_market_item(nft, token, price, fee, seller)?;
//! market.create_market_sale(nft, item_id, price, buyer)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::{InMemoryAssetRegistry, InMemoryPaymentChannel, RecordingEventSink};
pub use domain::entities::{MarketItem, MarketLedger};
pub use domain::value_objects::{
    Address, ItemId, TokenId, U256, DEFAULT_LISTING_PRICE_WEI, WEI_PER_ETHER,
};
pub use errors::{MarketError, PaymentError, RegistryError};
pub use events::{MarketEvent, MarketItemCreatedPayload, MarketItemSoldPayload};
pub use ports::inbound::MarketplaceApi;
pub use ports::outbound::{AssetRegistry, EventSink, PaymentChannel};
pub use service::{MarketplaceConfig, MarketplaceService};
