//! # Event Schema
//!
//! Payloads published on every successful mutation, for consumption by
//! off-chain indexers and front-ends. The ledger itself never reads
//! them back.
//!
//! | Event | Emitted by |
//! |-------|------------|
//! | `MarketItemCreated` | listing creation |
//! | `MarketItemSold` | sale completion |

use crate::domain::entities::MarketItem;
use crate::domain::value_objects::{Address, ItemId, TokenId, U256};
use serde::{Deserialize, Serialize};

// =============================================================================
// EVENT PAYLOADS
// =============================================================================

/// A new listing was created and the asset escrowed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketItemCreatedPayload {
    /// Id assigned to the new record.
    pub item_id: ItemId,
    /// Registry holding the escrowed token.
    pub nft_contract: Address,
    /// Token within that registry.
    pub token_id: TokenId,
    /// Identity that created the listing.
    pub seller: Address,
    /// Always the zero address at creation (asset in custody).
    pub owner: Address,
    /// Asking price in wei.
    pub price: U256,
    /// Always false at creation.
    pub sold: bool,
}

impl MarketItemCreatedPayload {
    /// Builds the payload from a freshly appended record.
    #[must_use]
    pub fn from_item(item: &MarketItem) -> Self {
        Self {
            item_id: item.item_id,
            nft_contract: item.nft_contract,
            token_id: item.token_id,
            seller: item.seller,
            owner: item.owner,
            price: item.price,
            sold: item.sold,
        }
    }
}

/// An existing listing was purchased.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketItemSoldPayload {
    /// Id of the sold record.
    pub item_id: ItemId,
    /// Registry holding the token.
    pub nft_contract: Address,
    /// Token within that registry.
    pub token_id: TokenId,
    /// Identity that created the listing.
    pub seller: Address,
    /// Identity that purchased the item.
    pub buyer: Address,
    /// Price paid, in wei.
    pub price: U256,
}

/// Tagged marketplace event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketEvent {
    /// A listing was created.
    ItemCreated(MarketItemCreatedPayload),
    /// A listing was sold.
    ItemSold(MarketItemSoldPayload),
}

// =============================================================================
// EVENT TOPICS
// =============================================================================

/// Topic names for event stream consumers.
pub mod topics {
    /// Topic for listing-created events.
    pub const ITEM_CREATED: &str = "marketplace.item.created";

    /// Topic for sale-completed events.
    pub const ITEM_SOLD: &str = "marketplace.item.sold";
}

impl MarketEvent {
    /// Topic this event is published on.
    #[must_use]
    pub const fn topic(&self) -> &'static str {
        match self {
            Self::ItemCreated(_) => topics::ITEM_CREATED,
            Self::ItemSold(_) => topics::ITEM_SOLD,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
