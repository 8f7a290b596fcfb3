//! # Domain Entities
//!
//! The market item record and the ledger aggregate that owns every
//! record, the lifecycle counters and the fee configuration.
//!
//! All mutation goes through `MarketLedger` methods; no field is
//! writable from outside the crate. The ledger is append-only: a record
//! is never deleted, and its only lifecycle transition is
//! `sold: false -> true`, exactly once.

use crate::domain::value_objects::{Address, ItemId, TokenId, U256};
use serde::{Deserialize, Serialize};

// =============================================================================
// MARKET ITEM
// =============================================================================

/// One listing record.
///
/// `seller` and `price` are immutable after creation. `owner` is the
/// zero address while the asset sits in marketplace custody and becomes
/// the buyer's address on sale, together with the `sold` flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketItem {
    /// Dense, 1-based identifier, assigned once.
    pub item_id: ItemId,
    /// Asset registry holding the underlying token.
    pub nft_contract: Address,
    /// Token within that registry.
    pub token_id: TokenId,
    /// Identity that created the listing.
    pub seller: Address,
    /// Zero while escrowed; the buyer after sale.
    pub owner: Address,
    /// Asking price in wei, strictly positive.
    pub price: U256,
    /// True after the single successful sale.
    pub sold: bool,
}

impl MarketItem {
    /// Returns true if this record is still open for purchase.
    #[must_use]
    pub fn is_for_sale(&self) -> bool {
        !self.sold
    }
}

// =============================================================================
// MARKET LEDGER
// =============================================================================

/// The canonical set of listing records plus the global counters and
/// the fee configuration.
///
/// `items[i]` holds the record with id `i + 1`, so the ledger's size
/// always equals the highest assigned id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketLedger {
    items: Vec<MarketItem>,
    items_sold: u64,
    /// Privileged identity allowed to change the listing price.
    operator: Address,
    /// Identity under which the marketplace holds escrowed assets.
    marketplace: Address,
    /// Fee charged for creating a listing, in wei.
    listing_price: U256,
}

impl MarketLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new(operator: Address, marketplace: Address, listing_price: U256) -> Self {
        Self {
            items: Vec::new(),
            items_sold: 0,
            operator,
            marketplace,
            listing_price,
        }
    }

    /// Count of records ever created.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.len() as u64
    }

    /// Count of records sold.
    #[must_use]
    pub const fn items_sold(&self) -> u64 {
        self.items_sold
    }

    /// Current listing price in wei.
    #[must_use]
    pub const fn listing_price(&self) -> U256 {
        self.listing_price
    }

    /// The operator identity recorded at creation.
    #[must_use]
    pub const fn operator(&self) -> Address {
        self.operator
    }

    /// The marketplace custody identity.
    #[must_use]
    pub const fn marketplace(&self) -> Address {
        self.marketplace
    }

    /// Overwrites the listing price. Caller authorization is the
    /// service's responsibility; no fee history is retained.
    pub fn set_listing_price(&mut self, new_price: U256) {
        self.listing_price = new_price;
    }

    /// Returns true if `item_id` falls in the allocated range.
    #[must_use]
    pub fn contains(&self, item_id: ItemId) -> bool {
        item_id.value() >= 1 && item_id.value() <= self.total_items()
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, item_id: ItemId) -> Option<&MarketItem> {
        if self.contains(item_id) {
            self.items.get(item_id.value() as usize - 1)
        } else {
            None
        }
    }

    /// Appends a new unsold record and returns its id.
    ///
    /// The caller validates `price > 0` before appending.
    pub fn append_listing(
        &mut self,
        nft_contract: Address,
        token_id: TokenId,
        seller: Address,
        price: U256,
    ) -> ItemId {
        let item_id = ItemId::new(self.total_items() + 1);
        self.items.push(MarketItem {
            item_id,
            nft_contract,
            token_id,
            seller,
            owner: Address::ZERO,
            price,
            sold: false,
        });
        item_id
    }

    /// Marks a record sold and assigns the buyer as owner.
    ///
    /// The caller validates existence and `sold == false` before the
    /// transition; this method holds the record's single mutation.
    pub fn mark_sold(&mut self, item_id: ItemId, buyer: Address) {
        let idx = item_id.value() as usize - 1;
        let item = &mut self.items[idx];
        item.sold = true;
        item.owner = buyer;
        self.items_sold += 1;
    }

    /// Iterates all records in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &MarketItem> {
        self.items.iter()
    }

    /// All unsold records, ascending by id.
    ///
    /// Scans the full dense range; the primary ledger is the only
    /// index.
    #[must_use]
    pub fn unsold_items(&self) -> Vec<MarketItem> {
        self.items.iter().filter(|i| !i.sold).cloned().collect()
    }

    /// All records owned by `owner` (purchased), ascending by id.
    #[must_use]
    pub fn items_owned_by(&self, owner: Address) -> Vec<MarketItem> {
        self.items
            .iter()
            .filter(|i| i.owner == owner)
            .cloned()
            .collect()
    }

    /// Active listings created by `seller`, ascending by id. Sold
    /// records drop out of a seller's listed view.
    #[must_use]
    pub fn items_listed_by(&self, seller: Address) -> Vec<MarketItem> {
        self.items
            .iter()
            .filter(|i| i.seller == seller && !i.sold)
            .cloned()
            .collect()
    }

    /// Count of unsold records.
    #[must_use]
    pub fn unsold_count(&self) -> u64 {
        self.total_items() - self.items_sold
    }

    /// Count of records owned by `owner`.
    #[must_use]
    pub fn owned_count(&self, owner: Address) -> u64 {
        self.items.iter().filter(|i| i.owner == owner).count() as u64
    }

    /// Count of active listings created by `seller`.
    #[must_use]
    pub fn listed_count(&self, seller: Address) -> u64 {
        self.items
            .iter()
            .filter(|i| i.seller == seller && !i.sold)
            .count() as u64
    }
}

// =============================================================================
// TESTS
// =============================================================================
