//! # Driving Port (API - Inbound)
//!
//! The operations the marketplace exposes to its host. The host
//! serializes all calls: mutating operations take `&mut self`, and each
//! executes to completion with no interleaving.

use crate::domain::entities::MarketItem;
use crate::domain::value_objects::{Address, ItemId, TokenId, U256};
use crate::errors::MarketError;

/// Public surface of the marketplace ledger.
///
/// Caller identity is passed explicitly; the host authenticates. Query
/// operations never mutate and never fail: an identity with no activity
/// yields empty results and zero counts.
pub trait MarketplaceApi {
    /// Creates a listing: escrows the token, charges the listing fee,
    /// appends the record and returns its id.
    ///
    /// `value` is the payment attached to the call and must exactly
    /// equal the current listing price. The caller must have approved
    /// the marketplace as operator on the registry beforehand; the
    /// registry's own failure propagates if not.
    ///
    /// # Errors
    ///
    /// * `InvalidPrice` - `price` is zero
    /// * `IncorrectListingPrice` - `value` off by any nonzero amount
    /// * `Registry` / `Payment` - a sub-call failed; no state changed
    fn create_market_item(
        &mut self,
        nft_contract: Address,
        token_id: TokenId,
        price: U256,
        value: U256,
        caller: Address,
    ) -> Result<ItemId, MarketError>;

    /// Purchases an unsold listing: transfers the token to the caller,
    /// pays the seller the full price and the operator the current
    /// listing fee, then marks the record sold.
    ///
    /// # Errors
    ///
    /// * `InvalidItemId` - id outside `1..=total_items`
    /// * `ItemNotForSale` - record already sold
    /// * `IncorrectPurchasePrice` - `value` off by any nonzero amount
    /// * `Registry` / `Payment` - a sub-call failed; no state changed
    fn create_market_sale(
        &mut self,
        nft_contract: Address,
        item_id: ItemId,
        value: U256,
        caller: Address,
    ) -> Result<(), MarketError>;

    /// Overwrites the global listing price. Operator only.
    ///
    /// # Errors
    ///
    /// * `OnlyOwner` - caller is not the operator
    fn update_listing_price(&mut self, new_price: U256, caller: Address)
        -> Result<(), MarketError>;

    /// Current listing price in wei.
    fn listing_price(&self) -> U256;

    /// The operator identity recorded at construction.
    fn operator(&self) -> Address;

    /// All unsold records, ascending by id.
    fn fetch_market_items(&self) -> Vec<MarketItem>;

    /// Records purchased by `owner`, ascending by id.
    fn fetch_my_nfts(&self, owner: Address) -> Vec<MarketItem>;

    /// Active (unsold) listings created by `seller`, ascending by id.
    fn fetch_items_listed(&self, seller: Address) -> Vec<MarketItem>;

    /// Count of records ever created.
    fn total_items_count(&self) -> u64;

    /// Count of records sold.
    fn sold_items_count(&self) -> u64;

    /// Count of unsold records.
    fn unsold_items_count(&self) -> u64;

    /// Count of records purchased by `owner`.
    fn my_nfts_count(&self, owner: Address) -> u64;

    /// Count of active listings created by `seller`.
    fn my_listed_items_count(&self, seller: Address) -> u64;
}
