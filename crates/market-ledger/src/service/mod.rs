//! # Marketplace Service
//!
//! The single authority through which every mutation of the market
//! ledger flows: listing creation, sale execution and fee
//! administration, plus the read-only query surface.
//!
//! ## Execution model
//!
//! The host serializes all calls; an operation runs to completion with
//! no observable interleaving. Each mutating operation is
//! all-or-nothing: every validation precedes every transfer, the ledger
//! mutation is the final step, and a sub-call failure triggers explicit
//! compensation of any transfer already made in the same operation.


use crate::domain::entities::{MarketItem, MarketLedger};
use crate::domain::invariants;
use crate::domain::value_objects::{
    Address, ItemId, TokenId, U256, DEFAULT_LISTING_PRICE_WEI,
};
use crate::errors::MarketError;
use crate::events::{MarketEvent, MarketItemCreatedPayload, MarketItemSoldPayload};
use crate::ports::inbound::MarketplaceApi;
use crate::ports::outbound::{AssetRegistry, EventSink, PaymentChannel};
use tracing::{info, warn};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Marketplace deployment parameters.
#[derive(Debug, Clone)]
pub struct MarketplaceConfig {
    /// Privileged identity allowed to change the listing price; also
    /// receives the fee revenue.
    pub operator: Address,
    /// Identity under which the marketplace holds escrowed assets.
    pub marketplace: Address,
    /// Initial listing price in wei.
    pub listing_price: U256,
}

impl MarketplaceConfig {
    /// Config with the documented initial fee of 0.025 ether.
    #[must_use]
    pub fn new(operator: Address, marketplace: Address) -> Self {
        Self {
            operator,
            marketplace,
            listing_price: U256::from(DEFAULT_LISTING_PRICE_WEI),
        }
    }
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self::new(Address::ZERO, Address::ZERO)
    }
}

// =============================================================================
// SERVICE
// =============================================================================

/// The marketplace application service.
///
/// Generic over the outbound capabilities so production adapters and
/// the in-memory test adapters are interchangeable.
pub struct MarketplaceService<R, P, E> {
    ledger: MarketLedger,
    registry: R,
    payments: P,
    events: E,
}

impl<R, P, E> MarketplaceService<R, P, E>
where
    R: AssetRegistry,
    P: PaymentChannel,
    E: EventSink,
{
    /// Creates a marketplace with an empty ledger.
    pub fn new(config: MarketplaceConfig, registry: R, payments: P, events: E) -> Self {
        Self {
            ledger: MarketLedger::new(config.operator, config.marketplace, config.listing_price),
            registry,
            payments,
            events,
        }
    }

    /// Read access to the ledger aggregate.
    pub fn ledger(&self) -> &MarketLedger {
        &self.ledger
    }

    /// Read access to the asset registry adapter.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Read access to the payment channel adapter.
    pub fn payments(&self) -> &P {
        &self.payments
    }

    /// Read access to the event sink adapter.
    pub fn events(&self) -> &E {
        &self.events
    }

    /// Compensation: hand a deposit back to the payer.
    fn refund(&self, to: Address, amount: U256) {
        if let Err(err) = self.payments.pay_out(&[(to, amount)]) {
            warn!(%to, %amount, %err, "refund failed during compensation");
        }
    }

    /// Compensation: undo an asset transfer made earlier in the same
    /// operation.
    fn return_asset(&self, contract: Address, from: Address, to: Address, token_id: TokenId) {
        if let Err(err) = self.registry.transfer_from(contract, from, to, token_id) {
            warn!(%contract, %token_id, %err, "asset return failed during compensation");
        }
    }
}

impl<R, P, E> MarketplaceApi for MarketplaceService<R, P, E>
where
    R: AssetRegistry,
    P: PaymentChannel,
    E: EventSink,
{
    fn create_market_item(
        &mut self,
        nft_contract: Address,
        token_id: TokenId,
        price: U256,
        value: U256,
        caller: Address,
    ) -> Result<ItemId, MarketError> {
        // All validation before any transfer.
        if price.is_zero() {
            return Err(MarketError::InvalidPrice);
        }
        let fee = self.ledger.listing_price();
        if value != fee {
            return Err(MarketError::IncorrectListingPrice {
                expected: fee,
                actual: value,
            });
        }

        let marketplace = self.ledger.marketplace();
        let operator = self.ledger.operator();

        // Attach the fee payment.
        self.payments.deposit(caller, value)?;

        // Escrow the token under marketplace custody. The seller must
        // have approved the marketplace beforehand; the registry's own
        // failure propagates.
        if let Err(err) = self
            .registry
            .transfer_from(nft_contract, caller, marketplace, token_id)
        {
            self.refund(caller, value);
            return Err(err.into());
        }

        // Forward the fee to the operator.
        if let Err(err) = self.payments.pay_out(&[(operator, value)]) {
            self.return_asset(nft_contract, marketplace, caller, token_id);
            self.refund(caller, value);
            return Err(err.into());
        }

        // Record creation is the final step.
        let item_id = self
            .ledger
            .append_listing(nft_contract, token_id, caller, price);
        debug_assert!(invariants::check_all_invariants(&self.ledger));

        // The created event carries the record as stored: zero owner,
        // unsold.
        if let Some(item) = self.ledger.get(item_id) {
            self.events
                .emit(MarketEvent::ItemCreated(MarketItemCreatedPayload::from_item(item)));
        }

        info!(%item_id, %nft_contract, %token_id, seller = %caller, %price, "market item created");
        Ok(item_id)
    }

    fn create_market_sale(
        &mut self,
        nft_contract: Address,
        item_id: ItemId,
        value: U256,
        caller: Address,
    ) -> Result<(), MarketError> {
        // All validation before any transfer.
        let max = self.ledger.total_items();
        let item = self
            .ledger
            .get(item_id)
            .cloned()
            .ok_or(MarketError::InvalidItemId {
                item_id: item_id.value(),
                max,
            })?;
        if item.sold {
            return Err(MarketError::ItemNotForSale {
                item_id: item_id.value(),
            });
        }
        if value != item.price {
            return Err(MarketError::IncorrectPurchasePrice {
                expected: item.price,
                actual: value,
            });
        }

        let marketplace = self.ledger.marketplace();
        let operator = self.ledger.operator();
        let fee = self.ledger.listing_price();

        // Attach the purchase payment.
        self.payments.deposit(caller, value)?;

        // Release custody to the buyer.
        if let Err(err) =
            self.registry
                .transfer_from(nft_contract, marketplace, caller, item.token_id)
        {
            self.refund(caller, value);
            return Err(err.into());
        }

        // Pay the seller the full price and the operator the current
        // listing fee. The fee lands a second time here, on top of the
        // one already collected at listing.
        if let Err(err) = self
            .payments
            .pay_out(&[(item.seller, item.price), (operator, fee)])
        {
            self.return_asset(nft_contract, caller, marketplace, item.token_id);
            self.refund(caller, value);
            return Err(err.into());
        }

        // The record's single lifecycle transition, last.
        self.ledger.mark_sold(item_id, caller);
        debug_assert!(invariants::check_all_invariants(&self.ledger));

        self.events.emit(MarketEvent::ItemSold(MarketItemSoldPayload {
            item_id,
            nft_contract,
            token_id: item.token_id,
            seller: item.seller,
            buyer: caller,
            price: item.price,
        }));

        info!(%item_id, buyer = %caller, price = %item.price, "market item sold");
        Ok(())
    }

    fn update_listing_price(
        &mut self,
        new_price: U256,
        caller: Address,
    ) -> Result<(), MarketError> {
        if caller != self.ledger.operator() {
            warn!(%caller, "listing price update rejected: not the operator");
            return Err(MarketError::OnlyOwner);
        }
        self.ledger.set_listing_price(new_price);
        info!(%new_price, "listing price updated");
        Ok(())
    }

    fn listing_price(&self) -> U256 {
        self.ledger.listing_price()
    }

    fn operator(&self) -> Address {
        self.ledger.operator()
    }

    fn fetch_market_items(&self) -> Vec<MarketItem> {
        self.ledger.unsold_items()
    }

    fn fetch_my_nfts(&self, owner: Address) -> Vec<MarketItem> {
        self.ledger.items_owned_by(owner)
    }

    fn fetch_items_listed(&self, seller: Address) -> Vec<MarketItem> {
        self.ledger.items_listed_by(seller)
    }

    fn total_items_count(&self) -> u64 {
        self.ledger.total_items()
    }

    fn sold_items_count(&self) -> u64 {
        self.ledger.items_sold()
    }

    fn unsold_items_count(&self) -> u64 {
        self.ledger.unsold_count()
    }

    fn my_nfts_count(&self, owner: Address) -> u64 {
        self.ledger.owned_count(owner)
    }

    fn my_listed_items_count(&self, seller: Address) -> u64 {
        self.ledger.listed_count(seller)
    }
}
