//! # Driven Ports (SPI - Outbound)
//!
//! Capabilities the marketplace depends on. Adapters implement these
//! traits; dependencies point inward. All calls are synchronous
//! sub-calls within the host's single mutation stream; nothing here
//! suspends or blocks on I/O. Methods take `&self`: adapters
//! synchronize internally.

use crate::domain::value_objects::{Address, TokenId, U256};
use crate::errors::{PaymentError, RegistryError};
use crate::events::MarketEvent;

// =============================================================================
// ASSET REGISTRY
// =============================================================================

/// Ownership and authorized-transfer capability of an external asset
/// registry. One implementation may serve several registry contracts,
/// keyed by contract address.
///
/// Production: a bridge to the live registry.
/// Testing: `InMemoryAssetRegistry` (adapters).
pub trait AssetRegistry {
    /// Current owner of a token.
    ///
    /// # Errors
    ///
    /// * `UnknownToken` - token does not exist in that registry
    fn owner_of(&self, contract: Address, token_id: TokenId) -> Result<Address, RegistryError>;

    /// Transfers a token between identities on the marketplace's
    /// authority. The registry enforces its own approval rules: moving
    /// a token out of a third-party account requires that account to
    /// have approved the marketplace as operator.
    ///
    /// # Errors
    ///
    /// * `UnknownToken` - token does not exist
    /// * `NotTokenOwner` - `from` does not own the token
    /// * `NotApproved` - `from` has not approved the marketplace
    fn transfer_from(
        &self,
        contract: Address,
        from: Address,
        to: Address,
        token_id: TokenId,
    ) -> Result<(), RegistryError>;
}

// =============================================================================
// PAYMENT CHANNEL
// =============================================================================

/// Native value transfer accompanying marketplace calls.
///
/// The marketplace compares attached amounts exactly against required
/// fees and prices; the channel only moves value.
pub trait PaymentChannel {
    /// Attaches `amount` to the current call: moves it from the payer
    /// into marketplace custody.
    ///
    /// # Errors
    ///
    /// * `InsufficientFunds` - payer cannot cover `amount`
    fn deposit(&self, from: Address, amount: U256) -> Result<(), PaymentError>;

    /// Pays out of marketplace custody, all-or-nothing: either every
    /// payment lands or none does.
    ///
    /// # Errors
    ///
    /// Implementation-defined; a failure means no payment was applied.
    fn pay_out(&self, payments: &[(Address, U256)]) -> Result<(), PaymentError>;
}

// =============================================================================
// EVENT SINK
// =============================================================================

/// Fire-and-forget publication of marketplace events for off-chain
/// consumers.
pub trait EventSink {
    /// Publishes one event.
    fn emit(&self, event: MarketEvent);
}
