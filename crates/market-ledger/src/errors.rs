//! # Error Types
//!
//! The marketplace failure taxonomy. Every validation failure aborts
//! the whole operation before any state mutation or transfer; all
//! failures surface directly to the caller and there is no internal
//! retry.

use crate::domain::value_objects::{Address, TokenId, U256};
use thiserror::Error;

// =============================================================================
// MARKET ERRORS
// =============================================================================

/// Errors returned by marketplace operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketError {
    /// Listing price not strictly positive.
    #[error("listing price must be strictly positive")]
    InvalidPrice,

    /// Attached payment at listing time does not equal the current fee.
    #[error("attached value {actual} does not equal the listing price {expected}")]
    IncorrectListingPrice { expected: U256, actual: U256 },

    /// Referenced item id outside the allocated range.
    #[error("invalid item id {item_id} (max: {max})")]
    InvalidItemId { item_id: u64, max: u64 },

    /// Referenced item already sold.
    #[error("item {item_id} is not for sale")]
    ItemNotForSale { item_id: u64 },

    /// Attached payment at sale time does not equal the asking price.
    #[error("attached value {actual} does not equal the asking price {expected}")]
    IncorrectPurchasePrice { expected: U256, actual: U256 },

    /// Caller lacks operator privilege for an admin operation.
    #[error("caller is not the marketplace operator")]
    OnlyOwner,

    /// Asset registry sub-call failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Payment channel sub-call failed.
    #[error("payment error: {0}")]
    Payment(#[from] PaymentError),
}

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Errors from asset registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Token does not exist in the registry.
    #[error("unknown token {token_id} in registry {contract}")]
    UnknownToken { contract: Address, token_id: TokenId },

    /// Transfer source does not own the token.
    #[error("{from} does not own token {token_id}")]
    NotTokenOwner { from: Address, token_id: TokenId },

    /// Token owner has not approved the marketplace as operator.
    #[error("{owner} has not approved operator {operator}")]
    NotApproved { owner: Address, operator: Address },
}

// =============================================================================
// PAYMENT ERRORS
// =============================================================================

/// Errors from payment channel operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Payer cannot cover the attached value.
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: U256, available: U256 },
}

// =============================================================================
// TESTS
// =============================================================================
