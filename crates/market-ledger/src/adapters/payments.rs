//! # In-Memory Payment Channel
//!
//! Deterministic payment channel for testing. Tracks per-identity
//! balances in wei. The marketplace's own account is not modeled: a
//! deposit debits the payer and a payout credits the recipients, so the
//! channel never vetoes an outflow the host would guarantee.

use crate::domain::value_objects::{Address, U256};
use crate::errors::PaymentError;
use crate::ports::outbound::PaymentChannel;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory balances for testing.
///
/// Balances live behind an [`RwLock`] so the channel can be driven
/// through a shared reference once a service owns it.
#[derive(Debug, Default)]
pub struct InMemoryPaymentChannel {
    balances: RwLock<HashMap<Address, U256>>,
}

impl InMemoryPaymentChannel {
    /// Creates an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an identity's balance (test setup).
    pub fn set_balance(&self, who: Address, amount: U256) {
        self.balances.write().unwrap().insert(who, amount);
    }

    /// Current balance of an identity.
    #[must_use]
    pub fn balance_of(&self, who: Address) -> U256 {
        self.balances
            .read()
            .unwrap()
            .get(&who)
            .copied()
            .unwrap_or_else(U256::zero)
    }
}

impl PaymentChannel for InMemoryPaymentChannel {
    fn deposit(&self, from: Address, amount: U256) -> Result<(), PaymentError> {
        let mut balances = self.balances.write().unwrap();
        let available = balances.get(&from).copied().unwrap_or_else(U256::zero);
        if available < amount {
            return Err(PaymentError::InsufficientFunds {
                required: amount,
                available,
            });
        }
        balances.insert(from, available - amount);
        Ok(())
    }

    fn pay_out(&self, payments: &[(Address, U256)]) -> Result<(), PaymentError> {
        // Credits cannot fail here, so the batch is trivially atomic.
        let mut balances = self.balances.write().unwrap();
        for &(to, amount) in payments {
            let current = balances.get(&to).copied().unwrap_or_else(U256::zero);
            balances.insert(to, current + amount);
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
