//! # In-Memory Asset Registry
//!
//! Deterministic registry implementation for testing. Production
//! implementations bridge to a live registry; this one keeps ownership
//! and operator approvals in process memory while enforcing the same
//! transfer rules.

use crate::domain::value_objects::{Address, TokenId};
use crate::errors::RegistryError;
use crate::ports::outbound::AssetRegistry;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

/// Mutable registry state behind the lock.
#[derive(Debug, Default)]
struct RegistryState {
    /// Token ownership per registry contract.
    owners: HashMap<(Address, TokenId), Address>,
    /// Next token id per registry contract (minting counter).
    next_token: HashMap<Address, u64>,
    /// `(contract, owner)` pairs that approved the marketplace.
    approvals: HashSet<(Address, Address)>,
}

/// In-memory multi-registry for testing.
///
/// Tokens are keyed by `(contract, token_id)`. Transfers executed on
/// the marketplace's authority require the source account to have
/// approved the marketplace as operator, unless the source is the
/// marketplace itself releasing custody.
///
/// State lives behind an [`RwLock`] so the registry can be driven
/// through a shared reference once a service owns it.
#[derive(Debug)]
pub struct InMemoryAssetRegistry {
    /// Identity whose authority this registry trusts for transfers.
    marketplace: Address,
    state: RwLock<RegistryState>,
}

impl InMemoryAssetRegistry {
    /// Creates an empty registry trusting `marketplace` as the acting
    /// operator on `transfer_from`.
    #[must_use]
    pub fn new(marketplace: Address) -> Self {
        Self {
            marketplace,
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Mints the next token of `contract` to `owner` and returns its id.
    pub fn mint(&self, contract: Address, owner: Address) -> TokenId {
        let mut state = self.state.write().unwrap();
        let counter = state.next_token.entry(contract).or_insert(0);
        *counter += 1;
        let token_id = TokenId::new(*counter);
        state.owners.insert((contract, token_id), owner);
        token_id
    }

    /// Grants or revokes the marketplace's operator approval for every
    /// token `owner` holds in `contract`.
    pub fn set_approval_for_all(&self, contract: Address, owner: Address, approved: bool) {
        let mut state = self.state.write().unwrap();
        if approved {
            state.approvals.insert((contract, owner));
        } else {
            state.approvals.remove(&(contract, owner));
        }
    }

    /// Count of tokens minted in `contract`.
    #[must_use]
    pub fn minted_count(&self, contract: Address) -> u64 {
        self.state
            .read()
            .unwrap()
            .next_token
            .get(&contract)
            .copied()
            .unwrap_or(0)
    }
}

impl AssetRegistry for InMemoryAssetRegistry {
    fn owner_of(&self, contract: Address, token_id: TokenId) -> Result<Address, RegistryError> {
        self.state
            .read()
            .unwrap()
            .owners
            .get(&(contract, token_id))
            .copied()
            .ok_or(RegistryError::UnknownToken { contract, token_id })
    }

    fn transfer_from(
        &self,
        contract: Address,
        from: Address,
        to: Address,
        token_id: TokenId,
    ) -> Result<(), RegistryError> {
        let mut state = self.state.write().unwrap();
        let owner = state
            .owners
            .get(&(contract, token_id))
            .copied()
            .ok_or(RegistryError::UnknownToken { contract, token_id })?;
        if owner != from {
            return Err(RegistryError::NotTokenOwner { from, token_id });
        }
        // Releasing marketplace custody needs no approval; anything
        // else does.
        if from != self.marketplace && !state.approvals.contains(&(contract, from)) {
            return Err(RegistryError::NotApproved {
                owner: from,
                operator: self.marketplace,
            });
        }
        state.owners.insert((contract, token_id), to);
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
