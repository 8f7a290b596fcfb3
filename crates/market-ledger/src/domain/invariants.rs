//! # Domain Invariants
//!
//! Structural invariants that MUST hold on the ledger after every
//! mutation. The service debug-asserts them at each exit point of a
//! mutating operation; tests call them directly.
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Dense Ids | Item ids are exactly `1..=total_items`, in order |
//! | 2 | Positive Price | Every record has `price > 0` |
//! | 3 | Owner/Sold Consistency | `sold` iff `owner != ZERO` |
//! | 4 | Counter Bounds | `items_sold` equals the sold-record count |

use crate::domain::entities::MarketLedger;
use crate::domain::value_objects::{Address, U256};

/// INVARIANT-1: Dense Ids
///
/// Ids are assigned sequentially starting at 1 and never reused; the
/// ledger's size equals the highest assigned id.
#[must_use]
pub fn check_dense_ids(ledger: &MarketLedger) -> bool {
    ledger
        .iter()
        .enumerate()
        .all(|(idx, item)| item.item_id.value() == idx as u64 + 1)
}

/// INVARIANT-2: Positive Price
///
/// Enforced at creation; no later mutation touches the price.
#[must_use]
pub fn check_positive_prices(ledger: &MarketLedger) -> bool {
    ledger.iter().all(|item| item.price > U256::zero())
}

/// INVARIANT-3: Owner/Sold Consistency
///
/// A sold record names its buyer; an unsold record is in custody and
/// carries the zero owner.
#[must_use]
pub fn check_owner_sold_consistency(ledger: &MarketLedger) -> bool {
    ledger.iter().all(|item| {
        if item.sold {
            item.owner != Address::ZERO
        } else {
            item.owner == Address::ZERO
        }
    })
}

/// INVARIANT-4: Counter Bounds
///
/// `0 <= items_sold <= total_items`, and the counter equals the number
/// of records carrying the sold flag.
#[must_use]
pub fn check_counters(ledger: &MarketLedger) -> bool {
    let sold = ledger.iter().filter(|item| item.sold).count() as u64;
    ledger.items_sold() == sold && sold <= ledger.total_items()
}

/// Check all invariants at once.
#[must_use]
pub fn check_all_invariants(ledger: &MarketLedger) -> bool {
    check_dense_ids(ledger)
        && check_positive_prices(ledger)
        && check_owner_sold_consistency(ledger)
        && check_counters(ledger)
}

// =============================================================================
// TESTS
// =============================================================================
