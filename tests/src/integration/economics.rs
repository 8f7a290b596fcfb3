//! Balance accounting across listings, sales, fee updates and failed
//! operations.

use super::*;
use market_ledger::{AssetRegistry, MarketError, PaymentError, RegistryError, U256};

// =============================================================================
// FEE FLOW
// =============================================================================

#[test]
fn test_listing_moves_exactly_one_fee() {
    let mut market = deploy();
    let charged = fee(&market);
    list_for(&mut market, SELLER, ether(5));

    assert_eq!(market.payments().balance_of(SELLER), ether(100) - charged);
    assert_eq!(market.payments().balance_of(OPERATOR), charged);
    // The listed price itself moves no funds.
    assert_eq!(market.payments().balance_of(BUYER), ether(100));
}

#[test]
fn test_sale_settles_price_and_fee() {
    let mut market = deploy();
    let charged = fee(&market);
    let (_, item_id) = list_for(&mut market, SELLER, ether(5));

    market
        .create_market_sale(NFT, item_id, ether(5), BUYER)
        .unwrap();

    // Buyer pays the price, seller receives it in full, and the
    // operator collects the fee once at listing and once at settlement.
    assert_eq!(market.payments().balance_of(BUYER), ether(95));
    assert_eq!(
        market.payments().balance_of(SELLER),
        ether(100) - charged + ether(5)
    );
    assert_eq!(market.payments().balance_of(OPERATOR), charged * 2u64);
}

#[test]
fn test_fee_update_is_charged_at_settlement_rate() {
    let mut market = deploy();
    let original = fee(&market);
    let (_, item_id) = list_for(&mut market, SELLER, ether(3));

    // Fee doubles between listing and sale; the settlement payout uses
    // the fee in force at settlement time.
    let raised = original * 2u64;
    market.update_listing_price(raised, OPERATOR).unwrap();
    market
        .create_market_sale(NFT, item_id, ether(3), BUYER)
        .unwrap();

    assert_eq!(
        market.payments().balance_of(OPERATOR),
        original + raised
    );
}

#[test]
fn test_new_listings_charge_the_updated_fee() {
    let mut market = deploy();
    let raised = ether(1) / 10u64;
    market.update_listing_price(raised, OPERATOR).unwrap();

    let token_id = mint_approved(&market, SELLER);
    let err = market
        .create_market_item(NFT, token_id, ether(1), ether(1) / 40u64, SELLER)
        .unwrap_err();
    assert_eq!(
        err,
        MarketError::IncorrectListingPrice {
            expected: raised,
            actual: ether(1) / 40u64,
        }
    );

    market
        .create_market_item(NFT, token_id, ether(1), raised, SELLER)
        .unwrap();
    assert_eq!(market.payments().balance_of(OPERATOR), raised);
}

// =============================================================================
// FAILED OPERATIONS LEAVE BALANCES UNTOUCHED
// =============================================================================

#[test]
fn test_rejected_listing_moves_no_funds() {
    let mut market = deploy();
    let token_id = mint_approved(&market, SELLER);

    // Zero price, rejected before any transfer.
    let err = market
        .create_market_item(NFT, token_id, U256::zero(), fee(&market), SELLER)
        .unwrap_err();
    assert_eq!(err, MarketError::InvalidPrice);

    // Missing approval, deposit refunded after the escrow attempt.
    market.registry().set_approval_for_all(NFT, SELLER, false);
    let err = market
        .create_market_item(NFT, token_id, ether(1), fee(&market), SELLER)
        .unwrap_err();
    assert!(matches!(
        err,
        MarketError::Registry(RegistryError::NotApproved { .. })
    ));

    assert_eq!(market.payments().balance_of(SELLER), ether(100));
    assert_eq!(market.payments().balance_of(OPERATOR), U256::zero());
    assert_eq!(market.total_items_count(), 0);
}

#[test]
fn test_failed_sale_refunds_the_buyer() {
    let mut market = deploy();
    let (token_id, item_id) = list_for(&mut market, SELLER, ether(2));
    let operator_before = market.payments().balance_of(OPERATOR);

    // Wrong registry contract: the custody transfer fails and the
    // deposit comes back.
    let unknown = Address::new([0xDD; 20]);
    let err = market
        .create_market_sale(unknown, item_id, ether(2), BUYER)
        .unwrap_err();
    assert!(matches!(
        err,
        MarketError::Registry(RegistryError::UnknownToken { .. })
    ));

    assert_eq!(market.payments().balance_of(BUYER), ether(100));
    assert_eq!(market.payments().balance_of(OPERATOR), operator_before);
    assert_eq!(
        market.registry().owner_of(NFT, token_id).unwrap(),
        MARKETPLACE
    );
    assert!(market.ledger().get(item_id).unwrap().is_for_sale());
}

#[test]
fn test_underfunded_buyer_cannot_settle() {
    let mut market = deploy();
    let (_, item_id) = list_for(&mut market, SELLER, ether(2));

    let pauper = Address::new([0x33; 20]);
    let err = market
        .create_market_sale(NFT, item_id, ether(2), pauper)
        .unwrap_err();
    assert!(matches!(
        err,
        MarketError::Payment(PaymentError::InsufficientFunds { .. })
    ));
    assert_eq!(market.sold_items_count(), 0);
}

// =============================================================================
// AGGREGATE ACCOUNTING
// =============================================================================

#[test]
fn test_payouts_exceed_deposits_by_one_fee_per_sale() {
    let mut market = deploy();
    let charged = fee(&market);
    let initial_total = ether(400); // four funded identities

    for (seller, buyer, price) in [
        (SELLER, BUYER, ether(1)),
        (SELLER_2, BUYER_2, ether(2)),
        (SELLER, BUYER_2, ether(3)),
    ] {
        let (_, item_id) = list_for(&mut market, seller, price);
        market
            .create_market_sale(NFT, item_id, price, buyer)
            .unwrap();
    }

    // A listing is a wash (fee out of the seller, fee to the operator);
    // each settlement pays the operator a fee the channel never
    // collected, because the marketplace's own account is not modeled.
    let total = [SELLER, SELLER_2, BUYER, BUYER_2, OPERATOR]
        .iter()
        .fold(U256::zero(), |acc, who| {
            acc + market.payments().balance_of(*who)
        });
    assert_eq!(total, initial_total + charged * 3u64);
}
