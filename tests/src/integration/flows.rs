//! Lifecycle flows: listing, sale and the query surface across several
//! sellers and buyers.

use super::*;
use market_ledger::{AssetRegistry, MarketError, MarketEvent};

// =============================================================================
// DEPLOYMENT
// =============================================================================

#[test]
fn test_fresh_deployment_defaults() {
    let market = deploy();

    // 0.025 ether initial fee.
    assert_eq!(fee(&market) * 40u64, ether(1));
    assert_eq!(market.operator(), OPERATOR);
    assert_eq!(market.total_items_count(), 0);
    assert_eq!(market.sold_items_count(), 0);
    assert!(market.fetch_market_items().is_empty());
    assert!(market.events().is_empty());
}

// =============================================================================
// FULL LIFECYCLE
// =============================================================================

#[test]
fn test_list_then_sell_then_query() {
    let mut market = deploy();
    let (token_id, item_id) = list_for(&mut market, SELLER, ether(2));

    // While listed: escrowed, visible on the open market, owned by
    // nobody yet.
    assert_eq!(
        market.registry().owner_of(NFT, token_id).unwrap(),
        MARKETPLACE
    );
    assert_eq!(market.fetch_market_items().len(), 1);
    assert_eq!(market.fetch_items_listed(SELLER).len(), 1);
    assert!(market.fetch_my_nfts(BUYER).is_empty());

    market
        .create_market_sale(NFT, item_id, ether(2), BUYER)
        .unwrap();

    // After the sale: custody with the buyer, off the open market, off
    // the seller's active listings.
    assert_eq!(market.registry().owner_of(NFT, token_id).unwrap(), BUYER);
    assert!(market.fetch_market_items().is_empty());
    assert!(market.fetch_items_listed(SELLER).is_empty());

    let owned = market.fetch_my_nfts(BUYER);
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].item_id, item_id);
    assert_eq!(owned[0].seller, SELLER);
    assert_eq!(owned[0].owner, BUYER);
    assert!(owned[0].sold);

    // One created and one sold event, in order.
    let events = market.events().events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], MarketEvent::ItemCreated(_)));
    assert!(matches!(events[1], MarketEvent::ItemSold(_)));
}

#[test]
fn test_second_of_three_items_sold() {
    let mut market = deploy();
    for price in [ether(1), ether(2), ether(3)] {
        list_for(&mut market, SELLER, price);
    }
    market
        .create_market_sale(NFT, ItemId::new(2), ether(2), BUYER)
        .unwrap();

    // The open market skips the sold item but keeps ascending order.
    let unsold = market.fetch_market_items();
    assert_eq!(unsold.len(), 2);
    assert_eq!(unsold[0].item_id, ItemId::new(1));
    assert_eq!(unsold[1].item_id, ItemId::new(3));

    assert_eq!(market.total_items_count(), 3);
    assert_eq!(market.sold_items_count(), 1);
    assert_eq!(market.unsold_items_count(), 2);
}

#[test]
fn test_multiple_sellers_and_buyers() {
    let mut market = deploy();
    let (_, item_a) = list_for(&mut market, SELLER, ether(1));
    let (_, item_b) = list_for(&mut market, SELLER_2, ether(2));
    let (_, item_c) = list_for(&mut market, SELLER, ether(3));

    market
        .create_market_sale(NFT, item_a, ether(1), BUYER)
        .unwrap();
    market
        .create_market_sale(NFT, item_b, ether(2), BUYER_2)
        .unwrap();

    // Per-seller listings only cover that seller's unsold records.
    let seller_listed = market.fetch_items_listed(SELLER);
    assert_eq!(seller_listed.len(), 1);
    assert_eq!(seller_listed[0].item_id, item_c);
    assert!(market.fetch_items_listed(SELLER_2).is_empty());

    // Per-buyer holdings are disjoint.
    assert_eq!(market.my_nfts_count(BUYER), 1);
    assert_eq!(market.my_nfts_count(BUYER_2), 1);
    assert_eq!(market.fetch_my_nfts(BUYER)[0].item_id, item_a);
    assert_eq!(market.fetch_my_nfts(BUYER_2)[0].item_id, item_b);

    assert_eq!(market.my_listed_items_count(SELLER), 1);
    assert_eq!(market.my_listed_items_count(SELLER_2), 0);
}

#[test]
fn test_identity_with_no_activity_sees_nothing() {
    let mut market = deploy();
    list_for(&mut market, SELLER, ether(1));

    assert!(market.fetch_my_nfts(BUYER_2).is_empty());
    assert!(market.fetch_items_listed(BUYER_2).is_empty());
    assert_eq!(market.my_nfts_count(BUYER_2), 0);
    assert_eq!(market.my_listed_items_count(BUYER_2), 0);
}

// =============================================================================
// EXACTLY-ONCE SALE
// =============================================================================

#[test]
fn test_item_cannot_be_sold_twice() {
    let mut market = deploy();
    let (token_id, item_id) = list_for(&mut market, SELLER, ether(1));
    market
        .create_market_sale(NFT, item_id, ether(1), BUYER)
        .unwrap();

    let err = market
        .create_market_sale(NFT, item_id, ether(1), BUYER_2)
        .unwrap_err();
    assert_eq!(
        err,
        MarketError::ItemNotForSale {
            item_id: item_id.value(),
        }
    );

    // First buyer keeps the token; second buyer paid nothing.
    assert_eq!(market.registry().owner_of(NFT, token_id).unwrap(), BUYER);
    assert_eq!(market.payments().balance_of(BUYER_2), ether(100));
    assert_eq!(market.sold_items_count(), 1);
}

// =============================================================================
// LEDGER SHAPE
// =============================================================================

#[test]
fn test_unsold_and_owned_partition_the_ledger() {
    let mut market = deploy();
    let mut items = Vec::new();
    for price in [ether(1), ether(2), ether(3), ether(4), ether(5)] {
        let (_, item_id) = list_for(&mut market, SELLER, price);
        items.push(item_id);
    }
    market
        .create_market_sale(NFT, items[1], ether(2), BUYER)
        .unwrap();
    market
        .create_market_sale(NFT, items[4], ether(5), BUYER)
        .unwrap();

    // Every id appears exactly once, either unsold or in a buyer's
    // holdings, and each query returns ascending ids.
    let mut seen: Vec<u64> = market
        .fetch_market_items()
        .iter()
        .chain(market.fetch_my_nfts(BUYER).iter())
        .map(|item| item.item_id.value())
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);

    let unsold: Vec<u64> = market
        .fetch_market_items()
        .iter()
        .map(|item| item.item_id.value())
        .collect();
    assert_eq!(unsold, vec![1, 3, 4]);

    assert_eq!(
        market.unsold_items_count() + market.sold_items_count(),
        market.total_items_count()
    );
}
