use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::{U64, U128};
use near_sdk::testing_env;

#[test]
fn get_listing_returns_none_for_unknown_token() {
    let contract = new_contract();
    assert!(contract.get_listing(nft_contract(), U64(99)).is_none());
}

#[test]
fn get_listings_paginates() {
    let mut contract = new_contract();
    for token_id in 1..=3 {
        seed_listing(&mut contract, token_id, PRICE * u128::from(token_id));
    }

    assert_eq!(contract.get_listing_count(), 3);
    assert_eq!(contract.get_listings(None, None).len(), 3);
    assert_eq!(contract.get_listings(None, Some(2)).len(), 2);

    let tail = contract.get_listings(Some(U128(2)), None);
    assert_eq!(tail.len(), 1);
}

#[test]
fn listings_by_seller_are_scoped_to_the_seller() {
    let mut contract = new_contract();
    seed_listing(&mut contract, 1, PRICE);
    seed_listing(&mut contract, 2, PRICE);

    // A third token listed by someone else entirely.
    let written = contract.apply_listing_verification(
        nft_contract(),
        3,
        APPROVAL_ID,
        PRICE,
        buyer(),
        true,
        Some(buyer()),
    );
    assert!(written);

    let sellers_own = contract.get_listings_by_seller(seller(), None, None);
    assert_eq!(sellers_own.len(), 2);
    assert!(sellers_own.iter().all(|listing| listing.seller_id == seller()));

    let buyers_own = contract.get_listings_by_seller(buyer(), None, None);
    assert_eq!(buyers_own.len(), 1);
    assert_eq!(buyers_own[0].token_id.0, 3);

    assert!(contract.get_listings_by_seller(owner(), None, None).is_empty());
}

#[test]
fn proceeds_default_to_zero() {
    let contract = new_contract();
    assert_eq!(contract.get_proceeds(seller()).0, 0);
}

#[test]
fn excess_payment_policy_defaults_to_refund() {
    let contract = new_contract();
    assert_eq!(
        contract.get_excess_payment_policy(),
        ExcessPaymentPolicy::Refund
    );
}

#[test]
fn owner_can_switch_excess_payment_policy() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());

    contract
        .set_excess_payment_policy(ExcessPaymentPolicy::Forfeit)
        .unwrap();

    assert_eq!(
        contract.get_excess_payment_policy(),
        ExcessPaymentPolicy::Forfeit
    );
}

#[test]
fn non_owner_cannot_switch_excess_payment_policy() {
    let mut contract = new_contract();
    testing_env!(context(seller()).build());

    let err = contract
        .set_excess_payment_policy(ExcessPaymentPolicy::Forfeit)
        .unwrap_err();

    assert!(matches!(err, MarketError::Unauthorized(_)));
    assert_eq!(
        contract.get_excess_payment_policy(),
        ExcessPaymentPolicy::Refund
    );
}

#[test]
fn get_owner_returns_constructor_owner() {
    let contract = new_contract();
    assert_eq!(contract.get_owner(), owner());
}
