use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::{U64, U128};
use near_sdk::testing_env;

// --- list_nft ---

#[test]
fn list_rejects_zero_price() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(seller(), 1).build());

    let err = contract
        .list_nft(nft_contract(), U64(1), APPROVAL_ID, U128(0))
        .err().unwrap();

    assert!(matches!(err, MarketError::InvalidInput(_)));
    assert!(err.to_string().contains("Price must be above 0"));
}

#[test]
fn list_requires_deposit() {
    let mut contract = new_contract();
    testing_env!(context(seller()).build());

    let err = contract
        .list_nft(nft_contract(), U64(1), APPROVAL_ID, U128(PRICE))
        .err().unwrap();

    assert!(matches!(err, MarketError::InsufficientDeposit(_)));
}

#[test]
fn list_rejects_already_listed() {
    let mut contract = new_contract();
    seed_listing(&mut contract, 1, PRICE);
    testing_env!(context_with_deposit(seller(), 1).build());

    let err = contract
        .list_nft(nft_contract(), U64(1), APPROVAL_ID, U128(PRICE))
        .err().unwrap();

    assert!(matches!(err, MarketError::InvalidState(_)));
    assert!(err.to_string().contains("Nft already listed"));
}

// --- list-time verification ---

#[test]
fn verification_success_writes_listing() {
    let mut contract = new_contract();

    let written = contract.apply_listing_verification(
        nft_contract(),
        1,
        APPROVAL_ID,
        PRICE,
        seller(),
        true,
        Some(seller()),
    );

    assert!(written);
    let listing = contract.get_listing(nft_contract(), U64(1)).unwrap();
    assert_eq!(listing.seller_id, seller());
    assert_eq!(listing.price.0, PRICE);
    assert_eq!(contract.get_listing_count(), 1);
}

#[test]
fn verification_without_approval_writes_nothing() {
    let mut contract = new_contract();

    let written = contract.apply_listing_verification(
        nft_contract(),
        1,
        APPROVAL_ID,
        PRICE,
        seller(),
        false,
        Some(seller()),
    );

    assert!(!written);
    assert!(contract.get_listing(nft_contract(), U64(1)).is_none());
}

#[test]
fn verification_with_missing_token_writes_nothing() {
    let mut contract = new_contract();

    let written = contract.apply_listing_verification(
        nft_contract(),
        1,
        APPROVAL_ID,
        PRICE,
        seller(),
        true,
        None,
    );

    assert!(!written);
    assert!(contract.get_listing(nft_contract(), U64(1)).is_none());
}

#[test]
fn verification_by_non_owner_writes_nothing() {
    let mut contract = new_contract();

    // The token belongs to buyer(), but seller() tried to list it.
    let written = contract.apply_listing_verification(
        nft_contract(),
        1,
        APPROVAL_ID,
        PRICE,
        seller(),
        true,
        Some(buyer()),
    );

    assert!(!written);
    assert!(contract.get_listing(nft_contract(), U64(1)).is_none());
}

#[test]
fn verification_keeps_existing_listing_on_duplicate() {
    let mut contract = new_contract();
    seed_listing(&mut contract, 1, PRICE);

    // A second verification for the same token landed after the first wrote.
    let written = contract.apply_listing_verification(
        nft_contract(),
        1,
        APPROVAL_ID + 1,
        PRICE * 2,
        seller(),
        true,
        Some(seller()),
    );

    assert!(!written);
    let listing = contract.get_listing(nft_contract(), U64(1)).unwrap();
    assert_eq!(listing.price.0, PRICE);
    assert_eq!(contract.get_listing_count(), 1);
}

// --- update_listing ---

#[test]
fn update_changes_price() {
    let mut contract = new_contract();
    seed_listing(&mut contract, 1, PRICE);
    testing_env!(context_with_deposit(seller(), 1).build());

    contract
        .update_listing(nft_contract(), U64(1), U128(PRICE * 2))
        .unwrap();

    let listing = contract.get_listing(nft_contract(), U64(1)).unwrap();
    assert_eq!(listing.price.0, PRICE * 2);
}

#[test]
fn update_rejects_unlisted_token() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(seller(), 1).build());

    let err = contract
        .update_listing(nft_contract(), U64(1), U128(PRICE))
        .unwrap_err();

    assert!(matches!(err, MarketError::NotFound(_)));
    assert!(err.to_string().contains("Nft not listed"));
}

#[test]
fn update_rejects_non_seller() {
    let mut contract = new_contract();
    seed_listing(&mut contract, 1, PRICE);
    testing_env!(context_with_deposit(buyer(), 1).build());

    let err = contract
        .update_listing(nft_contract(), U64(1), U128(PRICE * 2))
        .unwrap_err();

    assert!(matches!(err, MarketError::Unauthorized(_)));
    assert_eq!(
        contract.get_listing(nft_contract(), U64(1)).unwrap().price.0,
        PRICE
    );
}

#[test]
fn update_rejects_zero_price() {
    let mut contract = new_contract();
    seed_listing(&mut contract, 1, PRICE);
    testing_env!(context_with_deposit(seller(), 1).build());

    let err = contract
        .update_listing(nft_contract(), U64(1), U128(0))
        .unwrap_err();

    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn update_requires_one_yocto() {
    let mut contract = new_contract();
    seed_listing(&mut contract, 1, PRICE);
    testing_env!(context(seller()).build());

    let err = contract
        .update_listing(nft_contract(), U64(1), U128(PRICE * 2))
        .unwrap_err();

    assert!(matches!(err, MarketError::InsufficientDeposit(_)));
}

// --- cancel_listing ---

#[test]
fn cancel_removes_listing() {
    let mut contract = new_contract();
    seed_listing(&mut contract, 1, PRICE);
    testing_env!(context_with_deposit(seller(), 1).build());

    contract.cancel_listing(nft_contract(), U64(1)).unwrap();

    assert!(contract.get_listing(nft_contract(), U64(1)).is_none());
    assert_eq!(contract.get_listing_count(), 0);
    assert!(contract
        .get_listings_by_seller(seller(), None, None)
        .is_empty());
}

#[test]
fn cancel_rejects_unlisted_token() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(seller(), 1).build());

    let err = contract.cancel_listing(nft_contract(), U64(1)).unwrap_err();

    assert!(matches!(err, MarketError::NotFound(_)));
}

#[test]
fn cancel_rejects_non_seller() {
    let mut contract = new_contract();
    seed_listing(&mut contract, 1, PRICE);
    testing_env!(context_with_deposit(buyer(), 1).build());

    let err = contract.cancel_listing(nft_contract(), U64(1)).unwrap_err();

    assert!(matches!(err, MarketError::Unauthorized(_)));
    assert!(contract.get_listing(nft_contract(), U64(1)).is_some());
}

// --- listing ids ---

#[test]
fn listing_ids_are_distinct_per_contract_and_token() {
    let other_contract: AccountId = "isaac.near".parse().unwrap();

    let a = Contract::make_listing_id(&nft_contract(), 1);
    let b = Contract::make_listing_id(&nft_contract(), 2);
    let c = Contract::make_listing_id(&other_contract, 1);

    assert_eq!(a, "hamtaro.near:1");
    assert_ne!(a, b);
    assert_ne!(a, c);
}
