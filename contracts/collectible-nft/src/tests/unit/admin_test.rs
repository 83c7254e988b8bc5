use crate::tests::test_utils::*;
use crate::*;
use collectible_rarity::RarityTier;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- constructor ---

#[test]
fn constructor_initializes_collection() {
    let contract = new_contract();

    assert_eq!(contract.get_token_counter().0, 0);
    assert_eq!(contract.get_mint_fee(), U128(MINT_FEE));
    assert_eq!(contract.nft_metadata().name, "Hamtaro");
    assert_eq!(contract.nft_metadata().symbol, "HAM");
    assert!(contract.get_tier_uri(0, 0).unwrap().starts_with("ipfs://"));
    assert_eq!(contract.get_oracle(), oracle());
    assert_eq!(
        contract.get_excess_payment_policy(),
        ExcessPaymentPolicy::Refund
    );
}

#[test]
fn three_tier_collection_is_configuration_not_code() {
    // The Isaac collection: same contract, different constructor data.
    testing_env!(context(owner()).build());
    let tier = |name: &str, low, high| RarityTier {
        name: name.into(),
        range_low: low,
        range_high: high,
    };
    let contract = Contract::new(
        owner(),
        oracle(),
        CollectionMetadata {
            spec: "nft-2.0.0".into(),
            name: "Isaac".into(),
            symbol: "ISC".into(),
            icon: None,
            base_uri: None,
            reference: None,
        },
        U128(MINT_FEE),
        vec![
            tier("Legendary", 0, 5),
            tier("Rare", 5, 40),
            tier("Common", 40, 100),
        ],
        vec![
            vec!["ipfs://isaac-legendary".into()],
            vec!["ipfs://isaac-rare-0".into(), "ipfs://isaac-rare-1".into()],
            vec!["ipfs://isaac-common".into()],
        ],
        Some(ExcessPaymentPolicy::Keep),
    );

    assert_eq!(contract.get_rarity_tiers().len(), 3);
    assert_eq!(contract.resolve_rarity(U128(150)).tier_name, "Common");
    assert_eq!(
        contract.get_excess_payment_policy(),
        ExcessPaymentPolicy::Keep
    );
}

#[test]
#[should_panic(expected = "Invalid rarity table")]
fn constructor_rejects_non_partition_table() {
    testing_env!(context(owner()).build());
    let tiers = vec![RarityTier {
        name: "Common".into(),
        range_low: 0,
        range_high: 90,
    }];
    Contract::new(
        owner(),
        oracle(),
        collection_metadata(),
        U128(MINT_FEE),
        tiers,
        vec![vec!["ipfs://x".into()]],
        None,
    );
}

#[test]
#[should_panic(expected = "one URI pool per tier")]
fn constructor_rejects_pool_count_mismatch() {
    testing_env!(context(owner()).build());
    Contract::new(
        owner(),
        oracle(),
        collection_metadata(),
        U128(MINT_FEE),
        five_tiers(),
        vec![vec!["ipfs://x".into()]],
        None,
    );
}

#[test]
#[should_panic(expected = "URI pool for tier 2 is empty")]
fn constructor_rejects_empty_pool() {
    testing_env!(context(owner()).build());
    let mut pools = five_pools();
    pools[2].clear();
    Contract::new(
        owner(),
        oracle(),
        collection_metadata(),
        U128(MINT_FEE),
        five_tiers(),
        pools,
        None,
    );
}

// --- admin setters ---

#[test]
fn owner_updates_mint_fee() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());

    contract.set_mint_fee(U128(MINT_FEE * 2)).unwrap();
    assert_eq!(contract.get_mint_fee(), U128(MINT_FEE * 2));
}

#[test]
fn non_owner_cannot_update_mint_fee() {
    let mut contract = new_contract();
    testing_env!(context(minter()).build());

    let err = contract.set_mint_fee(U128(1)).unwrap_err();
    assert!(matches!(err, CollectibleError::Unauthorized(_)));
    assert_eq!(contract.get_mint_fee(), U128(MINT_FEE));
}

#[test]
fn owner_rotates_oracle() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let new_oracle: near_sdk::AccountId = "vrf.near".parse().unwrap();

    contract.set_oracle(new_oracle.clone()).unwrap();
    assert_eq!(contract.get_oracle(), new_oracle);
}

#[test]
fn owner_switches_excess_policy() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());

    contract
        .set_excess_payment_policy(ExcessPaymentPolicy::Keep)
        .unwrap();
    assert_eq!(
        contract.get_excess_payment_policy(),
        ExcessPaymentPolicy::Keep
    );
}
