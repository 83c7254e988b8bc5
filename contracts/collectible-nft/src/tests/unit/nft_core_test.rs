use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U64;
use near_sdk::testing_env;

fn contract_with_token() -> (Contract, u64) {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let token_id = mint_token(&mut contract, minter(), 101);
    (contract, token_id)
}

// --- nft_transfer ---

#[test]
fn owner_transfers_token() {
    let (mut contract, token_id) = contract_with_token();
    testing_env!(context_with_deposit(minter(), 1).build());

    contract
        .nft_transfer(other(), U64(token_id), None, None)
        .unwrap();

    assert_eq!(contract.nft_token(U64(token_id)).unwrap().owner_id, other());
    assert_eq!(contract.nft_supply_for_owner(minter()), U64(0));
    assert_eq!(contract.nft_supply_for_owner(other()), U64(1));
}

#[test]
fn transfer_requires_one_yocto() {
    let (mut contract, token_id) = contract_with_token();
    testing_env!(context(minter()).build());

    let err = contract
        .nft_transfer(other(), U64(token_id), None, None)
        .unwrap_err();
    assert!(matches!(err, CollectibleError::InsufficientDeposit(_)));
}

#[test]
fn non_owner_cannot_transfer() {
    let (mut contract, token_id) = contract_with_token();
    testing_env!(context_with_deposit(other(), 1).build());

    let err = contract
        .nft_transfer(other(), U64(token_id), None, None)
        .unwrap_err();

    assert!(matches!(err, CollectibleError::Unauthorized(_)));
    assert_eq!(contract.nft_token(U64(token_id)).unwrap().owner_id, minter());
}

#[test]
fn transfer_of_missing_token_fails() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(minter(), 1).build());

    let err = contract.nft_transfer(other(), U64(9), None, None).unwrap_err();
    assert!(matches!(err, CollectibleError::NotFound(_)));
}

// --- approvals ---

#[test]
fn approved_account_transfers_with_matching_id() {
    let (mut contract, token_id) = contract_with_token();
    testing_env!(context_with_deposit(minter(), 1).build());
    let approval_id = contract.nft_approve(U64(token_id), other()).unwrap();
    assert!(contract.nft_is_approved(U64(token_id), other(), Some(approval_id)));

    testing_env!(context_with_deposit(other(), 1).build());
    contract
        .nft_transfer(other(), U64(token_id), Some(approval_id), None)
        .unwrap();

    assert_eq!(contract.nft_token(U64(token_id)).unwrap().owner_id, other());
}

#[test]
fn stale_approval_id_is_rejected() {
    let (mut contract, token_id) = contract_with_token();
    testing_env!(context_with_deposit(minter(), 1).build());
    let approval_id = contract.nft_approve(U64(token_id), other()).unwrap();

    testing_env!(context_with_deposit(other(), 1).build());
    let err = contract
        .nft_transfer(other(), U64(token_id), Some(approval_id + 1), None)
        .unwrap_err();
    assert!(matches!(err, CollectibleError::Unauthorized(_)));
}

#[test]
fn only_owner_can_approve() {
    let (mut contract, token_id) = contract_with_token();
    testing_env!(context_with_deposit(other(), 1).build());

    let err = contract.nft_approve(U64(token_id), other()).unwrap_err();
    assert!(matches!(err, CollectibleError::Unauthorized(_)));
}

#[test]
fn revoke_removes_approval() {
    let (mut contract, token_id) = contract_with_token();
    testing_env!(context_with_deposit(minter(), 1).build());
    contract.nft_approve(U64(token_id), other()).unwrap();
    contract.nft_revoke(U64(token_id), other()).unwrap();

    assert!(!contract.nft_is_approved(U64(token_id), other(), None));
}

#[test]
fn transfer_clears_approvals() {
    let (mut contract, token_id) = contract_with_token();
    testing_env!(context_with_deposit(minter(), 1).build());
    contract.nft_approve(U64(token_id), other()).unwrap();

    contract
        .nft_transfer(other(), U64(token_id), None, None)
        .unwrap();

    assert!(!contract.nft_is_approved(U64(token_id), minter(), None));
    assert!(
        contract
            .nft_token(U64(token_id))
            .unwrap()
            .approved_account_ids
            .is_empty()
    );
}

#[test]
fn approval_ids_increase_across_tokens() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    let first = mint_token(&mut contract, minter(), 101);
    testing_env!(context(owner()).build());
    let second = mint_token(&mut contract, minter(), 162);

    testing_env!(context_with_deposit(minter(), 1).build());
    let a = contract.nft_approve(U64(first), other()).unwrap();
    let b = contract.nft_approve(U64(second), other()).unwrap();
    assert!(b > a);
}
