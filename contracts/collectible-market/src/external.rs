#![allow(dead_code)]

use near_sdk::json_types::{U64, U128};
use near_sdk::{AccountId, ext_contract, near};

/// Minimal mirror of the collectible contract's token view; only the fields
/// the marketplace verifies are deserialized.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct Token {
    pub token_id: U64,
    pub owner_id: AccountId,
}

#[ext_contract(ext_nft)]
pub trait ExtNftContract {
    fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: U64,
        approval_id: Option<u64>,
        memo: Option<String>,
    );

    fn nft_is_approved(
        &self,
        token_id: U64,
        approved_account_id: AccountId,
        approval_id: Option<u64>,
    ) -> bool;

    fn nft_token(&self, token_id: U64) -> Option<Token>;
}

#[ext_contract(ext_self)]
pub trait SelfCallback {
    fn process_listing(
        &mut self,
        nft_contract_id: AccountId,
        token_id: U64,
        approval_id: u64,
        price: U128,
        seller_id: AccountId,
    );

    fn resolve_purchase(
        &mut self,
        buyer_id: AccountId,
        seller_id: AccountId,
        nft_contract_id: AccountId,
        token_id: U64,
        approval_id: u64,
        price: U128,
        deposit: U128,
    ) -> U128;

    fn on_proceeds_withdrawn(&mut self, seller_id: AccountId, amount: U128);
}
