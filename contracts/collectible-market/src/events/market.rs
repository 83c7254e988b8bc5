use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::MARKET;
use super::builder::EventBuilder;

/// Emitted on both list and update; the listing-changed signal.
pub fn emit_list(
    seller_id: &AccountId,
    nft_contract_id: &AccountId,
    token_id: u64,
    price: U128,
) {
    EventBuilder::new(MARKET, "list", seller_id)
        .field("seller_id", seller_id)
        .field("nft_contract_id", nft_contract_id)
        .field("token_id", token_id)
        .field("price", price)
        .emit();
}

pub fn emit_cancel(seller_id: &AccountId, nft_contract_id: &AccountId, token_id: u64) {
    EventBuilder::new(MARKET, "cancel", seller_id)
        .field("seller_id", seller_id)
        .field("nft_contract_id", nft_contract_id)
        .field("token_id", token_id)
        .emit();
}

pub fn emit_purchase(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    nft_contract_id: &AccountId,
    token_id: u64,
    price: U128,
) {
    EventBuilder::new(MARKET, "purchase", buyer_id)
        .field("buyer_id", buyer_id)
        .field("seller_id", seller_id)
        .field("nft_contract_id", nft_contract_id)
        .field("token_id", token_id)
        .field("price", price)
        .emit();
}

pub fn emit_purchase_failed(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    nft_contract_id: &AccountId,
    token_id: u64,
    price: U128,
    reason: &str,
) {
    EventBuilder::new(MARKET, "purchase_failed", buyer_id)
        .field("buyer_id", buyer_id)
        .field("seller_id", seller_id)
        .field("nft_contract_id", nft_contract_id)
        .field("token_id", token_id)
        .field("price", price)
        .field("reason", reason)
        .emit();
}

pub fn emit_withdraw(seller_id: &AccountId, amount: U128) {
    EventBuilder::new(MARKET, "withdraw", seller_id)
        .field("seller_id", seller_id)
        .field("amount", amount)
        .emit();
}
