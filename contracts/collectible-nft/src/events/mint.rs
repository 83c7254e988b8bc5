use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::MINT;
use super::builder::EventBuilder;
use super::nep171;
use crate::MintKind;

pub fn emit_mint_requested(minter: &AccountId, request_id: u64, kind: MintKind) {
    EventBuilder::new(MINT, "requested", minter)
        .field("minter", minter)
        .field("request_id", request_id)
        .field("kind", kind_label(kind))
        .emit();
}

pub fn emit_mint_aborted(minter: &AccountId, kind: MintKind, refunded: U128) {
    EventBuilder::new(MINT, "aborted", minter)
        .field("minter", minter)
        .field("kind", kind_label(kind))
        .field("refunded", refunded)
        .emit();
}

pub fn emit_mint_finalized(
    owner_id: &AccountId,
    token_id: u64,
    request_id: u64,
    tier: u8,
    tier_name: &str,
) {
    EventBuilder::new(MINT, "finalized", owner_id)
        .field("owner_id", owner_id)
        .field("token_id", token_id)
        .field("request_id", request_id)
        .field("tier", tier)
        .field("tier_name", tier_name)
        .emit();
    nep171::emit_mint(owner_id.as_str(), &[token_id.to_string()], None);
}

fn kind_label(kind: MintKind) -> &'static str {
    match kind {
        MintKind::Free => "free",
        MintKind::Paid => "paid",
    }
}
