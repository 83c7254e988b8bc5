use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_mint_fee_update(owner_id: &AccountId, old_fee: U128, new_fee: U128) {
    EventBuilder::new(CONTRACT, "mint_fee_update", owner_id)
        .field("old_fee", old_fee)
        .field("new_fee", new_fee)
        .emit();
}

pub fn emit_oracle_update(owner_id: &AccountId, old_oracle: &AccountId, new_oracle: &AccountId) {
    EventBuilder::new(CONTRACT, "oracle_update", owner_id)
        .field("old_oracle", old_oracle)
        .field("new_oracle", new_oracle)
        .emit();
}

pub fn emit_excess_policy_update(owner_id: &AccountId, policy: &str) {
    EventBuilder::new(CONTRACT, "excess_policy_update", owner_id)
        .field("policy", policy)
        .emit();
}
