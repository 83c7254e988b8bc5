use crate::*;
use near_sdk::json_types::{U64, U128};

#[near]
impl Contract {
    pub fn get_token_counter(&self) -> U64 {
        U64(self.token_counter)
    }

    pub fn get_mint_fee(&self) -> U128 {
        U128(self.mint_fee)
    }

    pub fn get_free_mint_count(&self, account_id: AccountId) -> u8 {
        self.free_mints.get(&account_id).copied().unwrap_or(0)
    }

    pub fn get_tier_uri(&self, tier: u8, index: u32) -> Option<String> {
        self.tier_uris
            .get(usize::from(tier))
            .and_then(|pool| pool.get(index as usize))
            .cloned()
    }

    pub fn get_rarity_tiers(&self) -> Vec<RarityTierView> {
        self.rarity_table
            .tiers()
            .iter()
            .map(|t| RarityTierView {
                name: t.name.clone(),
                range_low: t.range_low,
                range_high: t.range_high,
            })
            .collect()
    }

    /// Pure preview of how a random value would resolve, without minting.
    pub fn resolve_rarity(&self, random_value: U128) -> RarityView {
        let resolved = self.rarity_table.resolve(random_value.0);
        RarityView {
            reduced: resolved.reduced,
            tier: resolved.tier as u8,
            tier_name: self.rarity_table.tiers()[resolved.tier].name.clone(),
        }
    }

    pub fn get_pending_request(&self, request_id: U64) -> Option<MintRequest> {
        self.pending_requests.get(&request_id.0).cloned()
    }

    pub fn get_pending_request_count(&self) -> u32 {
        self.pending_requests.len()
    }

    pub fn get_oracle(&self) -> AccountId {
        self.oracle_id.clone()
    }

    pub fn get_excess_payment_policy(&self) -> ExcessPaymentPolicy {
        self.excess_payment
    }

    pub fn nft_metadata(&self) -> CollectionMetadata {
        self.metadata.clone()
    }
}

impl Contract {
    pub(crate) fn token_view(&self, token_id: u64) -> Option<TokenView> {
        let token = self.tokens_by_id.get(&token_id)?;
        Some(TokenView {
            token_id: U64(token_id),
            owner_id: token.owner_id.clone(),
            tier: token.tier,
            tier_name: self.rarity_table.tiers()[usize::from(token.tier)].name.clone(),
            metadata_uri: token.metadata_uri.clone(),
            approved_account_ids: token.approved_account_ids.clone(),
        })
    }
}
