use crate::*;
use near_sdk::json_types::{U64, U128};

#[near]
impl Contract {
    pub fn nft_total_supply(&self) -> U64 {
        U64(self.tokens_by_id.len() as u64)
    }

    pub fn nft_supply_for_owner(&self, account_id: AccountId) -> U64 {
        U64(
            self.tokens_per_owner
                .get(&account_id)
                .map_or(0, |set| set.len()) as u64,
        )
    }

    pub fn nft_tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<TokenView> {
        let Some(set) = self.tokens_per_owner.get(&account_id) else {
            return Vec::new();
        };
        let start = from_index.map_or(0, |i| i.0 as usize);
        let limit = limit.map_or(usize::MAX, |l| l as usize);
        set.iter()
            .skip(start)
            .take(limit)
            .filter_map(|token_id| self.token_view(*token_id))
            .collect()
    }
}
