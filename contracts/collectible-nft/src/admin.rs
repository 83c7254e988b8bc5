use crate::*;
use collectible_rarity::RarityTier;
use near_sdk::json_types::U128;

#[near]
impl Contract {
    /// Everything collection-specific is constructor data: metadata, fee,
    /// tier table, URI pools, oracle account, excess-payment policy. The
    /// Hamtaro and Isaac collections are two deployments of this contract
    /// with different arguments.
    #[init]
    pub fn new(
        owner_id: AccountId,
        oracle_id: AccountId,
        metadata: CollectionMetadata,
        mint_fee: U128,
        rarity_tiers: Vec<RarityTier>,
        tier_uris: Vec<Vec<String>>,
        excess_payment: Option<ExcessPaymentPolicy>,
    ) -> Self {
        let rarity_table = RarityTable::new(rarity_tiers)
            .unwrap_or_else(|e| env::panic_str(&format!("Invalid rarity table: {e}")));
        if tier_uris.len() != rarity_table.len() {
            env::panic_str(&format!(
                "Expected one URI pool per tier: {} tiers, {} pools",
                rarity_table.len(),
                tier_uris.len()
            ));
        }
        for (tier, pool) in tier_uris.iter().enumerate() {
            if pool.is_empty() {
                env::panic_str(&format!("URI pool for tier {tier} is empty"));
            }
        }

        Self {
            owner_id,
            oracle_id,
            metadata,
            mint_fee: mint_fee.0,
            excess_payment: excess_payment.unwrap_or(ExcessPaymentPolicy::Refund),
            rarity_table,
            tier_uris,
            token_counter: 0,
            free_mints: LookupMap::new(StorageKey::FreeMints),
            pending_requests: IterableMap::new(StorageKey::PendingRequests),
            tokens_by_id: IterableMap::new(StorageKey::TokensById),
            tokens_per_owner: LookupMap::new(StorageKey::TokensPerOwner),
            next_approval_id: 0,
        }
    }

    #[handle_result]
    pub fn set_mint_fee(&mut self, mint_fee: U128) -> Result<(), CollectibleError> {
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;
        let old_fee = self.mint_fee;
        self.mint_fee = mint_fee.0;
        events::emit_mint_fee_update(&caller, U128(old_fee), mint_fee);
        Ok(())
    }

    #[handle_result]
    pub fn set_oracle(&mut self, oracle_id: AccountId) -> Result<(), CollectibleError> {
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;
        let old_oracle = self.oracle_id.clone();
        self.oracle_id = oracle_id.clone();
        events::emit_oracle_update(&caller, &old_oracle, &oracle_id);
        Ok(())
    }

    #[handle_result]
    pub fn set_excess_payment_policy(
        &mut self,
        policy: ExcessPaymentPolicy,
    ) -> Result<(), CollectibleError> {
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;
        self.excess_payment = policy;
        let label = match policy {
            ExcessPaymentPolicy::Refund => "refund",
            ExcessPaymentPolicy::Keep => "keep",
        };
        events::emit_excess_policy_update(&caller, label);
        Ok(())
    }
}
