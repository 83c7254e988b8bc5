use crate::*;
use near_sdk::json_types::{U64, U128};
use near_sdk::{Gas, NearToken, Promise};

#[near]
impl Contract {
    /// Paid mint, step one of two: validate the fee, then ask the oracle for
    /// randomness. The token itself is materialized later, when the oracle
    /// delivers the random value to `fulfill_randomness`.
    #[payable]
    #[handle_result]
    pub fn mint_nft(&mut self) -> Result<Promise, CollectibleError> {
        let deposit = env::attached_deposit().as_yoctonear();
        if deposit < self.mint_fee {
            return Err(CollectibleError::insufficient_mint_fee(
                deposit,
                self.mint_fee,
            ));
        }
        let minter = env::predecessor_account_id();
        Ok(self.issue_randomness_request(minter, MintKind::Paid, deposit))
    }

    /// Free mint, capped per address. The quota slot is consumed at request
    /// time, not at finalize time, so one caller cannot stack unlimited
    /// concurrent requests against the same slot while the first is pending.
    #[handle_result]
    pub fn mint_free_nft(&mut self) -> Result<Promise, CollectibleError> {
        let minter = env::predecessor_account_id();
        let used = self.free_mints.get(&minter).copied().unwrap_or(0);
        if used >= FREE_MINT_LIMIT {
            return Err(CollectibleError::free_quota_exhausted());
        }
        self.free_mints.insert(minter.clone(), used + 1);
        Ok(self.issue_randomness_request(minter, MintKind::Free, 0))
    }

    /// Only callable by this contract. Must not panic: a rejected oracle
    /// request rolls the whole mint attempt back instead.
    #[private]
    pub fn on_randomness_requested(
        &mut self,
        minter: AccountId,
        kind: MintKind,
        deposit: U128,
    ) -> Option<U64> {
        let request_id = match env::promise_result_checked(0, MAX_REQUEST_ID_LEN) {
            Ok(value) => near_sdk::serde_json::from_slice::<U64>(&value)
                .ok()
                .map(|id| id.0),
            Err(_) => None,
        };
        self.apply_randomness_request_result(minter, kind, deposit.0, request_id)
            .map(U64)
    }

    /// Inbound oracle callback, step two of two. Restricted to the trusted
    /// oracle account; consumes the pending request and finalizes the token.
    #[handle_result]
    pub fn fulfill_randomness(
        &mut self,
        request_id: U64,
        random_value: U128,
    ) -> Result<U64, CollectibleError> {
        self.check_oracle(&env::predecessor_account_id())?;
        // Single-use consumption is the replay guard: a second delivery of
        // the same id, or an id that was never issued, fails here.
        let request = self
            .pending_requests
            .remove(&request_id.0)
            .ok_or_else(|| CollectibleError::unknown_request(request_id.0))?;
        let token_id = self.finalize_mint(&request, request_id.0, random_value.0)?;
        Ok(U64(token_id))
    }
}

impl Contract {
    fn issue_randomness_request(
        &self,
        minter: AccountId,
        kind: MintKind,
        deposit: u128,
    ) -> Promise {
        ext_oracle::ext(self.oracle_id.clone())
            .with_static_gas(Gas::from_tgas(GAS_ORACLE_REQUEST_TGAS))
            .request_randomness(NUM_RANDOM_WORDS)
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_REQUEST_CALLBACK_TGAS))
                    .on_randomness_requested(minter, kind, U128(deposit)),
            )
    }

    /// Applies the outcome of the oracle submission. `request_id: None`
    /// means the oracle rejected the call: every effect of the submit step
    /// is undone (free quota released, paid deposit refunded in full), so a
    /// failed attempt never charges the caller.
    pub(crate) fn apply_randomness_request_result(
        &mut self,
        minter: AccountId,
        kind: MintKind,
        deposit: u128,
        request_id: Option<u64>,
    ) -> Option<u64> {
        let Some(request_id) = request_id else {
            env::log_str("Mint aborted: oracle rejected the randomness request");
            self.abort_mint_request(&minter, kind, deposit);
            return None;
        };
        if self.pending_requests.contains_key(&request_id) {
            // The oracle must hand out unique ids; honoring a duplicate
            // would clobber a live request, so treat it as a rejection.
            env::log_str(&format!(
                "Mint aborted: oracle reused request id {request_id}"
            ));
            self.abort_mint_request(&minter, kind, deposit);
            return None;
        }

        if kind == MintKind::Paid
            && self.excess_payment == ExcessPaymentPolicy::Refund
            && deposit > self.mint_fee
        {
            let _ = Promise::new(minter.clone())
                .transfer(NearToken::from_yoctonear(deposit - self.mint_fee));
        }

        self.pending_requests.insert(
            request_id,
            MintRequest {
                minter: minter.clone(),
                kind,
            },
        );
        events::emit_mint_requested(&minter, request_id, kind);
        Some(request_id)
    }

    fn abort_mint_request(&mut self, minter: &AccountId, kind: MintKind, deposit: u128) {
        if kind == MintKind::Free {
            let used = self.free_mints.get(minter).copied().unwrap_or(0);
            self.free_mints
                .insert(minter.clone(), used.saturating_sub(1));
        }
        if deposit > 0 {
            let _ = Promise::new(minter.clone()).transfer(NearToken::from_yoctonear(deposit));
        }
        events::emit_mint_aborted(minter, kind, U128(deposit));
    }

    /// Converts a fulfilled random value into a materialized token: one draw
    /// decides the tier and the URI slot, the counter allocates the id. The
    /// gateway's single-use removal guarantees this runs once per request.
    pub(crate) fn finalize_mint(
        &mut self,
        request: &MintRequest,
        request_id: u64,
        random_value: u128,
    ) -> Result<u64, CollectibleError> {
        let resolved = self.rarity_table.resolve(random_value);
        let pool = &self.tier_uris[resolved.tier];
        let uri_index = collectible_rarity::uri_index(resolved.reduced, pool.len());
        let metadata_uri = pool[uri_index].clone();

        let token_id = self.token_counter;
        self.token_counter = self
            .token_counter
            .checked_add(1)
            .ok_or_else(|| CollectibleError::InternalError("Token counter overflow".into()))?;

        self.tokens_by_id.insert(
            token_id,
            Token {
                owner_id: request.minter.clone(),
                tier: resolved.tier as u8,
                uri_index: uri_index as u32,
                metadata_uri,
                approved_account_ids: std::collections::HashMap::new(),
            },
        );
        self.add_token_to_owner(&request.minter, token_id);

        let tier_name = &self.rarity_table.tiers()[resolved.tier].name;
        events::emit_mint_finalized(
            &request.minter,
            token_id,
            request_id,
            resolved.tier as u8,
            tier_name,
        );
        Ok(token_id)
    }
}
