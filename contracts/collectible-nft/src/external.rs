#![allow(dead_code)]

use crate::MintKind;
use near_sdk::json_types::{U64, U128};
use near_sdk::{AccountId, ext_contract};

#[ext_contract(ext_oracle)]
pub trait RandomnessOracle {
    /// Cross-contract assumption: the oracle assigns a fresh opaque request id,
    /// returns it, and at some later block calls `fulfill_randomness` on the
    /// consumer (the predecessor of this call). Rejects the request if the
    /// consumer is not registered or its subscription is underfunded.
    fn request_randomness(&mut self, num_words: u32) -> U64;
}

#[ext_contract(ext_self)]
pub trait SelfCallback {
    fn on_randomness_requested(
        &mut self,
        minter: AccountId,
        kind: MintKind,
        deposit: U128,
    ) -> Option<U64>;
}
