use collectible_rarity::RarityTable;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, PanicOnDefault, env, near};

pub mod constants;
mod errors;
mod guards;

mod events;
mod external;

mod admin;
mod enumeration;
mod mint;
mod nft_core;
mod types;
mod views;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::CollectibleError;
pub use external::{ext_oracle, ext_self};
pub use types::{
    CollectionMetadata, ExcessPaymentPolicy, MintKind, MintRequest, RarityTierView, RarityView,
    StorageKey, Token, TokenView,
};

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/collectible-protocol/collectible-protocol",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep177", version = "2.0.0"),
        standard(standard = "nep178", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,
    // Security boundary: only this account may deliver randomness fulfillments.
    pub oracle_id: AccountId,
    pub metadata: CollectionMetadata,
    pub mint_fee: u128,
    pub excess_payment: ExcessPaymentPolicy,

    pub rarity_table: RarityTable,
    // One URI pool per tier, same order as the rarity table. Pools are
    // non-empty and may differ in size; validated at construction.
    pub tier_uris: Vec<Vec<String>>,

    // Monotonic: +1 per successful finalize, never otherwise.
    pub token_counter: u64,
    pub(crate) free_mints: LookupMap<AccountId, u8>,
    // Two-phase mint state: request ids issued by the oracle but not yet
    // fulfilled. An entry is consumed exactly once.
    pub(crate) pending_requests: IterableMap<u64, MintRequest>,

    pub tokens_by_id: IterableMap<u64, Token>,
    pub(crate) tokens_per_owner: LookupMap<AccountId, IterableSet<u64>>,
    pub next_approval_id: u64,
}
