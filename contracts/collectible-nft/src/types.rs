use near_sdk::json_types::U64;
use near_sdk::{AccountId, BorshStorageKey, near};
use std::collections::HashMap;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    FreeMints,
    PendingRequests,
    TokensById,
    TokensPerOwner,
    TokensPerOwnerInner { account_id_hash: Vec<u8> },
}

/// Which mint path issued a randomness request. Free mints consume the
/// per-address quota at request time; paid mints carry the attached fee.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintKind {
    Free,
    Paid,
}

/// Pending-request table entry, keyed by the oracle-assigned request id.
/// Single use: removed on fulfillment, so a request id can never replay.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct MintRequest {
    pub minter: AccountId,
    pub kind: MintKind,
}

/// What happens to a paid-mint deposit above the mint fee. Explicit
/// configuration rather than an implicit default.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExcessPaymentPolicy {
    Refund,
    Keep,
}

/// NEP-177-shaped collection metadata, supplied at construction.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct CollectionMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    pub base_uri: Option<String>,
    pub reference: Option<String>,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Token {
    pub owner_id: AccountId,
    pub tier: u8,
    pub uri_index: u32,
    pub metadata_uri: String,
    pub approved_account_ids: HashMap<AccountId, u64>,
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct TokenView {
    pub token_id: U64,
    pub owner_id: AccountId,
    pub tier: u8,
    pub tier_name: String,
    pub metadata_uri: String,
    pub approved_account_ids: HashMap<AccountId, u64>,
}

/// View-side mirror of one rarity tier.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct RarityTierView {
    pub name: String,
    pub range_low: u8,
    pub range_high: u8,
}

/// Result of previewing a random value against the collection's tier table.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct RarityView {
    pub reduced: u8,
    pub tier: u8,
    pub tier_name: String,
}
