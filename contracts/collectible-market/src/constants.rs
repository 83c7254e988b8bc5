use near_sdk::NearToken;

// Listing key invariant: the delimiter cannot appear in NEAR account ids,
// preventing key collisions between collections.
pub const DELIMITER: &str = ":";

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const GAS_NFT_VERIFY_TGAS: u64 = 10;
pub const GAS_PROCESS_LISTING_TGAS: u64 = 20;
pub const GAS_NFT_TRANSFER_TGAS: u64 = 30;
pub const GAS_RESOLVE_PURCHASE_TGAS: u64 = 40;
pub const GAS_WITHDRAW_CALLBACK_TGAS: u64 = 10;

/// Upper bound on serialized promise results parsed in callbacks.
pub const MAX_VERIFY_RESULT_LEN: usize = 4096;
