use near_sdk::NearToken;

/// Free mints allowed per address, consumed at request time.
pub const FREE_MINT_LIMIT: u8 = 3;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

/// Random words requested from the oracle per mint. One draw decides both
/// the tier and the URI slot inside the tier pool.
pub const NUM_RANDOM_WORDS: u32 = 1;

pub const GAS_ORACLE_REQUEST_TGAS: u64 = 15;
pub const GAS_REQUEST_CALLBACK_TGAS: u64 = 20;

/// Upper bound on the serialized request id returned by the oracle.
pub const MAX_REQUEST_ID_LEN: usize = 64;
