use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, PanicOnDefault, env, near};

pub mod constants;
mod errors;
mod guards;

mod events;
mod external;

mod admin;
mod listing;
mod proceeds;
mod purchase;
mod types;
mod views;


pub use constants::*;
pub use errors::MarketError;
pub use external::{ext_nft, ext_self};
pub use types::{ExcessPaymentPolicy, Listing, ListingView, StorageKey};

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/collectible-protocol/collectible-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,
    // What happens to a buy deposit above the listing price. Explicit
    // configuration; `Forfeit` credits the surplus to the seller.
    pub excess_payment: ExcessPaymentPolicy,

    // Escrow book, keyed by "{nft_contract_id}:{token_id}". An entry exists
    // iff the token is actively for sale; deleted on buy or cancel.
    pub listings: IterableMap<String, Listing>,
    pub(crate) by_seller: LookupMap<AccountId, IterableSet<String>>,

    // Accumulated, not-yet-withdrawn sale revenue per seller.
    pub(crate) proceeds: LookupMap<AccountId, u128>,
}
