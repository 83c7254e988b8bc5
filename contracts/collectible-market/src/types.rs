use near_sdk::json_types::{U64, U128};
use near_sdk::{AccountId, BorshStorageKey, near};

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Listings,
    BySeller,
    BySellerInner { account_id_hash: Vec<u8> },
    Proceeds,
}

/// What happens to a buy deposit above the listing price.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExcessPaymentPolicy {
    Refund,
    Forfeit,
}

/// An active sale offer: one token, one price. Exists only while the token
/// is for sale; price is strictly positive by construction.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Listing {
    pub seller_id: AccountId,
    pub nft_contract_id: AccountId,
    pub token_id: u64,
    // Approval granted by the seller on the NFT contract; used to move the
    // token at purchase time.
    pub approval_id: u64,
    pub price: u128,
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct ListingView {
    pub seller_id: AccountId,
    pub nft_contract_id: AccountId,
    pub token_id: U64,
    pub price: U128,
}

impl From<&Listing> for ListingView {
    fn from(listing: &Listing) -> Self {
        Self {
            seller_id: listing.seller_id.clone(),
            nft_contract_id: listing.nft_contract_id.clone(),
            token_id: U64(listing.token_id),
            price: U128(listing.price),
        }
    }
}
