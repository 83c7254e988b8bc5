use crate::*;
use near_sdk::json_types::{U64, U128};

#[near]
impl Contract {
    pub fn get_listing(&self, nft_contract_id: AccountId, token_id: U64) -> Option<ListingView> {
        let listing_id = Contract::make_listing_id(&nft_contract_id, token_id.0);
        self.listings.get(&listing_id).map(ListingView::from)
    }

    pub fn get_listing_count(&self) -> u32 {
        self.listings.len()
    }

    pub fn get_listings(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<ListingView> {
        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(50) as usize;
        self.listings
            .values()
            .skip(start)
            .take(limit)
            .map(ListingView::from)
            .collect()
    }

    pub fn get_listings_by_seller(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<ListingView> {
        let Some(listing_ids) = self.by_seller.get(&account_id) else {
            return Vec::new();
        };
        let start = from_index.map(|i| i.0 as usize).unwrap_or(0);
        let limit = limit.unwrap_or(50) as usize;
        listing_ids
            .iter()
            .skip(start)
            .take(limit)
            .filter_map(|listing_id| self.listings.get(listing_id))
            .map(ListingView::from)
            .collect()
    }

    pub fn get_proceeds(&self, account_id: AccountId) -> U128 {
        U128(self.proceeds.get(&account_id).copied().unwrap_or(0))
    }

    pub fn get_excess_payment_policy(&self) -> ExcessPaymentPolicy {
        self.excess_payment
    }

    pub fn get_owner(&self) -> AccountId {
        self.owner_id.clone()
    }
}
