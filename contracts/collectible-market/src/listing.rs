use crate::external::*;
use crate::*;
use near_sdk::json_types::{U64, U128};
use near_sdk::{Gas, Promise};

#[near]
impl Contract {
    /// Opens a sale. Price and double-listing are checked synchronously;
    /// ownership and the marketplace's transfer approval are verified
    /// against the NFT contract before the listing is written.
    #[payable]
    #[handle_result]
    pub fn list_nft(
        &mut self,
        nft_contract_id: AccountId,
        token_id: U64,
        approval_id: u64,
        price: U128,
    ) -> Result<Promise, MarketError> {
        crate::guards::check_at_least_one_yocto()?;
        if price.0 == 0 {
            return Err(MarketError::price_must_be_positive());
        }
        let seller_id = env::predecessor_account_id();
        let listing_id = Contract::make_listing_id(&nft_contract_id, token_id.0);
        if self.listings.contains_key(&listing_id) {
            return Err(MarketError::already_listed());
        }

        let verify_gas = Gas::from_tgas(GAS_NFT_VERIFY_TGAS);
        Ok(ext_nft::ext(nft_contract_id.clone())
            .with_static_gas(verify_gas)
            .nft_is_approved(token_id, env::current_account_id(), Some(approval_id))
            .and(
                ext_nft::ext(nft_contract_id.clone())
                    .with_static_gas(verify_gas)
                    .nft_token(token_id),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_PROCESS_LISTING_TGAS))
                    .process_listing(nft_contract_id, token_id, approval_id, price, seller_id),
            ))
    }

    /// Only callable by this contract. Must not panic; failed verification
    /// is logged and writes nothing.
    #[private]
    pub fn process_listing(
        &mut self,
        nft_contract_id: AccountId,
        token_id: U64,
        approval_id: u64,
        price: U128,
        seller_id: AccountId,
    ) {
        if env::promise_results_count() != 2 {
            env::log_str("Listing failed: expected 2 promise results");
            return;
        }
        let approved = match env::promise_result_checked(0, 16) {
            Ok(value) => near_sdk::serde_json::from_slice::<bool>(&value).unwrap_or(false),
            Err(_) => false,
        };
        let token_owner = match env::promise_result_checked(1, MAX_VERIFY_RESULT_LEN) {
            Ok(value) => near_sdk::serde_json::from_slice::<Option<Token>>(&value)
                .ok()
                .flatten()
                .map(|token| token.owner_id),
            Err(_) => None,
        };
        self.apply_listing_verification(
            nft_contract_id,
            token_id.0,
            approval_id,
            price.0,
            seller_id,
            approved,
            token_owner,
        );
    }

    /// Requires 1 yoctoNEAR. Overwrites the price in place; the listing
    /// stays live under the same approval.
    #[payable]
    #[handle_result]
    pub fn update_listing(
        &mut self,
        nft_contract_id: AccountId,
        token_id: U64,
        price: U128,
    ) -> Result<(), MarketError> {
        crate::guards::check_one_yocto()?;
        if price.0 == 0 {
            return Err(MarketError::price_must_be_positive());
        }
        let listing_id = Contract::make_listing_id(&nft_contract_id, token_id.0);
        let listing = self
            .listings
            .get_mut(&listing_id)
            .ok_or_else(MarketError::not_listed)?;
        if env::predecessor_account_id() != listing.seller_id {
            return Err(MarketError::not_owner());
        }
        listing.price = price.0;
        let seller_id = listing.seller_id.clone();
        events::emit_list(&seller_id, &nft_contract_id, token_id.0, price);
        Ok(())
    }

    /// Requires 1 yoctoNEAR. Deletes the listing.
    #[payable]
    #[handle_result]
    pub fn cancel_listing(
        &mut self,
        nft_contract_id: AccountId,
        token_id: U64,
    ) -> Result<(), MarketError> {
        crate::guards::check_one_yocto()?;
        let listing_id = Contract::make_listing_id(&nft_contract_id, token_id.0);
        let listing = self
            .listings
            .get(&listing_id)
            .ok_or_else(MarketError::not_listed)?;
        if env::predecessor_account_id() != listing.seller_id {
            return Err(MarketError::not_owner());
        }
        let seller_id = listing.seller_id.clone();
        self.internal_remove_listing(&listing_id, &seller_id);
        events::emit_cancel(&seller_id, &nft_contract_id, token_id.0);
        Ok(())
    }
}

impl Contract {
    pub(crate) fn make_listing_id(nft_contract_id: &AccountId, token_id: u64) -> String {
        format!("{}{}{}", nft_contract_id, DELIMITER, token_id)
    }

    /// Applies the outcome of list-time verification. Returns whether the
    /// listing was written.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn apply_listing_verification(
        &mut self,
        nft_contract_id: AccountId,
        token_id: u64,
        approval_id: u64,
        price: u128,
        seller_id: AccountId,
        approved: bool,
        token_owner: Option<AccountId>,
    ) -> bool {
        if !approved {
            env::log_str("Listing failed: Not approved for marketplace");
            return false;
        }
        let Some(token_owner) = token_owner else {
            env::log_str("Listing failed: token not found on NFT contract");
            return false;
        };
        if token_owner != seller_id {
            env::log_str("Listing failed: Not owner");
            return false;
        }

        let listing_id = Contract::make_listing_id(&nft_contract_id, token_id);
        if self.listings.contains_key(&listing_id) {
            env::log_str("Listing skipped: Nft already listed (concurrent listing)");
            return false;
        }

        self.internal_add_listing(Listing {
            seller_id: seller_id.clone(),
            nft_contract_id: nft_contract_id.clone(),
            token_id,
            approval_id,
            price,
        });
        events::emit_list(&seller_id, &nft_contract_id, token_id, U128(price));
        true
    }

    pub(crate) fn internal_add_listing(&mut self, listing: Listing) {
        let listing_id = Contract::make_listing_id(&listing.nft_contract_id, listing.token_id);
        let seller_id = listing.seller_id.clone();
        self.listings.insert(listing_id.clone(), listing);
        if let Some(set) = self.by_seller.get_mut(&seller_id) {
            set.insert(listing_id);
        } else {
            let mut set = IterableSet::new(StorageKey::BySellerInner {
                account_id_hash: crate::guards::hash_account_id(&seller_id),
            });
            set.insert(listing_id);
            self.by_seller.insert(seller_id, set);
        }
    }

    pub(crate) fn internal_remove_listing(&mut self, listing_id: &str, seller_id: &AccountId) {
        self.listings.remove(listing_id);
        if let Some(set) = self.by_seller.get_mut(seller_id) {
            set.remove(listing_id);
        }
    }
}
