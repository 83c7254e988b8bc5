use crate::external::*;
use crate::*;
use near_sdk::json_types::{U64, U128};
use near_sdk::{Gas, NearToken, Promise};

#[near]
impl Contract {
    /// Buys a listed token. The listing is deleted before the transfer is
    /// dispatched; if the transfer fails the callback restores it and
    /// refunds the buyer.
    #[payable]
    #[handle_result]
    pub fn buy_nft(
        &mut self,
        nft_contract_id: AccountId,
        token_id: U64,
    ) -> Result<Promise, MarketError> {
        let listing_id = Contract::make_listing_id(&nft_contract_id, token_id.0);
        let listing = self
            .listings
            .get(&listing_id)
            .cloned()
            .ok_or_else(MarketError::not_listed)?;

        let buyer_id = env::predecessor_account_id();
        if buyer_id == listing.seller_id {
            return Err(MarketError::InvalidInput(
                "Cannot purchase your own listing".into(),
            ));
        }
        let deposit = env::attached_deposit().as_yoctonear();
        if deposit < listing.price {
            return Err(MarketError::price_not_met(deposit, listing.price));
        }

        // Remove before the external call so a reentrant buy sees no listing.
        self.internal_remove_listing(&listing_id, &listing.seller_id);

        Ok(ext_nft::ext(nft_contract_id.clone())
            .with_attached_deposit(ONE_YOCTO)
            .with_static_gas(Gas::from_tgas(GAS_NFT_TRANSFER_TGAS))
            .nft_transfer(
                buyer_id.clone(),
                token_id,
                Some(listing.approval_id),
                Some(format!("Marketplace sale to {}", buyer_id)),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_RESOLVE_PURCHASE_TGAS))
                    .resolve_purchase(
                        buyer_id,
                        listing.seller_id,
                        nft_contract_id,
                        token_id,
                        listing.approval_id,
                        U128(listing.price),
                        U128(deposit),
                    ),
            ))
    }

    /// Only callable by this contract. Settles the sale after the NFT
    /// transfer resolves; returns the amount credited to the seller.
    #[private]
    #[allow(clippy::too_many_arguments)]
    pub fn resolve_purchase(
        &mut self,
        buyer_id: AccountId,
        seller_id: AccountId,
        nft_contract_id: AccountId,
        token_id: U64,
        approval_id: u64,
        price: U128,
        deposit: U128,
    ) -> U128 {
        let transfer_ok = env::promise_result_checked(0, 16).is_ok();
        self.apply_purchase_result(
            buyer_id,
            seller_id,
            nft_contract_id,
            token_id.0,
            approval_id,
            price.0,
            deposit.0,
            transfer_ok,
        )
    }
}

impl Contract {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn apply_purchase_result(
        &mut self,
        buyer_id: AccountId,
        seller_id: AccountId,
        nft_contract_id: AccountId,
        token_id: u64,
        approval_id: u64,
        price: u128,
        deposit: u128,
        transfer_ok: bool,
    ) -> U128 {
        if !transfer_ok {
            // The token never moved: put the listing back and return the
            // buyer's full deposit. The seller may have relisted while the
            // transfer was in flight; a fresh listing wins over the stale one.
            let listing_id = Contract::make_listing_id(&nft_contract_id, token_id);
            if !self.listings.contains_key(&listing_id) {
                self.internal_add_listing(Listing {
                    seller_id: seller_id.clone(),
                    nft_contract_id: nft_contract_id.clone(),
                    token_id,
                    approval_id,
                    price,
                });
            }
            let _ = Promise::new(buyer_id.clone())
                .transfer(NearToken::from_yoctonear(deposit));
            events::emit_purchase_failed(
                &buyer_id,
                &seller_id,
                &nft_contract_id,
                token_id,
                U128(price),
                "nft_transfer_failed",
            );
            return U128(0);
        }

        let credited = match self.excess_payment {
            ExcessPaymentPolicy::Refund => {
                let excess = deposit.saturating_sub(price);
                if excess > 0 {
                    let _ = Promise::new(buyer_id.clone())
                        .transfer(NearToken::from_yoctonear(excess));
                }
                price
            }
            ExcessPaymentPolicy::Forfeit => deposit,
        };

        let balance = self.proceeds.get(&seller_id).copied().unwrap_or(0);
        self.proceeds
            .insert(seller_id.clone(), balance.saturating_add(credited));

        events::emit_purchase(&buyer_id, &seller_id, &nft_contract_id, token_id, U128(price));
        U128(credited)
    }
}
