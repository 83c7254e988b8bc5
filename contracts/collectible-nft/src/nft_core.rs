use crate::*;
use near_sdk::json_types::U64;

#[near]
impl Contract {
    /// Requires 1 yoctoNEAR. Sender must be the owner or an approved account
    /// (with a matching approval id when one is given). Approvals are
    /// cleared on transfer.
    #[payable]
    #[handle_result]
    pub fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: U64,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) -> Result<(), CollectibleError> {
        crate::guards::check_one_yocto()?;
        let sender_id = env::predecessor_account_id();
        self.internal_transfer(&sender_id, &receiver_id, token_id.0, approval_id, memo)
    }

    /// Requires 1 yoctoNEAR. Grants `account_id` a transfer approval with a
    /// contract-unique, monotonically increasing approval id.
    #[payable]
    #[handle_result]
    pub fn nft_approve(
        &mut self,
        token_id: U64,
        account_id: AccountId,
    ) -> Result<u64, CollectibleError> {
        crate::guards::check_one_yocto()?;
        let caller = env::predecessor_account_id();
        let mut token = self
            .tokens_by_id
            .get(&token_id.0)
            .cloned()
            .ok_or_else(CollectibleError::token_not_found)?;
        if token.owner_id != caller {
            return Err(CollectibleError::not_owner());
        }
        let approval_id = self.next_approval_id;
        self.next_approval_id += 1;
        token.approved_account_ids.insert(account_id, approval_id);
        self.tokens_by_id.insert(token_id.0, token);
        Ok(approval_id)
    }

    #[payable]
    #[handle_result]
    pub fn nft_revoke(
        &mut self,
        token_id: U64,
        account_id: AccountId,
    ) -> Result<(), CollectibleError> {
        crate::guards::check_one_yocto()?;
        let caller = env::predecessor_account_id();
        let mut token = self
            .tokens_by_id
            .get(&token_id.0)
            .cloned()
            .ok_or_else(CollectibleError::token_not_found)?;
        if token.owner_id != caller {
            return Err(CollectibleError::not_owner());
        }
        token.approved_account_ids.remove(&account_id);
        self.tokens_by_id.insert(token_id.0, token);
        Ok(())
    }

    pub fn nft_is_approved(
        &self,
        token_id: U64,
        approved_account_id: AccountId,
        approval_id: Option<u64>,
    ) -> bool {
        let Some(token) = self.tokens_by_id.get(&token_id.0) else {
            return false;
        };
        match token.approved_account_ids.get(&approved_account_id) {
            Some(actual) => approval_id.is_none_or(|expected| *actual == expected),
            None => false,
        }
    }

    pub fn nft_token(&self, token_id: U64) -> Option<TokenView> {
        self.token_view(token_id.0)
    }
}

impl Contract {
    pub(crate) fn internal_transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        token_id: u64,
        approval_id: Option<u64>,
        memo: Option<String>,
    ) -> Result<(), CollectibleError> {
        let mut token = self
            .tokens_by_id
            .get(&token_id)
            .cloned()
            .ok_or_else(CollectibleError::token_not_found)?;
        let owner_id = token.owner_id.clone();

        if sender_id != &owner_id {
            match (token.approved_account_ids.get(sender_id), approval_id) {
                (Some(actual), Some(expected)) if *actual == expected => {}
                (Some(_), None) => {}
                _ => {
                    return Err(CollectibleError::Unauthorized(
                        "Sender is not the owner or an approved account".into(),
                    ));
                }
            }
        }
        if receiver_id == &owner_id {
            return Err(CollectibleError::InvalidInput(
                "Receiver must differ from the current owner".into(),
            ));
        }

        token.approved_account_ids.clear();
        token.owner_id = receiver_id.clone();
        self.tokens_by_id.insert(token_id, token);
        self.remove_token_from_owner(&owner_id, token_id);
        self.add_token_to_owner(receiver_id, token_id);

        let authorized = (sender_id != &owner_id).then(|| sender_id.as_str());
        events::nep171::emit_transfer(
            owner_id.as_str(),
            receiver_id.as_str(),
            &[token_id.to_string()],
            authorized,
            memo.as_deref(),
        );
        Ok(())
    }

    pub(crate) fn add_token_to_owner(&mut self, account_id: &AccountId, token_id: u64) {
        if let Some(set) = self.tokens_per_owner.get_mut(account_id) {
            set.insert(token_id);
        } else {
            let mut set = IterableSet::new(StorageKey::TokensPerOwnerInner {
                account_id_hash: crate::guards::hash_account_id(account_id),
            });
            set.insert(token_id);
            self.tokens_per_owner.insert(account_id.clone(), set);
        }
    }

    pub(crate) fn remove_token_from_owner(&mut self, account_id: &AccountId, token_id: u64) {
        if let Some(set) = self.tokens_per_owner.get_mut(account_id) {
            set.remove(&token_id);
        }
    }
}
