use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), CollectibleError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(CollectibleError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(
        &self,
        actor_id: &AccountId,
    ) -> Result<(), CollectibleError> {
        if actor_id != &self.owner_id {
            return Err(CollectibleError::only_owner("contract owner"));
        }
        Ok(())
    }

    pub(crate) fn check_oracle(&self, actor_id: &AccountId) -> Result<(), CollectibleError> {
        if actor_id != &self.oracle_id {
            return Err(CollectibleError::only_oracle());
        }
        Ok(())
    }
}
