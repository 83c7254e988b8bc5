use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, excess_payment: Option<ExcessPaymentPolicy>) -> Self {
        Self {
            owner_id,
            excess_payment: excess_payment.unwrap_or(ExcessPaymentPolicy::Refund),
            listings: IterableMap::new(StorageKey::Listings),
            by_seller: LookupMap::new(StorageKey::BySeller),
            proceeds: LookupMap::new(StorageKey::Proceeds),
        }
    }

    #[handle_result]
    pub fn set_excess_payment_policy(
        &mut self,
        policy: ExcessPaymentPolicy,
    ) -> Result<(), MarketError> {
        if env::predecessor_account_id() != self.owner_id {
            return Err(MarketError::Unauthorized(
                "Only the contract owner can perform this action".into(),
            ));
        }
        self.excess_payment = policy;
        Ok(())
    }
}
