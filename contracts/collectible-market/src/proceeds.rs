use crate::external::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::{Gas, NearToken, Promise};

#[near]
impl Contract {
    /// Pays out the caller's accumulated sale revenue. The balance is
    /// zeroed before the transfer and restored by the callback if the
    /// transfer fails.
    #[handle_result]
    pub fn withdraw_proceeds(&mut self) -> Result<Promise, MarketError> {
        let seller_id = env::predecessor_account_id();
        let amount = self.proceeds.get(&seller_id).copied().unwrap_or(0);
        if amount == 0 {
            return Err(MarketError::no_proceeds());
        }
        self.proceeds.remove(&seller_id);

        Ok(Promise::new(seller_id.clone())
            .transfer(NearToken::from_yoctonear(amount))
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_WITHDRAW_CALLBACK_TGAS))
                    .on_proceeds_withdrawn(seller_id, U128(amount)),
            ))
    }

    /// Only callable by this contract.
    #[private]
    pub fn on_proceeds_withdrawn(&mut self, seller_id: AccountId, amount: U128) {
        let ok = env::promise_result_checked(0, 16).is_ok();
        self.apply_withdrawal_result(seller_id, amount.0, ok);
    }
}

impl Contract {
    pub(crate) fn apply_withdrawal_result(
        &mut self,
        seller_id: AccountId,
        amount: u128,
        transfer_ok: bool,
    ) {
        if transfer_ok {
            events::emit_withdraw(&seller_id, U128(amount));
            return;
        }
        // Transfer bounced: put the balance back so the seller can retry.
        let balance = self.proceeds.get(&seller_id).copied().unwrap_or(0);
        self.proceeds
            .insert(seller_id.clone(), balance.saturating_add(amount));
        env::log_str(&format!(
            "Proceeds withdrawal of {} failed for {}; balance restored",
            amount, seller_id
        ));
    }
}
