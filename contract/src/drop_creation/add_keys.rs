use crate::*;

#[near]
impl ClaimRelay {
    /// Add keys to a drop. Only the funder can add keys and pays for them the same way as in `create_drop`.
    #[payable]
    #[handle_result]
    pub fn add_keys(&mut self, drop_id: DropId, public_keys: Vec<PublicKey>) -> Result<bool, ClaimError> {
        self.assert_no_global_freeze()?;

        let caller_id = env::predecessor_account_id();
        let attached_deposit = env::attached_deposit().as_yoctonear();
        let available_funds = self.internal_available_funds(&caller_id, attached_deposit);

        let batch = self.drops.add_keys(
            &mut self.keys,
            &self.config,
            &caller_id,
            &drop_id,
            &public_keys,
            available_funds,
        )?;

        self.internal_charge_for_batch(&batch, attached_deposit)?;
        self.internal_add_access_keys(&batch)?;

        log_events(add_key_event(&batch).into_iter().collect());
        Ok(true)
    }
}
