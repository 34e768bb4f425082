use crate::*;

impl ClaimRelay {
    /// Install a function call access key for every key in the batch. Each key can only call `claim`
    /// on this contract and can burn at most the allowance it was paid for.
    pub(crate) fn internal_add_access_keys(&self, batch: &KeyBatch) -> Result<(), ClaimError> {
        if batch.keys.is_empty() {
            return Ok(());
        }

        let allowance_per_key = NearToken::from_yoctonear(batch.allowance_per_key);
        let current_account_id = env::current_account_id();
        let mut promise = Promise::new(current_account_id.clone());
        for (pk, _) in batch.keys.iter() {
            let allowance = Allowance::limited(allowance_per_key)
                .ok_or_else(|| invalid_config!("access key allowance must be greater than 0"))?;
            promise = promise.add_access_key_allowance(
                pk.clone(),
                allowance,
                current_account_id.clone(),
                ACCESS_KEY_CLAIM_METHOD_NAME.to_string(),
            );
        }
        Ok(())
    }

    /// Charge the predecessor for a batch of keys that was just registered
    pub(crate) fn internal_charge_for_batch(
        &mut self,
        batch: &KeyBatch,
        attached_deposit: u128,
    ) -> Result<(), ClaimError> {
        near_sdk::log!(
            "Charging {} for {} keys on drop {}",
            yocto_to_near(batch.required_funding),
            batch.keys.len(),
            batch.drop_id
        );
        self.charge_with_deposit_or_balance(&batch.funder_id, attached_deposit, batch.required_funding)
    }
}

/// `add_key` event for every key in the batch
pub(crate) fn add_key_event(batch: &KeyBatch) -> Option<EventLog> {
    if batch.keys.is_empty() {
        return None;
    }

    Some(EventLog::new(EventLogVariant::AddKey(
        batch
            .keys
            .iter()
            .map(|(pk, key_id)| key_log(&batch.drop_id, pk, *key_id))
            .collect(),
    )))
}
