use crate::*;

#[near]
impl ClaimRelay {
    /// Create a new drop. The funder pays `deposit_per_use` plus the key allowance for every use of
    /// every key, out of the attached deposit first and their balance second. Any excess deposit is
    /// added to their balance.
    #[payable]
    #[handle_result]
    pub fn create_drop(
        &mut self,
        drop_id: DropId,
        deposit_per_use: U128,
        uses_per_key: UseNumber,
        methods_by_use: Vec<Vec<MethodData>>,
        public_keys: Option<Vec<PublicKey>>,
        metadata: Option<DropMetadata>,
    ) -> Result<bool, ClaimError> {
        self.assert_no_global_freeze()?;

        let funder_id = env::predecessor_account_id();
        let attached_deposit = env::attached_deposit().as_yoctonear();
        let available_funds = self.internal_available_funds(&funder_id, attached_deposit);
        let public_keys = public_keys.unwrap_or_default();

        let batch = self.drops.create_drop(
            &mut self.keys,
            &self.config,
            NewDrop {
                drop_id,
                funder_id,
                deposit_per_use: deposit_per_use.0,
                uses_per_key,
                methods_by_use,
                metadata: metadata.clone(),
            },
            &public_keys,
            available_funds,
        )?;

        self.internal_charge_for_batch(&batch, attached_deposit)?;
        self.internal_add_access_keys(&batch)?;

        let mut event_logs = vec![EventLog::new(EventLogVariant::DropCreation(DropCreationLog {
            funder_id: batch.funder_id.to_string(),
            drop_id: batch.drop_id.clone(),
            uses_per_key,
            deposit_per_use,
            metadata,
        }))];
        event_logs.extend(add_key_event(&batch));
        log_events(event_logs);

        Ok(true)
    }
}
