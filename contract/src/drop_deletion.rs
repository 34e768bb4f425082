use crate::*;

/// Number of keys deleted when no public keys or limit are passed in
const DEFAULT_DELETION_LIMIT: u8 = 100;

#[near]
impl ClaimRelay {
    /*
        User can pass in a vector of public keys or just a drop ID.
        If only a drop ID is passed in, it will auto delete up to limit keys (100 if not specified).
        All keys must be from the same drop. Once the drop has no keys left, it is deleted as well.
    */
    #[handle_result]
    pub fn delete_keys(
        &mut self,
        drop_id: DropId,
        public_keys: Option<Vec<PublicKey>>,
        limit: Option<u8>,
    ) -> Result<bool, ClaimError> {
        let caller_id = env::predecessor_account_id();
        let removal = self.drops.delete_keys(
            &mut self.keys,
            &caller_id,
            &drop_id,
            public_keys,
            limit.unwrap_or(DEFAULT_DELETION_LIMIT) as u64,
        )?;

        // Refund the deposits and allowances of every unclaimed use
        self.internal_increment_user_balance(&removal.funder_id, removal.refund);

        if !removal.keys.is_empty() {
            let mut promise = Promise::new(env::current_account_id());
            for (pk, _) in removal.keys.iter() {
                promise = promise.delete_key(pk.clone());
            }
        }

        let mut event_logs = Vec::new();
        if !removal.keys.is_empty() {
            event_logs.push(EventLog::new(EventLogVariant::DeleteKey(
                removal
                    .keys
                    .iter()
                    .map(|(pk, key_id)| key_log(&removal.drop_id, pk, *key_id))
                    .collect(),
            )));
        }
        if removal.drop_deleted {
            event_logs.push(EventLog::new(EventLogVariant::DropDeletion(DropDeletionLog {
                funder_id: removal.funder_id.to_string(),
                drop_id: removal.drop_id.clone(),
            })));
        }
        log_events(event_logs);

        Ok(removal.drop_deleted)
    }
}
