use crate::*;

#[near]
impl ClaimRelay {
    /// Claim the current use of the key that signed the transaction on behalf of `account_id`.
    /// The relayed calls are dispatched once the use is consumed. Their outcome doesn't affect the claim.
    #[handle_result]
    pub fn claim(&mut self, account_id: AccountId) -> Result<bool, ClaimError> {
        self.assert_no_global_freeze()?;

        let ctx = ClaimContext::from_env();
        let public_key = ctx.signer_account_pk.clone();
        let receipt = ClaimEngine::new(&mut self.drops, &mut self.keys).claim(&ctx, &public_key, &account_id)?;

        self.internal_increment_user_balance(&receipt.funder_id, receipt.funder_refund);

        let mut event_logs = vec![EventLog::new(EventLogVariant::Claim(ClaimLog {
            account_id: account_id.to_string(),
            drop_id: receipt.drop_id.clone(),
            public_key: String::from(&public_key),
            use_number: receipt.use_number,
            calls: receipt.calls.clone(),
        }))];

        if receipt.key_retired {
            near_sdk::log!("Key {} has no uses left, deleting it", String::from(&public_key));
            Promise::new(env::current_account_id()).delete_key(public_key.clone());
            event_logs.push(EventLog::new(EventLogVariant::DeleteKey(vec![key_log(
                &receipt.drop_id,
                &public_key,
                receipt.key_id,
            )])));
        }

        log_events(event_logs);
        dispatch_calls(receipt.calls);
        Ok(true)
    }
}

/// Fire the calls one after the other. Nothing waits on the result.
fn dispatch_calls(calls: Vec<OutboundCall>) {
    if let Some(promise) = calls.into_iter().map(OutboundCall::into_promise).reduce(|a, b| a.then(b)) {
        near_sdk::log!("Relaying calls for claim");
        drop(promise);
    }
}
