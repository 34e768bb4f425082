use crate::*;

/// Everything the runtime tells us about the receipt that is claiming a key
#[derive(Debug, Clone)]
pub struct ClaimContext {
    pub current_account_id: AccountId,
    pub predecessor_account_id: AccountId,
    pub signer_account_pk: PublicKey,
    pub prepaid_gas: Gas,
    pub block_timestamp: u64,
}

impl ClaimContext {
    pub fn from_env() -> Self {
        Self {
            current_account_id: env::current_account_id(),
            predecessor_account_id: env::predecessor_account_id(),
            signer_account_pk: env::signer_account_pk(),
            prepaid_gas: env::prepaid_gas(),
            block_timestamp: env::block_timestamp(),
        }
    }
}

/// Outcome of a successful claim. The calls still need to be dispatched.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimReceipt {
    pub drop_id: DropId,
    pub funder_id: AccountId,
    pub key_id: KeyId,
    /// Which use of the key was consumed (starting at 1)
    pub use_number: UseNumber,
    /// The key has no uses left and should be removed from the account
    pub key_retired: bool,
    /// Part of the use's deposit that wasn't attached to any call. Goes back to the funder's balance.
    pub funder_refund: u128,
    /// Calls to dispatch, in order
    pub calls: Vec<OutboundCall>,
}

/// Turns a presented key into the calls of its current use.
///
/// Every check and every payload is done before anything is written: a claim either consumes
/// exactly one use, releases that use's escrow and returns the calls, or fails and leaves the
/// stores untouched.
pub struct ClaimEngine<'a> {
    drops: &'a mut DropStore,
    keys: &'a mut KeyStore,
}

impl<'a> ClaimEngine<'a> {
    pub fn new(drops: &'a mut DropStore, keys: &'a mut KeyStore) -> Self {
        Self { drops, keys }
    }

    pub fn claim(
        &mut self,
        ctx: &ClaimContext,
        public_key: &PublicKey,
        account_id: &AccountId,
    ) -> Result<ClaimReceipt, ClaimError> {
        // Access keys can only call `claim` on this contract, so the claim has to come from the contract itself
        // and be signed by the very key being claimed
        if ctx.predecessor_account_id != ctx.current_account_id || ctx.signer_account_pk != *public_key {
            return Err(ClaimError::Unauthenticated);
        }

        let key_info = self.keys.resolve_info(public_key).map_err(|e| {
            if self.keys.is_retired(public_key) {
                ClaimError::Exhausted
            } else {
                e
            }
        })?;

        let mut drop = self
            .drops
            .get_drop(&key_info.drop_id)
            .map_err(|_| invalid_config!("key belongs to drop {} which does not exist", key_info.drop_id))?;

        let use_number = drop.use_number_for(key_info.uses_remaining)?;
        let methods = drop.methods_for_use(use_number)?;

        let required_gas = methods
            .iter()
            .try_fold(BASE_GAS_FOR_CLAIM, |total, method| total.checked_add(method.required_gas()))
            .ok_or_else(|| invalid_config!("required gas overflows"))?;
        if ctx.prepaid_gas < required_gas {
            return Err(ClaimError::InsufficientGas {
                required: required_gas,
                prepaid: ctx.prepaid_gas,
            });
        }

        let ids = InjectedIdentities {
            account_id,
            funder_id: &drop.funder_id,
            drop_id: &drop.drop_id,
            key_id: key_info.key_id,
        };
        let calls = methods
            .iter()
            .map(|method| build_outbound_call(method, &ids))
            .collect::<Result<Vec<_>, _>>()?;

        let attached: u128 = calls
            .iter()
            .try_fold(0u128, |total, call| total.checked_add(call.attached_deposit.as_yoctonear()))
            .ok_or_else(|| invalid_config!("attached deposits overflow"))?;
        let funder_refund = drop
            .deposit_per_use
            .checked_sub(attached)
            .ok_or_else(|| invalid_config!("use {} attaches more than the deposit per use", use_number))?;
        let escrow = drop
            .escrow
            .checked_sub(drop.deposit_per_use)
            .ok_or_else(|| invalid_config!("escrow of drop {} is short", drop.drop_id))?;

        // Nothing below can fail once the key is consumed
        let uses_left = self.keys.consume_one(public_key, ctx.block_timestamp)?;
        drop.escrow = escrow;
        self.drops.save(&drop);

        Ok(ClaimReceipt {
            drop_id: drop.drop_id,
            funder_id: drop.funder_id,
            key_id: key_info.key_id,
            use_number,
            key_retired: uses_left == 0,
            funder_refund,
            calls,
        })
    }
}
