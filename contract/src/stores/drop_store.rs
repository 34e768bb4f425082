use std::collections::HashSet;

use crate::*;

/// Everything a funder passes in when creating a drop
#[derive(Debug, Clone)]
pub struct NewDrop {
    pub drop_id: DropId,
    pub funder_id: AccountId,
    pub deposit_per_use: u128,
    pub uses_per_key: UseNumber,
    pub methods_by_use: Vec<Vec<MethodData>>,
    pub metadata: Option<DropMetadata>,
}

/// Keys that were just registered for a drop and what they cost
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBatch {
    pub drop_id: DropId,
    pub funder_id: AccountId,
    /// Public keys and the key IDs they received, in the order they were passed in
    pub keys: Vec<(PublicKey, KeyId)>,
    /// Deposits plus allowances for every use of every key
    pub required_funding: u128,
    /// Gas allowance each access key should be given
    pub allowance_per_key: u128,
}

/// Keys that were removed from a drop and what the funder gets back
#[derive(Debug, Clone, PartialEq)]
pub struct KeyRemoval {
    pub drop_id: DropId,
    pub funder_id: AccountId,
    pub keys: Vec<(PublicKey, KeyId)>,
    /// Deposits and allowances of the uses that were never claimed
    pub refund: u128,
    /// The drop had no keys left and was removed
    pub drop_deleted: bool,
}

/// Every drop on the contract indexed by ID and by funder.
#[derive(BorshDeserialize, BorshSerialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct DropStore {
    drop_by_id: LookupMap<DropId, InternalDrop>,
    drop_ids_by_funder: LookupMap<AccountId, UnorderedSet<DropId>>,
}

impl DropStore {
    pub fn new() -> Self {
        Self {
            drop_by_id: LookupMap::new(StorageKeys::DropById),
            drop_ids_by_funder: LookupMap::new(StorageKeys::DropIdsByFunder),
        }
    }

    pub fn get_drop(&self, drop_id: &DropId) -> Result<InternalDrop, ClaimError> {
        self.drop_by_id
            .get(drop_id)
            .ok_or_else(|| ClaimError::NotFound(drop_id.clone()))
    }

    pub fn contains(&self, drop_id: &DropId) -> bool {
        self.drop_by_id.contains_key(drop_id)
    }

    /// Persist a drop whose accounting changed
    pub(crate) fn save(&mut self, drop: &InternalDrop) {
        self.drop_by_id.insert(&drop.drop_id, drop);
    }

    /// Validate and store a new drop along with its keys. `available_funds` is everything the funder can
    /// spend (attached deposit and balance). Nothing is stored unless the drop is valid and fully funded.
    pub fn create_drop(
        &mut self,
        keys: &mut KeyStore,
        config: &ContractConfig,
        new_drop: NewDrop,
        public_keys: &[PublicKey],
        available_funds: u128,
    ) -> Result<KeyBatch, ClaimError> {
        let NewDrop { drop_id, funder_id, deposit_per_use, uses_per_key, methods_by_use, metadata } = new_drop;

        self.validate_drop_id(&drop_id)?;
        validate_methods_by_use(&methods_by_use, uses_per_key, deposit_per_use, config)?;
        validate_key_batch(keys, config, public_keys)?;

        let mut drop = InternalDrop {
            drop_id,
            funder_id,
            deposit_per_use,
            allowance_per_use: config.allowance_per_use.0,
            uses_per_key,
            methods_by_use,
            escrow: 0,
            next_key_id: 0,
            metadata,
        };

        let batch = self.register_keys(keys, &mut drop, public_keys, available_funds)?;
        self.internal_add_drop_to_funder(&drop.funder_id, &drop.drop_id);
        self.save(&drop);
        Ok(batch)
    }

    /// Add more keys to an existing drop. Only the funder can do this.
    pub fn add_keys(
        &mut self,
        keys: &mut KeyStore,
        config: &ContractConfig,
        caller: &AccountId,
        drop_id: &DropId,
        public_keys: &[PublicKey],
        available_funds: u128,
    ) -> Result<KeyBatch, ClaimError> {
        let mut drop = self.get_drop(drop_id)?;
        if drop.funder_id != *caller {
            return Err(ClaimError::Unauthorized);
        }
        if public_keys.is_empty() {
            return Err(invalid_config!("no keys to add"));
        }
        validate_key_batch(keys, config, public_keys)?;

        let batch = self.register_keys(keys, &mut drop, public_keys, available_funds)?;
        self.save(&drop);
        Ok(batch)
    }

    /// Remove keys from a drop and release the escrow of their remaining uses. If no keys are passed
    /// in, up to `limit` keys of the drop are removed. The drop itself is removed once it has no keys.
    pub fn delete_keys(
        &mut self,
        keys: &mut KeyStore,
        caller: &AccountId,
        drop_id: &DropId,
        public_keys: Option<Vec<PublicKey>>,
        limit: u64,
    ) -> Result<KeyRemoval, ClaimError> {
        let mut drop = self.get_drop(drop_id)?;
        if drop.funder_id != *caller {
            return Err(ClaimError::Unauthorized);
        }

        let targets = match public_keys {
            Some(pks) => pks,
            None => keys
                .keys_for_drop(drop_id, 0, limit)
                .into_iter()
                .map(|(pk, _)| pk)
                .collect(),
        };

        // Every key has to belong to the drop before anything is removed
        let mut seen = HashSet::new();
        let mut to_remove = Vec::with_capacity(targets.len());
        for pk in targets {
            if !seen.insert(pk.clone()) {
                return Err(invalid_config!("key {} passed in twice", String::from(&pk)));
            }
            let info = keys.resolve_info(&pk)?;
            if info.drop_id != *drop_id {
                return Err(invalid_config!("key {} does not belong to drop {}", String::from(&pk), drop_id));
            }
            to_remove.push((pk, info));
        }

        let mut refund: u128 = 0;
        let mut removed = Vec::with_capacity(to_remove.len());
        for (pk, info) in to_remove {
            let remaining = info.uses_remaining as u128;
            let held = drop
                .deposit_per_use
                .checked_mul(remaining)
                .ok_or_else(|| invalid_config!("escrow overflows"))?;
            drop.escrow = drop
                .escrow
                .checked_sub(held)
                .ok_or_else(|| invalid_config!("escrow of drop {} is short", drop_id))?;
            refund = refund
                .checked_add(held)
                .and_then(|r| r.checked_add(drop.allowance_per_use.checked_mul(remaining)?))
                .ok_or_else(|| invalid_config!("refund overflows"))?;

            keys.remove(&pk);
            removed.push((pk, info.key_id));
        }

        let drop_deleted = keys.key_supply_for_drop(drop_id) == 0;
        if drop_deleted {
            refund = refund
                .checked_add(drop.escrow)
                .ok_or_else(|| invalid_config!("refund overflows"))?;
            self.drop_by_id.remove(drop_id);
            self.internal_remove_drop_for_funder(&drop.funder_id, drop_id);
        } else {
            self.save(&drop);
        }

        Ok(KeyRemoval {
            drop_id: drop_id.clone(),
            funder_id: drop.funder_id,
            keys: removed,
            refund,
            drop_deleted,
        })
    }

    /// Paginate through the drop IDs of a funder
    pub fn drop_ids_for_funder(&self, funder_id: &AccountId, from_index: u64, limit: u64) -> Vec<DropId> {
        let Some(drop_ids) = self.drop_ids_by_funder.get(funder_id) else {
            return vec![];
        };

        drop_ids
            .iter()
            .skip(page_bound(from_index))
            .take(page_bound(limit))
            .collect()
    }

    pub fn drop_supply_for_funder(&self, funder_id: &AccountId) -> u64 {
        self.drop_ids_by_funder
            .get(funder_id)
            .map(|set| set.len())
            .unwrap_or(0)
    }

    fn validate_drop_id(&self, drop_id: &DropId) -> Result<(), ClaimError> {
        if drop_id.is_empty() {
            return Err(invalid_config!("drop ID cannot be empty"));
        }
        if drop_id.contains(DROP_ID_FORBIDDEN_CHAR) {
            return Err(invalid_config!(
                "drop ID {} cannot contain {}",
                drop_id,
                DROP_ID_FORBIDDEN_CHAR
            ));
        }
        if self.contains(drop_id) {
            return Err(invalid_config!("drop ID {} already exists", drop_id));
        }
        Ok(())
    }

    /// Charge for a batch of keys and register them. Callers have already validated the batch.
    fn register_keys(
        &mut self,
        keys: &mut KeyStore,
        drop: &mut InternalDrop,
        public_keys: &[PublicKey],
        available_funds: u128,
    ) -> Result<KeyBatch, ClaimError> {
        let required_funding = drop.funding_for_keys(public_keys.len())?;
        if required_funding > available_funds {
            return Err(ClaimError::InsufficientDeposit {
                required: required_funding,
                available: available_funds,
            });
        }

        let added_escrow = drop
            .deposit_per_use
            .checked_mul(drop.uses_per_key as u128)
            .and_then(|per_key| per_key.checked_mul(public_keys.len() as u128))
            .and_then(|added| added.checked_add(drop.escrow))
            .ok_or_else(|| invalid_config!("escrow overflows"))?;
        let allowance_per_key = drop
            .allowance_per_use
            .checked_mul(drop.uses_per_key as u128)
            .ok_or_else(|| invalid_config!("allowance overflows"))?;

        let mut registered = Vec::with_capacity(public_keys.len());
        for pk in public_keys {
            let key_id = drop.next_key_id;
            keys.register(pk, &drop.drop_id, key_id, drop.uses_per_key)?;
            drop.next_key_id += 1;
            registered.push((pk.clone(), key_id));
        }
        drop.escrow = added_escrow;

        Ok(KeyBatch {
            drop_id: drop.drop_id.clone(),
            funder_id: drop.funder_id.clone(),
            keys: registered,
            required_funding,
            allowance_per_key,
        })
    }

    /// Add a drop ID to the set of drops a funder has
    fn internal_add_drop_to_funder(&mut self, funder_id: &AccountId, drop_id: &DropId) {
        //get the set of drops for the given account
        let mut drop_set = self.drop_ids_by_funder.get(funder_id).unwrap_or_else(|| {
            //if the account doesn't have any drops, we create a new unordered set
            UnorderedSet::new(StorageKeys::DropIdsByFunderInner {
                //we get a new unique prefix for the collection
                account_id_hash: hash_string(funder_id.as_str()),
            })
        });

        drop_set.insert(drop_id);
        self.drop_ids_by_funder.insert(funder_id, &drop_set);
    }

    /// Remove a drop ID from the set of drops a funder has
    fn internal_remove_drop_for_funder(&mut self, funder_id: &AccountId, drop_id: &DropId) {
        let Some(mut drop_set) = self.drop_ids_by_funder.get(funder_id) else {
            return;
        };

        drop_set.remove(drop_id);

        //if the set is now empty, we remove the funder from the drop_ids_by_funder collection
        if drop_set.is_empty() {
            self.drop_ids_by_funder.remove(funder_id);
        } else {
            self.drop_ids_by_funder.insert(funder_id, &drop_set);
        }
    }
}

/// A batch of keys must be within the configured size, have no duplicates and contain no key that
/// was ever registered before.
fn validate_key_batch(
    keys: &KeyStore,
    config: &ContractConfig,
    public_keys: &[PublicKey],
) -> Result<(), ClaimError> {
    if public_keys.len() > config.max_keys_per_call as usize {
        return Err(invalid_config!(
            "{} keys exceeds the limit of {} per call",
            public_keys.len(),
            config.max_keys_per_call
        ));
    }

    let mut seen = HashSet::new();
    for pk in public_keys {
        if !seen.insert(pk) {
            return Err(invalid_config!("key {} passed in twice", String::from(pk)));
        }
        if keys.is_registered(pk) {
            return Err(invalid_config!("key {} is already registered", String::from(pk)));
        }
    }
    Ok(())
}
