use crate::*;

/// Maps every live access key to its drop and remaining uses. Keys that ran out of uses are
/// remembered so that they can never be claimed or registered again.
#[derive(BorshDeserialize, BorshSerialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct KeyStore {
    key_info_by_pk: LookupMap<PublicKey, InternalKeyInfo>,
    pks_by_drop: LookupMap<DropId, UnorderedSet<PublicKey>>,
    retired_pks: LookupSet<PublicKey>,
}

impl KeyStore {
    pub fn new() -> Self {
        Self {
            key_info_by_pk: LookupMap::new(StorageKeys::KeyInfoByPk),
            pks_by_drop: LookupMap::new(StorageKeys::PksByDrop),
            retired_pks: LookupSet::new(StorageKeys::RetiredPks),
        }
    }

    /// Whether the key is live or was retired. Either way it cannot be registered again.
    pub fn is_registered(&self, public_key: &PublicKey) -> bool {
        self.key_info_by_pk.contains_key(public_key) || self.retired_pks.contains(public_key)
    }

    pub fn is_retired(&self, public_key: &PublicKey) -> bool {
        self.retired_pks.contains(public_key)
    }

    /// Add a new key to a drop with all of its uses available
    pub fn register(
        &mut self,
        public_key: &PublicKey,
        drop_id: &DropId,
        key_id: KeyId,
        uses: UseNumber,
    ) -> Result<(), ClaimError> {
        if self.is_registered(public_key) {
            return Err(invalid_config!(
                "key {} is already registered",
                String::from(public_key)
            ));
        }

        self.key_info_by_pk.insert(
            public_key,
            &InternalKeyInfo {
                drop_id: drop_id.clone(),
                key_id,
                uses_remaining: uses,
                last_claimed: 0,
            },
        );
        self.add_pk_to_drop(drop_id, public_key);
        Ok(())
    }

    /// The drop a key belongs to and how many uses it has left
    pub fn resolve(&self, public_key: &PublicKey) -> Result<(DropId, UseNumber), ClaimError> {
        self.resolve_info(public_key)
            .map(|info| (info.drop_id, info.uses_remaining))
    }

    /// Full information for a live key
    pub fn resolve_info(&self, public_key: &PublicKey) -> Result<InternalKeyInfo, ClaimError> {
        self.key_info_by_pk
            .get(public_key)
            .ok_or(ClaimError::UnknownKey)
    }

    /// Use up one claim of the key. Once the last use is consumed the key is retired.
    /// Returns how many uses the key has left.
    pub fn consume_one(
        &mut self,
        public_key: &PublicKey,
        claimed_at: u64,
    ) -> Result<UseNumber, ClaimError> {
        if self.retired_pks.contains(public_key) {
            return Err(ClaimError::Exhausted);
        }
        let mut info = self.resolve_info(public_key)?;
        if info.uses_remaining == 0 {
            return Err(ClaimError::Exhausted);
        }

        info.uses_remaining -= 1;
        info.last_claimed = claimed_at;

        if info.uses_remaining == 0 {
            self.key_info_by_pk.remove(public_key);
            self.remove_pk_from_drop(&info.drop_id, public_key);
            self.retired_pks.insert(public_key);
        } else {
            self.key_info_by_pk.insert(public_key, &info);
        }

        Ok(info.uses_remaining)
    }

    /// Remove a live key without retiring it. Used when the funder deletes keys.
    pub fn remove(&mut self, public_key: &PublicKey) -> Option<InternalKeyInfo> {
        let info = self.key_info_by_pk.remove(public_key)?;
        self.remove_pk_from_drop(&info.drop_id, public_key);
        Some(info)
    }

    /// How many live keys a drop has
    pub fn key_supply_for_drop(&self, drop_id: &DropId) -> u64 {
        self.pks_by_drop
            .get(drop_id)
            .map(|set| set.len())
            .unwrap_or(0)
    }

    /// Paginate through the live keys of a drop
    pub fn keys_for_drop(
        &self,
        drop_id: &DropId,
        from_index: u64,
        limit: u64,
    ) -> Vec<(PublicKey, InternalKeyInfo)> {
        let Some(pks) = self.pks_by_drop.get(drop_id) else {
            return vec![];
        };

        pks.iter()
            .skip(page_bound(from_index))
            .take(page_bound(limit))
            .filter_map(|pk| self.key_info_by_pk.get(&pk).map(|info| (pk, info)))
            .collect()
    }

    fn add_pk_to_drop(&mut self, drop_id: &DropId, public_key: &PublicKey) {
        let mut pks = self.pks_by_drop.get(drop_id).unwrap_or_else(|| {
            UnorderedSet::new(StorageKeys::PksByDropInner {
                drop_id_hash: hash_string(drop_id),
            })
        });
        pks.insert(public_key);
        self.pks_by_drop.insert(drop_id, &pks);
    }

    fn remove_pk_from_drop(&mut self, drop_id: &DropId, public_key: &PublicKey) {
        let Some(mut pks) = self.pks_by_drop.get(drop_id) else {
            return;
        };
        pks.remove(public_key);

        // Empty sets are dropped so a drop with the same ID can start from scratch
        if pks.is_empty() {
            self.pks_by_drop.remove(drop_id);
        } else {
            self.pks_by_drop.insert(drop_id, &pks);
        }
    }
}

#[cfg(test)]
mod tests {
    use near_sdk::test_utils::VMContextBuilder;
    use near_sdk::testing_env;

    use super::*;
    use crate::tests::test_utils::pk;

    fn setup() -> KeyStore {
        testing_env!(VMContextBuilder::new().build());
        KeyStore::new()
    }

    #[test]
    fn register_and_resolve() {
        let mut keys = setup();
        keys.register(&pk(1), &"drop".to_string(), 0, 3).unwrap();

        assert_eq!(keys.resolve(&pk(1)), Ok(("drop".to_string(), 3)));
        assert_eq!(keys.resolve(&pk(2)), Err(ClaimError::UnknownKey));
        assert_eq!(keys.key_supply_for_drop(&"drop".to_string()), 1);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut keys = setup();
        keys.register(&pk(1), &"a".to_string(), 0, 1).unwrap();
        let err = keys.register(&pk(1), &"b".to_string(), 0, 1).unwrap_err();
        assert!(matches!(err, ClaimError::InvalidConfig(_)));
        assert_eq!(keys.resolve(&pk(1)), Ok(("a".to_string(), 1)));
    }

    #[test]
    fn consume_until_retired() {
        let mut keys = setup();
        keys.register(&pk(1), &"drop".to_string(), 7, 2).unwrap();

        assert_eq!(keys.consume_one(&pk(1), 10), Ok(1));
        assert_eq!(keys.resolve_info(&pk(1)).unwrap().last_claimed, 10);
        assert_eq!(keys.consume_one(&pk(1), 20), Ok(0));

        assert!(keys.is_retired(&pk(1)));
        assert_eq!(keys.resolve(&pk(1)), Err(ClaimError::UnknownKey));
        assert_eq!(keys.consume_one(&pk(1), 30), Err(ClaimError::Exhausted));
        assert_eq!(keys.key_supply_for_drop(&"drop".to_string()), 0);

        // Retired keys stay burnt
        let err = keys.register(&pk(1), &"other".to_string(), 0, 1).unwrap_err();
        assert!(matches!(err, ClaimError::InvalidConfig(_)));
    }

    #[test]
    fn consume_unknown_key() {
        let mut keys = setup();
        assert_eq!(keys.consume_one(&pk(9), 0), Err(ClaimError::UnknownKey));
    }

    #[test]
    fn removed_keys_are_not_retired() {
        let mut keys = setup();
        keys.register(&pk(1), &"drop".to_string(), 0, 2).unwrap();
        keys.register(&pk(2), &"drop".to_string(), 1, 2).unwrap();

        let removed = keys.remove(&pk(1)).unwrap();
        assert_eq!(removed.key_id, 0);
        assert!(!keys.is_registered(&pk(1)));
        assert_eq!(keys.remove(&pk(1)), None);

        let listed = keys.keys_for_drop(&"drop".to_string(), 0, 10);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].0, pk(2));
    }
}
