use crate::*;

#[near]
impl ClaimRelay {
    /// Allows you to query for the information about a specific drop
    ///
    /// Requirements:
    /// * Fails with `NotFound` if the drop does not exist.
    ///
    /// Returns the `ExtDrop` information
    #[handle_result]
    pub fn get_drop_information(&self, drop_id: DropId) -> Result<ExtDrop, ClaimError> {
        let drop = self.drops.get_drop(&drop_id)?;
        Ok(drop.to_external_drop(self.keys.key_supply_for_drop(&drop_id)))
    }

    /// Allows you to query for the number of live keys in a drop
    ///
    /// Requirements:
    /// * Fails with `NotFound` if the drop does not exist.
    #[handle_result]
    pub fn get_key_supply_for_drop(&self, drop_id: DropId) -> Result<u64, ClaimError> {
        if !self.drops.contains(&drop_id) {
            return Err(ClaimError::NotFound(drop_id));
        }
        Ok(self.keys.key_supply_for_drop(&drop_id))
    }

    /// Allows you to paginate through live keys in a drop
    ///
    /// Arguments:
    /// * `from_index` where to start paginating from. If not specified, will start from 0 index.
    /// * `limit` how many keys to return. If not specified, will return 50 keys.
    #[handle_result]
    pub fn get_keys_for_drop(
        &self,
        drop_id: DropId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Result<Vec<ExtKeyInfo>, ClaimError> {
        if !self.drops.contains(&drop_id) {
            return Err(ClaimError::NotFound(drop_id));
        }

        let start = pagination_start(from_index);
        Ok(self
            .keys
            .keys_for_drop(&drop_id, start, limit.unwrap_or(DEFAULT_PAGINATION_LIMIT))
            .into_iter()
            .map(|(pk, info)| info.to_external_key_info(pk))
            .collect())
    }
}
