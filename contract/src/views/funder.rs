use crate::*;

#[near]
impl ClaimRelay {
    /// Returns the total supply of active drops for a given funder
    pub fn get_drop_supply_for_funder(&self, account_id: AccountId) -> u64 {
        self.drops.drop_supply_for_funder(&account_id)
    }

    /// Return a vector of drop information for a funder
    pub fn get_drops_for_funder(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<ExtDrop> {
        // Where to start pagination - if we have a from_index, we'll use that - otherwise start from 0 index
        let start = pagination_start(from_index);

        self.drops
            .drop_ids_for_funder(&account_id, start, limit.unwrap_or(DEFAULT_PAGINATION_LIMIT))
            .into_iter()
            .filter_map(|drop_id| {
                let drop = self.drops.get_drop(&drop_id).ok()?;
                Some(drop.to_external_drop(self.keys.key_supply_for_drop(&drop_id)))
            })
            .collect()
    }
}
