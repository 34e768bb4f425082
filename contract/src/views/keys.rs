use crate::*;

#[near]
impl ClaimRelay {
    /// Returns the information for a live key. Fails with `UnknownKey` for keys that were never
    /// added, were deleted or have no uses left.
    #[handle_result]
    pub fn get_key_information(&self, key: PublicKey) -> Result<ExtKeyInfo, ClaimError> {
        let info = self.keys.resolve_info(&key)?;
        Ok(info.to_external_key_info(key))
    }

    /// Whether a key has used up all of its claims
    pub fn is_key_retired(&self, key: PublicKey) -> bool {
        self.keys.is_retired(&key)
    }
}
