use crate::*;

/// Everything the contract knows about a live access key
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, PartialEq)]
#[borsh(crate = "near_sdk::borsh")]
pub struct InternalKeyInfo {
    /// Drop the key belongs to
    pub drop_id: DropId,
    /// Nonce of the key within its drop
    pub key_id: KeyId,
    /// How many uses this key has left. Once 0 is reached, the key is retired
    pub uses_remaining: UseNumber,
    /// Block timestamp of the last claim. 0 if the key was never claimed
    pub last_claimed: u64,
}

impl InternalKeyInfo {
    pub fn to_external_key_info(&self, public_key: PublicKey) -> ExtKeyInfo {
        ExtKeyInfo {
            public_key,
            drop_id: self.drop_id.clone(),
            key_id: self.key_id,
            uses_remaining: self.uses_remaining,
            last_claimed: U64(self.last_claimed),
        }
    }
}

/// Key information returned by the views
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct ExtKeyInfo {
    pub public_key: PublicKey,
    pub drop_id: DropId,
    pub key_id: KeyId,
    pub uses_remaining: UseNumber,
    pub last_claimed: U64,
}
