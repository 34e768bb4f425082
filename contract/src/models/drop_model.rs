use crate::*;

/// Internal representation of a drop. This is what gets stored on the contract.
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug, PartialEq)]
#[borsh(crate = "near_sdk::borsh")]
pub struct InternalDrop {
    /// Unique identifier chosen by the funder
    pub drop_id: DropId,
    /// Account that created and paid for the drop. Never changes.
    pub funder_id: AccountId,
    /// How much $NEAR is reserved for every use. The attached deposits of the methods are paid out of this.
    pub deposit_per_use: u128,
    /// Gas allowance given to the access keys for every use, fixed at creation
    pub allowance_per_use: u128,
    /// How many times each key can be claimed
    pub uses_per_key: UseNumber,
    /// Either a single set of methods called for every use, or one set per use
    pub methods_by_use: Vec<Vec<MethodData>>,
    /// $NEAR still held for the unclaimed uses of the drop's keys
    pub escrow: u128,
    /// Key ID handed out to the next key added to the drop
    pub next_key_id: KeyId,
    /// Set by the funder. Not interpreted by the contract.
    pub metadata: Option<DropMetadata>,
}

impl InternalDrop {
    /// Which use of a key is about to be consumed given how many uses it has left (starting at 1)
    pub fn use_number_for(&self, uses_remaining: UseNumber) -> Result<UseNumber, ClaimError> {
        if uses_remaining == 0 {
            return Err(ClaimError::Exhausted);
        }
        if uses_remaining > self.uses_per_key {
            return Err(invalid_config!(
                "key has {} uses remaining but the drop only allows {}",
                uses_remaining,
                self.uses_per_key
            ));
        }
        Ok(self.uses_per_key - uses_remaining + 1)
    }

    /// Get the methods that should be called for a given use
    pub fn methods_for_use(&self, use_number: UseNumber) -> Result<&Vec<MethodData>, ClaimError> {
        if use_number == 0 || use_number > self.uses_per_key {
            return Err(invalid_config!("use number {} is out of range", use_number));
        }

        let methods = match self.methods_by_use.len() {
            1 => &self.methods_by_use[0],
            n if n == self.uses_per_key as usize => &self.methods_by_use[(use_number - 1) as usize],
            n => {
                return Err(invalid_config!(
                    "drop has {} method sets for {} uses",
                    n,
                    self.uses_per_key
                ))
            }
        };

        if methods.is_empty() {
            return Err(invalid_config!("use {} has no methods", use_number));
        }
        Ok(methods)
    }

    /// Total cost of funding a batch of keys: their deposits plus their allowances for every use
    pub fn funding_for_keys(&self, num_keys: usize) -> Result<u128, ClaimError> {
        let per_key = self
            .deposit_per_use
            .checked_add(self.allowance_per_use)
            .and_then(|per_use| per_use.checked_mul(self.uses_per_key as u128))
            .ok_or_else(|| invalid_config!("funding per key overflows"))?;
        per_key
            .checked_mul(num_keys as u128)
            .ok_or_else(|| invalid_config!("funding for {} keys overflows", num_keys))
    }

    /// Convert an `InternalDrop` into an `ExtDrop`
    pub fn to_external_drop(&self, key_supply: u64) -> ExtDrop {
        ExtDrop {
            drop_id: self.drop_id.clone(),
            funder_id: self.funder_id.clone(),
            deposit_per_use: U128(self.deposit_per_use),
            allowance_per_use: U128(self.allowance_per_use),
            uses_per_key: self.uses_per_key,
            methods_by_use: self.methods_by_use.clone(),
            escrow: U128(self.escrow),
            next_key_id: self.next_key_id,
            key_supply,
            metadata: self.metadata.clone(),
        }
    }
}

/// Drop information returned by the views
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct ExtDrop {
    pub drop_id: DropId,
    pub funder_id: AccountId,
    pub deposit_per_use: U128,
    pub allowance_per_use: U128,
    pub uses_per_key: UseNumber,
    pub methods_by_use: Vec<Vec<MethodData>>,
    pub escrow: U128,
    pub next_key_id: KeyId,
    /// How many live keys the drop has
    pub key_supply: u64,
    pub metadata: Option<DropMetadata>,
}
