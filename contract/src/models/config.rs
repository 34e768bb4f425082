use crate::*;

/// Global limits and allowances applied to every drop on the contract. Only the owner can change them.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[borsh(crate = "near_sdk::borsh")]
#[serde(crate = "near_sdk::serde")]
pub struct ContractConfig {
    /// Gas allowance (in yoctoNEAR) given to a key for every use it has. Funders pay for this on top of the deposit.
    pub allowance_per_use: U128,
    /// Maximum number of keys that can be passed into `create_drop` or `add_keys`
    pub max_keys_per_call: u32,
    /// Maximum number of methods that a single use can relay
    pub max_methods_per_use: u32,
    /// Maximum length of the stringified args of a method
    pub max_args_len: u32,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            allowance_per_use: U128(DEFAULT_ALLOWANCE_PER_USE),
            max_keys_per_call: DEFAULT_MAX_KEYS_PER_CALL,
            max_methods_per_use: DEFAULT_MAX_METHODS_PER_USE,
            max_args_len: DEFAULT_MAX_ARGS_LEN,
        }
    }
}

impl ContractConfig {
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.allowance_per_use.0 == 0 {
            return Err(invalid_config!("allowance_per_use must be greater than 0"));
        }
        if self.max_keys_per_call == 0 {
            return Err(invalid_config!("max_keys_per_call must be greater than 0"));
        }
        if self.max_methods_per_use == 0 {
            return Err(invalid_config!("max_methods_per_use must be greater than 0"));
        }
        if self.max_args_len == 0 {
            return Err(invalid_config!("max_args_len must be greater than 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ContractConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_limits_are_rejected() {
        let config = ContractConfig {
            allowance_per_use: U128(0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ClaimError::InvalidConfig(_))));

        let config = ContractConfig {
            max_keys_per_call: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ClaimError::InvalidConfig(_))));
    }
}
