use crate::*;

#[near]
impl ClaimRelay {
    /// Replace the limits and allowances used for new drops. Existing drops keep the allowance they were funded with.
    #[handle_result]
    pub fn set_config(&mut self, config: ContractConfig) -> Result<(), ClaimError> {
        self.assert_owner()?;
        config.validate()?;
        near_sdk::log!("Config updated: {:?}", config);
        self.config = config;
        Ok(())
    }

    pub fn get_config(&self) -> ContractConfig {
        self.config.clone()
    }

    /// Set the contract to be frozen thus not allowing any drops to be created, keys added or claimed
    #[handle_result]
    pub fn freeze_contract(&mut self) -> Result<(), ClaimError> {
        self.assert_owner()?;
        self.global_freeze = true;
        Ok(())
    }

    /// Set the contract to be unfrozen thus resuming the ability for drops and keys to be created and claimed
    #[handle_result]
    pub fn unfreeze_contract(&mut self) -> Result<(), ClaimError> {
        self.assert_owner()?;
        self.global_freeze = false;
        Ok(())
    }

    pub fn is_frozen(&self) -> bool {
        self.global_freeze
    }
}

impl ClaimRelay {
    /// Helper method to check if the predecessor is the current contract owner
    pub(crate) fn assert_owner(&self) -> Result<(), ClaimError> {
        if env::predecessor_account_id() != self.owner_id {
            return Err(ClaimError::Unauthorized);
        }
        Ok(())
    }

    pub(crate) fn assert_no_global_freeze(&self) -> Result<(), ClaimError> {
        if self.global_freeze {
            return Err(ClaimError::ContractFrozen);
        }
        Ok(())
    }
}
