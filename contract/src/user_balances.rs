use crate::*;

#[near]
impl ClaimRelay {
    /// Allows users to add to their balance. This is to prepay and cover drop costs
    #[payable]
    pub fn add_to_balance(&mut self) {
        // Get the attached_deposit value which is how much the user wants to add to their balance
        let attached_deposit = env::attached_deposit().as_yoctonear();

        self.internal_increment_user_balance(&env::predecessor_account_id(), attached_deposit);
    }

    /// Allows users to withdraw their balance. Withdraws everything if no amount is passed in.
    #[handle_result]
    pub fn withdraw_from_balance(&mut self, amount_to_withdraw: Option<U128>) -> Result<(), ClaimError> {
        // The account to withdraw to is always the predecessor
        let owner_id = env::predecessor_account_id();
        let cur_balance = self.user_balances.get(&owner_id).unwrap_or(0);

        let amount = amount_to_withdraw.map(|x| x.0).unwrap_or(cur_balance);
        if amount == 0 {
            return Ok(());
        }

        self.internal_decrement_user_balance(&owner_id, amount)?;
        Promise::new(owner_id).transfer(NearToken::from_yoctonear(amount));
        Ok(())
    }

    /// Return the current balance for a given account
    pub fn get_user_balance(&self, account_id: AccountId) -> U128 {
        U128(self.user_balances.get(&account_id).unwrap_or(0))
    }
}

impl ClaimRelay {
    pub(crate) fn internal_increment_user_balance(&mut self, account_id: &AccountId, amount: u128) {
        if amount == 0 {
            return;
        }

        let balance = self.user_balances.get(account_id).unwrap_or(0);
        near_sdk::log!(
            "User balance incremented by {}. Old: {} new: {}",
            yocto_to_near(amount),
            yocto_to_near(balance),
            yocto_to_near(balance.saturating_add(amount))
        );
        self.user_balances
            .insert(account_id, &balance.saturating_add(amount));
    }

    pub(crate) fn internal_decrement_user_balance(&mut self, account_id: &AccountId, amount: u128) -> Result<(), ClaimError> {
        if amount == 0 {
            return Ok(());
        }

        let balance = self.user_balances.get(account_id).unwrap_or(0);
        let new_balance = balance
            .checked_sub(amount)
            .ok_or(ClaimError::InsufficientDeposit { required: amount, available: balance })?;
        near_sdk::log!(
            "User balance decremented by {}. Old: {} new: {}",
            yocto_to_near(amount),
            yocto_to_near(balance),
            yocto_to_near(new_balance)
        );

        if new_balance == 0 {
            self.user_balances.remove(account_id);
        } else {
            self.user_balances.insert(account_id, &new_balance);
        }
        Ok(())
    }

    /// Everything a funder can spend right now: the attached deposit plus their balance
    pub(crate) fn internal_available_funds(&self, account_id: &AccountId, attached_deposit: u128) -> u128 {
        attached_deposit.saturating_add(self.user_balances.get(account_id).unwrap_or(0))
    }

    /// Pay for something out of the attached deposit first and the user's balance second.
    /// Excess deposit is credited to the user's balance.
    pub(crate) fn charge_with_deposit_or_balance(
        &mut self,
        account_id: &AccountId,
        attached_deposit: u128,
        required_deposit: u128,
    ) -> Result<(), ClaimError> {
        // In the case that the attached deposit covers what is required, keep the excess for the user
        if let Some(excess) = attached_deposit.checked_sub(required_deposit) {
            self.internal_increment_user_balance(account_id, excess);
            return Ok(());
        }

        // In the case that the attached deposit is less than the required, check user balance
        let required_deposit_left = required_deposit - attached_deposit;
        self.internal_decrement_user_balance(account_id, required_deposit_left)
            .map_err(|_| ClaimError::InsufficientDeposit {
                required: required_deposit,
                available: self.internal_available_funds(account_id, attached_deposit),
            })
    }
}
