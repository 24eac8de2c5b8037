use crate::bank::Amount;

use super::account::{Account, AccountError};

impl Account {
    /// Credit `amount` to the account. The balance is left untouched when the
    /// amount isn't strictly positive.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        Self::validate(amount)?;
        self.balance.add(amount)
    }

    /// Whether a deposit of `amount` would be applied.
    pub fn can_deposit(&self, amount: Amount) -> Result<(), AccountError> {
        Self::validate(amount)?;
        if !self.balance.can_add(amount) {
            return Err(AccountError::Overflow);
        }

        Ok(())
    }
}
