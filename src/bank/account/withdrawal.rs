use crate::bank::Amount;

use super::account::{Account, AccountError};

impl Account {
    /// Debit `amount` from the account.
    ///
    /// There is no check against the available funds, nor against the
    /// overdraft limit of a current account: the balance may go as negative
    /// as the caller wants it to.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        Self::validate(amount)?;
        self.balance.subtract(amount)
    }
}
