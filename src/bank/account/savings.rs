use crate::bank::Rate;

use super::account::{Account, Kind};

impl Account {
    /// Interest rate of a savings account, in percent.
    pub fn interest_rate(&self) -> Option<Rate> {
        match self.kind {
            Kind::Savings { interest_rate } => Some(interest_rate),
            _ => None,
        }
    }

    /// Add `balance * rate / 100` to the balance of a savings account.
    ///
    /// Rates aren't validated: a zero rate changes nothing and a negative
    /// one shrinks the balance. Other kinds of accounts are left unchanged.
    pub fn add_interest(&mut self) {
        if let Kind::Savings { interest_rate } = self.kind {
            self.balance.grow(interest_rate);
        }
    }
}
