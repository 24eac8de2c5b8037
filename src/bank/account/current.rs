use crate::bank::Amount;

use super::account::{Account, Kind};
use rust_decimal_macros::dec;

impl Account {
    pub fn overdraft_limit(&self) -> Option<Amount> {
        match self.kind {
            Kind::Current { overdraft_limit } => Some(overdraft_limit),
            _ => None,
        }
    }

    /// A current account is in overdraft as soon as its balance is negative,
    /// whatever its overdraft limit. Other kinds of accounts never are.
    pub fn is_overdraft(&self) -> bool {
        matches!(self.kind, Kind::Current { .. }) && self.balance() < dec!(0)
    }
}
