use crate::bank::{AccountNumber, Amount, Rate};

use super::balance::Balance;
use rust_decimal_macros::dec;
use std::fmt;

/// Errors an account refuses to apply a movement with.
///
/// Note: I chose to keep errors simple here. The account number isn't part of
/// the error, since the caller always knows which account it was moving money
/// on.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AccountError {
    /// Deposits and withdrawals only accept strictly positive amounts.
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Amount),

    /// Moving this much money would overflow the balance.
    #[error("balance would overflow")]
    Overflow,
}

/// What kind of account this is, and the figures that only make sense for
/// that kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    /// A plain account: deposits and withdrawals, nothing else.
    Basic,

    /// Accrues `interest_rate` percent of its balance on every update.
    Savings { interest_rate: Rate },

    /// Reports itself on every update while its balance is negative.
    /// The overdraft limit is informational: withdrawals past it are
    /// still applied.
    Current { overdraft_limit: Amount },
}

/// A single account: an immutable account number, a balance, and the
/// figures specific to its kind.
///
/// The balance is allowed to go negative: withdrawals are never checked
/// against the available funds or the overdraft limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: AccountNumber,
    pub(super) balance: Balance,
    pub(super) kind: Kind,
}

/// Raised by the periodic update of a current account in overdraft.
#[derive(Debug, Clone, PartialEq)]
pub struct OverdraftNotice {
    pub account_number: AccountNumber,
}

impl fmt::Display for OverdraftNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account number {} is in overdraft. Please take action.",
            self.account_number
        )
    }
}

impl Account {
    /// Open an empty basic account.
    pub fn create(account_number: impl Into<AccountNumber>) -> Self {
        Self::new(dec!(0), account_number)
    }

    pub fn new(balance: Amount, account_number: impl Into<AccountNumber>) -> Self {
        Self::with_kind(balance, account_number, Kind::Basic)
    }

    pub fn savings(
        balance: Amount,
        account_number: impl Into<AccountNumber>,
        interest_rate: Rate,
    ) -> Self {
        Self::with_kind(balance, account_number, Kind::Savings { interest_rate })
    }

    pub fn current(
        balance: Amount,
        account_number: impl Into<AccountNumber>,
        overdraft_limit: Amount,
    ) -> Self {
        Self::with_kind(balance, account_number, Kind::Current { overdraft_limit })
    }

    pub fn with_kind(
        balance: Amount,
        account_number: impl Into<AccountNumber>,
        kind: Kind,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            balance: Balance::new(balance),
            kind,
        }
    }

    pub fn balance(&self) -> Amount {
        self.balance.amount()
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Apply the periodic update for this kind of account.
    ///
    /// Savings accounts accrue their interest, current accounts in overdraft
    /// return a notice, basic accounts stay as they are.
    pub fn update(&mut self) -> Option<OverdraftNotice> {
        match self.kind {
            Kind::Basic => None,
            Kind::Savings { .. } => {
                self.add_interest();
                None
            }
            Kind::Current { .. } => self.is_overdraft().then(|| OverdraftNotice {
                account_number: self.account_number.clone(),
            }),
        }
    }

    // Shared by deposits and withdrawals: zero and negative amounts are refused.
    pub(super) fn validate(amount: Amount) -> Result<(), AccountError> {
        if amount <= dec!(0) {
            return Err(AccountError::InvalidAmount(amount));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Basic => write!(
                f,
                "Account number: {}, balance: {}",
                self.account_number,
                self.balance().normalize()
            ),
            Kind::Savings { interest_rate } => write!(
                f,
                "Savings Account number: {}, balance: {}, interest rate: {}%",
                self.account_number,
                self.balance().normalize(),
                interest_rate
            ),
            Kind::Current { overdraft_limit } => write!(
                f,
                "Current Account number: {}, balance: {}, overdraft limit: {}",
                self.account_number,
                self.balance().normalize(),
                overdraft_limit
            ),
        }
    }
}
