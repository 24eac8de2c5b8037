use super::account::{Account, AccountError, OverdraftNotice};
use super::Amount;
use std::fmt;

/// A bank holds accounts, in the order they were opened, and applies bulk
/// operations over all of them.
///
/// Account numbers are assumed to be unique, but it isn't enforced: closing
/// a number closes every account carrying it.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_account(&mut self, account: Account) {
        tracing::debug!(account = %account.account_number(), "opening account");
        self.accounts.push(account);
    }

    /// Close every account with this number, keeping the others in order.
    /// Returns how many accounts were closed, which may be zero.
    pub fn close_account(&mut self, account_number: &str) -> usize {
        let before = self.accounts.len();
        self.accounts
            .retain(|account| account.account_number() != account_number);

        let closed = before - self.accounts.len();
        tracing::debug!(account = %account_number, closed, "closing account");
        closed
    }

    /// Deposit `amount` into every account.
    ///
    /// The amount is validated once for all accounts: if any deposit would be
    /// refused, no account is credited at all.
    pub fn pay_dividend(&mut self, amount: Amount) -> Result<(), AccountError> {
        for account in &self.accounts {
            account.can_deposit(amount)?;
        }

        for account in &mut self.accounts {
            account.deposit(amount)?;
        }

        tracing::info!(%amount, accounts = self.accounts.len(), "paid dividend");
        Ok(())
    }

    /// Apply the periodic update to every account, in order.
    ///
    /// The notices raised by current accounts in overdraft are logged at info
    /// level, then handed back to the caller in the same order: reporting them
    /// is up to the caller.
    pub fn update(&mut self) -> Vec<OverdraftNotice> {
        let notices: Vec<OverdraftNotice> = self
            .accounts
            .iter_mut()
            .filter_map(Account::update)
            .collect();

        for notice in &notices {
            tracing::info!(account = %notice.account_number, "{}", notice);
        }
        tracing::info!(
            accounts = self.accounts.len(),
            overdrafts = notices.len(),
            "updated accounts"
        );

        notices
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// The first account opened with this number, if any is still open.
    pub fn account(&self, account_number: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.account_number() == account_number)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Extend<Account> for Bank {
    fn extend<I: IntoIterator<Item = Account>>(&mut self, accounts: I) {
        for account in accounts {
            self.open_account(account);
        }
    }
}

impl FromIterator<Account> for Bank {
    fn from_iter<I: IntoIterator<Item = Account>>(accounts: I) -> Self {
        let mut bank = Self::new();
        bank.extend(accounts);
        bank
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, account) in self.accounts.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", account)?;
        }

        Ok(())
    }
}
