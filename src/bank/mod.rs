pub mod account;
#[allow(clippy::module_inception)]
pub mod bank;

pub use account::{Account, AccountError, Kind, OverdraftNotice};
pub use bank::Bank;

// Named types don't provide any compiler help, but they make signatures
// self-explanatory: `fn close_account(&mut self, number: AccountNumber)` needs
// no comment, `fn close_account(&mut self, number: String)` does.
pub type AccountNumber = String;

// A decimal library instead of the built-in floats, to be safer when dealing
// with money. No rounding policy is applied on top of it.
pub type Amount = rust_decimal::Decimal;

/// Interest rate, as a percentage (5 means 5%).
pub type Rate = rust_decimal::Decimal;
