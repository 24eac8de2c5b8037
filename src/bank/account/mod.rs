#[allow(clippy::module_inception)]
pub mod account;
pub mod balance;
pub mod current;
pub mod deposit;
pub mod savings;
pub mod withdrawal;

pub use account::{Account, AccountError, Kind, OverdraftNotice};
