//! A small bank ledger.
//!
//! Bank: holds accounts in the order they were opened, pays dividends and
//! applies the periodic update (interest for savings accounts, overdraft
//! notices for current accounts).
//! Input: reads the accounts to open from a CSV roster.
//! Output: reports the state of the bank, as text or CSV.

pub mod bank;
pub mod input;
pub mod output;
pub mod run;
