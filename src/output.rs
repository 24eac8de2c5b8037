use crate::bank::{Account, Amount, Bank, Kind, Rate};

use serde::Serialize;
use std::io::Write;

/// How the state of the bank is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// One human-readable line per account, after every step.
    #[default]
    Text,

    /// The final state only, as CSV.
    Csv,
}

#[derive(Serialize)]
struct AccountRecord<'a> {
    #[serde(rename = "account")]
    account_number: &'a str,

    #[serde(rename = "type")]
    kind: &'static str,

    balance: Amount,

    #[serde(rename = "rate")]
    interest_rate: Option<Rate>,

    #[serde(rename = "limit")]
    overdraft_limit: Option<Amount>,

    overdraft: bool,
}

impl<'a> AccountRecord<'a> {
    fn new(acc: &'a Account) -> Self {
        let kind = match acc.kind() {
            Kind::Basic => "basic",
            Kind::Savings { .. } => "savings",
            Kind::Current { .. } => "current",
        };

        Self {
            account_number: acc.account_number(),
            kind,
            balance: acc.balance().normalize(),
            interest_rate: acc.interest_rate(),
            overdraft_limit: acc.overdraft_limit(),
            overdraft: acc.is_overdraft(),
        }
    }
}

/// Writes every account of the bank as a line of text, in opening order.
pub fn write_text(mut output_stream: impl Write, bank: &Bank) -> Result<(), std::io::Error> {
    if !bank.is_empty() {
        writeln!(output_stream, "{}", bank)?;
    }

    Ok(())
}

/// Writes every account of the bank as a CSV record, in opening order.
pub fn write_csv(output_stream: impl Write, bank: &Bank) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for account in bank.accounts() {
        writer.serialize(AccountRecord::new(account))?;
    }

    writer.flush()?;
    Ok(())
}
