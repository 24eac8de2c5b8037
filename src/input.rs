use crate::bank::{Account, AccountNumber, Kind};

use rust_decimal::Decimal;
use serde::Deserialize;

/// The accounts of the command-line scenario: two savings accounts and two
/// current accounts, one of them already overdrawn.
pub const DEMO_ROSTER: &str = "type,account,balance,rate,limit
savings,SA123,1000,5,
savings,SA124,2000,4,
current,CA123,500,,1000
current,CA124,-200,,500
";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// CSV is malformed
    #[error("malformed CSV: {0}")]
    Csv(String),

    /// A well-formed record doesn't describe a valid account
    #[error("invalid account: {0}")]
    Format(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<<AccountRecord as TryInto<Account>>::Error> for Error {
    fn from(err: <AccountRecord as TryInto<Account>>::Error) -> Self {
        Self::Format(err.to_string())
    }
}

// A roster is small and hand-written: a single bad record means the file
// needs fixing, so we abort on the first error instead of skipping it.
pub fn parse(input_stream: impl std::io::Read) -> Result<Vec<Account>, Error> {
    let buffered = std::io::BufReader::new(input_stream);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    let accounts = reader
        .deserialize::<AccountRecord>()
        .map(convert)
        .collect::<Result<Vec<Account>, Error>>()?;

    tracing::debug!(accounts = accounts.len(), "parsed roster");
    Ok(accounts)
}

// Convert from a csv deserialise result into an account result.
fn convert(record: Result<AccountRecord, csv::Error>) -> Result<Account, Error> {
    Ok(record?.try_into()?)
}

// AccountRecord is the row as it is written in the file. Account makes no
// assumption about where it comes from, so we can't deserialise into it
// directly (see https://github.com/BurntSushi/rust-csv/issues/211).
#[derive(Debug, Deserialize)]
pub struct AccountRecord {
    #[serde(rename = "type")]
    kind: AccountRecordType,

    #[serde(rename = "account")]
    account_number: AccountNumber,

    balance: Option<Decimal>,

    #[serde(rename = "rate")]
    interest_rate: Option<Decimal>,

    #[serde(rename = "limit")]
    overdraft_limit: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRecordType {
    Basic,
    Savings,
    Current,
}

impl TryFrom<AccountRecord> for Account {
    type Error = &'static str;
    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        if record.account_number.is_empty() {
            return Err("missing account number");
        }

        let kind = match record.kind {
            AccountRecordType::Basic => Kind::Basic,
            AccountRecordType::Savings => Kind::Savings {
                interest_rate: match record.interest_rate {
                    Some(rate) => rate,
                    None => return Err("missing interest rate for savings account"),
                },
            },
            AccountRecordType::Current => Kind::Current {
                overdraft_limit: match record.overdraft_limit {
                    Some(limit) => limit,
                    None => return Err("missing overdraft limit for current account"),
                },
            },
        };

        let balance = record.balance.unwrap_or(Decimal::ZERO);
        Ok(Self::with_kind(balance, record.account_number, kind))
    }
}
