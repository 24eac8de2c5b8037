use bank_ledger::{bank::Amount, output::Format, run::Scenario};

use clap::Parser;
use rust_decimal_macros::dec;
use std::path::PathBuf;

pub static BIN_NAME: &str = std::env!("CARGO_CRATE_NAME");

/// Open a roster of accounts, run a periodic update, pay a dividend and close
/// an account, reporting the bank after each step.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// CSV roster of the accounts to open (type,account,balance,rate,limit).
    /// The demo roster is used when omitted.
    pub roster: Option<PathBuf>,

    /// Amount paid into every account after the update
    #[arg(long, short, default_value_t = dec!(50))]
    pub dividend: Amount,

    /// Number of the account to close at the end
    #[arg(long, default_value = "SA123", conflicts_with = "keep_all")]
    pub close: String,

    /// Don't close any account
    #[arg(long)]
    pub keep_all: bool,

    #[arg(long, short, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Log more (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn scenario(&self) -> Scenario {
        Scenario {
            dividend: self.dividend,
            close: (!self.keep_all).then(|| self.close.clone()),
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use bank_ledger::output::Format;

    use clap::Parser;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["bank_ledger"]);
        let scenario = args.scenario();

        assert_eq!(None, args.roster);
        assert_eq!(dec!(50), scenario.dividend);
        assert_eq!(Some("SA123".to_string()), scenario.close);
        assert_eq!(Format::Text, scenario.format);
        assert_eq!(0, args.verbose);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "bank_ledger",
            "accounts.csv",
            "--dividend",
            "12.5",
            "--keep-all",
            "--format",
            "csv",
            "-vv",
        ]);
        let scenario = args.scenario();

        assert_eq!(Some("accounts.csv".into()), args.roster);
        assert_eq!(dec!(12.5), scenario.dividend);
        assert_eq!(None, scenario.close);
        assert_eq!(Format::Csv, scenario.format);
        assert_eq!(2, args.verbose);
    }

    #[test]
    fn test_close_conflicts_with_keep_all() {
        let got = Args::try_parse_from(["bank_ledger", "--close", "CA123", "--keep-all"]);

        assert!(got.is_err());
    }
}
