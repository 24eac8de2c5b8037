use crate::bank::{AccountError, AccountNumber, Amount, Bank};
use crate::input;
use crate::output::{self, Format};

use std::io::{self, Read, Write};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read accounts")]
    Input(#[from] input::Error),

    #[error("failed to move money")]
    Account(#[from] AccountError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// The steps applied to the bank once its accounts are opened.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Paid into every account after the periodic update.
    pub dividend: Amount,

    /// Closed once the dividend is paid, if any.
    pub close: Option<AccountNumber>,

    pub format: Format,
}

/// Open the accounts read from `input_stream`, then update the bank, pay the
/// dividend and close an account, reporting the bank to `output_stream`.
///
/// In text format the bank is reported after every step, along with the
/// overdraft notices; in CSV format only the final state is written.
pub fn run(
    input_stream: impl Read,
    mut output_stream: impl Write,
    scenario: &Scenario,
) -> Result<(), Error> {
    let mut bank: Bank = input::parse(input_stream)?.into_iter().collect();
    let text = scenario.format == Format::Text;

    if text {
        writeln!(output_stream, "Initial state of accounts:")?;
        output::write_text(&mut output_stream, &bank)?;
    }

    let notices = bank.update();
    if text {
        for notice in &notices {
            writeln!(output_stream, "{}", notice)?;
        }
        writeln!(output_stream, "\nState of accounts after update:")?;
        output::write_text(&mut output_stream, &bank)?;
    }

    bank.pay_dividend(scenario.dividend)?;
    if text {
        writeln!(output_stream, "\nState of accounts after paying dividend:")?;
        output::write_text(&mut output_stream, &bank)?;
    }

    if let Some(account_number) = &scenario.close {
        if bank.close_account(account_number) == 0 {
            tracing::warn!(account = %account_number, "no account to close");
        }
        if text {
            writeln!(output_stream, "\nState of accounts after closing an account:")?;
            output::write_text(&mut output_stream, &bank)?;
        }
    }

    match scenario.format {
        Format::Text => output_stream.flush()?,
        Format::Csv => output::write_csv(&mut output_stream, &bank)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run, Error, Scenario};
    use crate::bank::AccountError;
    use crate::input::DEMO_ROSTER;
    use crate::output::Format;

    use rust_decimal_macros::dec;

    fn run_demo(scenario: &Scenario) -> Result<String, Error> {
        let mut output_stream = Vec::new();
        run(std::io::Cursor::new(DEMO_ROSTER), &mut output_stream, scenario)?;

        Ok(String::from_utf8(output_stream).unwrap())
    }

    #[test]
    fn test_run_text() {
        let scenario = Scenario {
            dividend: dec!(50),
            close: Some("SA123".to_string()),
            format: Format::Text,
        };

        let want = r#"Initial state of accounts:
Savings Account number: SA123, balance: 1000, interest rate: 5%
Savings Account number: SA124, balance: 2000, interest rate: 4%
Current Account number: CA123, balance: 500, overdraft limit: 1000
Current Account number: CA124, balance: -200, overdraft limit: 500
Account number CA124 is in overdraft. Please take action.

State of accounts after update:
Savings Account number: SA123, balance: 1050, interest rate: 5%
Savings Account number: SA124, balance: 2080, interest rate: 4%
Current Account number: CA123, balance: 500, overdraft limit: 1000
Current Account number: CA124, balance: -200, overdraft limit: 500

State of accounts after paying dividend:
Savings Account number: SA123, balance: 1100, interest rate: 5%
Savings Account number: SA124, balance: 2130, interest rate: 4%
Current Account number: CA123, balance: 550, overdraft limit: 1000
Current Account number: CA124, balance: -150, overdraft limit: 500

State of accounts after closing an account:
Savings Account number: SA124, balance: 2130, interest rate: 4%
Current Account number: CA123, balance: 550, overdraft limit: 1000
Current Account number: CA124, balance: -150, overdraft limit: 500
"#;
        assert_eq!(want, run_demo(&scenario).unwrap());
    }

    #[test]
    fn test_run_text_reports_each_notice_once() {
        let scenario = Scenario {
            dividend: dec!(50),
            close: None,
            format: Format::Text,
        };

        let got = run_demo(&scenario).unwrap();
        assert_eq!(
            1,
            got.matches("Account number CA124 is in overdraft. Please take action.")
                .count()
        );
    }

    #[test]
    fn test_run_csv_without_closing() {
        let scenario = Scenario {
            dividend: dec!(50),
            close: None,
            format: Format::Csv,
        };

        let want = r#"account,type,balance,rate,limit,overdraft
SA123,savings,1100,5,,false
SA124,savings,2130,4,,false
CA123,current,550,,1000,false
CA124,current,-150,,500,true
"#;
        assert_eq!(want, run_demo(&scenario).unwrap());
    }

    #[test]
    fn test_run_invalid_dividend() {
        let scenario = Scenario {
            dividend: dec!(0),
            close: None,
            format: Format::Csv,
        };

        match run_demo(&scenario) {
            Err(Error::Account(err)) => assert_eq!(AccountError::InvalidAmount(dec!(0)), err),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_run_malformed_roster() {
        let scenario = Scenario {
            dividend: dec!(50),
            close: None,
            format: Format::Text,
        };
        let mut output_stream = Vec::new();

        let got = run(
            std::io::Cursor::new("type,account,balance,rate,limit\nsavings,SA1,10,,"),
            &mut output_stream,
            &scenario,
        );
        assert!(matches!(got, Err(Error::Input(_))));
        assert!(output_stream.is_empty());
    }
}
