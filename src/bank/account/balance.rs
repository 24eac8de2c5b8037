use crate::bank::Amount;

use super::account::AccountError;

/// The money held by an account.
///
/// Nothing stops a balance from going negative: overdrafts are reported,
/// never refused. The only thing a balance refuses is an amount that doesn't
/// fit in a decimal anymore.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    amount: Amount,
}

impl Balance {
    pub const fn new(amount: Amount) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn add(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;

        Ok(())
    }

    pub fn subtract(&mut self, amount: Amount) -> Result<(), AccountError> {
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(AccountError::Overflow)?;

        Ok(())
    }

    /// Whether `amount` could be added without overflowing.
    pub fn can_add(&self, amount: Amount) -> bool {
        self.amount.checked_add(amount).is_some()
    }

    /// Grow (or shrink, for a negative rate) the balance by `rate` percent.
    /// Saturates at the decimal bounds instead of failing.
    pub fn grow(&mut self, rate: Amount) {
        let interest = self.amount.saturating_mul(rate) / Amount::ONE_HUNDRED;
        // The division leaves trailing zeros in the scale (1102.50).
        self.amount = self.amount.saturating_add(interest).normalize();
    }
}

#[cfg(test)]
mod tests {
    use crate::bank::account::account::AccountError;

    use super::Balance;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_add() {
        let mut balance = Balance::new(dec!(10));
        balance.add(dec!(7)).expect("should not overflow");

        assert_eq!(dec!(17), balance.amount());
    }

    #[test]
    fn test_add_overflow() {
        let mut balance = Balance::new(Decimal::MAX);

        assert_eq!(Err(AccountError::Overflow), balance.add(dec!(1)));
        assert_eq!(Decimal::MAX, balance.amount());
        assert!(!balance.can_add(dec!(1)));
    }

    #[test]
    fn test_subtract_below_zero() {
        let mut balance = Balance::new(dec!(10));
        balance.subtract(dec!(17)).expect("should not overflow");

        assert_eq!(dec!(-7), balance.amount());
    }

    #[test]
    fn test_subtract_overflow() {
        let mut balance = Balance::new(Decimal::MIN);

        assert_eq!(Err(AccountError::Overflow), balance.subtract(dec!(1)));
        assert_eq!(Decimal::MIN, balance.amount());
    }

    #[test]
    fn test_grow() {
        for (amount, rate, want) in vec![
            (dec!(1000), dec!(5), dec!(1050)),
            (dec!(2000), dec!(4), dec!(2080)),
            (dec!(1000), dec!(0), dec!(1000)),
            (dec!(1000), dec!(-10), dec!(900)),
            (dec!(-200), dec!(5), dec!(-210)),
            (dec!(0), dec!(5), dec!(0)),
        ] {
            let mut balance = Balance::new(amount);
            balance.grow(rate);
            assert_eq!(want, balance.amount());
        }
    }

    #[test]
    fn test_grow_twice_keeps_shortest_scale() {
        let mut balance = Balance::new(dec!(1000));
        balance.grow(dec!(5));
        balance.grow(dec!(5));

        assert_eq!(dec!(1102.5), balance.amount());
        assert_eq!("1102.5", balance.amount().to_string());
    }

    #[test]
    fn test_grow_saturates() {
        let mut balance = Balance::new(Decimal::MAX);
        balance.grow(dec!(500));

        assert_eq!(Decimal::MAX, balance.amount());
    }
}
