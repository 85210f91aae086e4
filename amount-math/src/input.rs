//! # Keypad Input Editing
//!
//! Digit-by-digit amount entry as on a payment terminal: typing `1`, `2`, `3`
//! with two input decimals yields `0.01`, `0.12`, `1.23`. The shifting is done
//! on exact decimals, never on binary floating point.
//!
//! Failures (non-digit keys, overflow) produce `None` so that the keypad
//! simply ignores the key press.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{Amount, DEFAULT_INPUT_DECIMALS, MAX_FRACTION_LENGTH};

impl Amount {
    /// Fractional digits the keypad works with
    pub fn input_decimals(&self) -> u32 {
        self.spec()
            .map(|spec| spec.num_fractional_input_digits)
            .unwrap_or(DEFAULT_INPUT_DECIMALS)
    }

    /// Input decimals, if an amount can hold that many fractional digits
    fn usable_input_decimals(&self) -> Option<u32> {
        let decimals = self.input_decimals();
        if decimals as usize > MAX_FRACTION_LENGTH {
            log::trace!("ignoring keypad edit: {decimals} input decimals exceed {MAX_FRACTION_LENGTH}");
            return None;
        }
        Some(decimals)
    }

    fn to_decimal(&self) -> Option<Decimal> {
        Decimal::from_str(&self.amount_str()).ok()
    }

    fn with_decimal(&self, decimal: Decimal) -> Option<Amount> {
        let text = decimal.normalize().to_string();
        match Amount::from_string(self.currency().as_str(), &text) {
            Ok(amount) => Some(amount.with_spec(self.spec().cloned())),
            Err(e) => {
                log::trace!("ignoring keypad result {text:?}: {e}");
                None
            }
        }
    }

    /// Shift one decimal place left and put `digit` in the last input slot
    ///
    /// # Examples
    /// ```
    /// use amount_math::Amount;
    ///
    /// let zero = Amount::from_json_string("USD:0").unwrap();
    /// let typed = zero
    ///     .add_input_digit('1')
    ///     .and_then(|a| a.add_input_digit('2'))
    ///     .and_then(|a| a.add_input_digit('3'))
    ///     .unwrap();
    /// assert_eq!(typed.to_json_string(), "USD:1.23");
    ///
    /// assert!(zero.add_input_digit('x').is_none());
    /// ```
    pub fn add_input_digit(&self, c: char) -> Option<Amount> {
        let decimals = self.usable_input_decimals()?;
        let digit = c.to_digit(10)?;
        let inserted = Decimal::try_new(i64::from(digit), decimals).ok()?;
        let shifted = self.to_decimal()?.checked_mul(Decimal::TEN)?;
        self.with_decimal(shifted.checked_add(inserted)?)
    }

    /// Drop the last input digit, shifting one decimal place right
    ///
    /// # Examples
    /// ```
    /// use amount_math::Amount;
    ///
    /// let amount = Amount::from_json_string("USD:1.23").unwrap();
    /// assert_eq!(amount.remove_input_digit().unwrap().to_json_string(), "USD:0.12");
    /// ```
    pub fn remove_input_digit(&self) -> Option<Amount> {
        let decimals = self.usable_input_decimals()?;
        let shifted = self
            .to_decimal()?
            .checked_div(Decimal::TEN)?
            .round_dp_with_strategy(decimals, RoundingStrategy::ToZero);
        self.with_decimal(shifted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Currency, CurrencySpecification, MAX_FRACTION, MAX_VALUE};

    fn usd(value: u64, fraction: u32) -> Amount {
        Amount::new(Currency::new("USD").unwrap(), value, fraction).unwrap()
    }

    fn spec(input_digits: u32) -> CurrencySpecification {
        CurrencySpecification {
            name: "Test".into(),
            num_fractional_input_digits: input_digits,
            num_fractional_normal_digits: input_digits,
            num_fractional_trailing_zero_digits: input_digits,
            alt_unit_names: Default::default(),
        }
    }

    fn type_keys(start: Amount, keys: &str) -> Option<Amount> {
        keys.chars()
            .try_fold(start, |amount, key| amount.add_input_digit(key))
    }

    #[test]
    fn test_typing_digits() {
        let typed = type_keys(usd(0, 0), "123").unwrap();
        assert_eq!(typed, usd(1, 23_000_000));

        let typed = type_keys(usd(0, 0), "100050").unwrap();
        assert_eq!(typed, usd(1000, 50_000_000));

        // Leading zeros do nothing
        assert_eq!(type_keys(usd(0, 0), "007").unwrap(), usd(0, 7_000_000));
    }

    #[test]
    fn test_removing_digits() {
        let amount = usd(1, 23_000_000);
        let once = amount.remove_input_digit().unwrap();
        assert_eq!(once, usd(0, 12_000_000));

        let twice = once.remove_input_digit().unwrap();
        assert_eq!(twice, usd(0, 1_000_000));

        let thrice = twice.remove_input_digit().unwrap();
        assert_eq!(thrice, usd(0, 0));
        assert_eq!(thrice.remove_input_digit().unwrap(), usd(0, 0));
    }

    #[test]
    fn test_remove_truncates_below_input_decimals() {
        // 0.129 / 10 = 0.0129, floored at two decimals
        assert_eq!(usd(0, 12_900_000).remove_input_digit().unwrap(), usd(0, 1_000_000));
    }

    #[test]
    fn test_spec_input_decimals() {
        let whole = usd(0, 0).with_spec(Some(spec(0)));
        assert_eq!(whole.input_decimals(), 0);

        let typed = type_keys(whole, "250").unwrap();
        assert_eq!(typed, usd(250, 0));
        // Display metadata survives every key press
        assert_eq!(typed.input_decimals(), 0);
        assert_eq!(typed.remove_input_digit().unwrap(), usd(25, 0));

        let fine = usd(0, 0).with_spec(Some(spec(8)));
        assert_eq!(fine.add_input_digit('1').unwrap(), usd(0, 1));
    }

    #[test]
    fn test_invalid_keys_are_ignored() {
        assert!(usd(1, 0).add_input_digit('a').is_none());
        assert!(usd(1, 0).add_input_digit('.').is_none());
        assert!(usd(1, 0).add_input_digit('-').is_none());
    }

    #[test]
    fn test_overflow_is_ignored() {
        assert!(usd(MAX_VALUE, MAX_FRACTION).add_input_digit('1').is_none());
        assert!(usd(MAX_VALUE / 10 + 1, 0).add_input_digit('0').is_none());
        assert!(usd(MAX_VALUE / 10, 0).add_input_digit('0').is_some());

        // An unusable spec never panics
        assert!(usd(0, 0).with_spec(Some(spec(40))).add_input_digit('1').is_none());
    }

    #[test]
    fn test_input_decimals_beyond_fraction_precision_are_ignored() {
        // A ninth input decimal cannot be stored, whatever the magnitude
        for decimals in [9, 12, 20, 27] {
            let large = usd(1_000_000_000_000, 0).with_spec(Some(spec(decimals)));
            assert!(large.add_input_digit('7').is_none(), "{decimals} decimals");
            assert!(large.add_input_digit('0').is_none(), "{decimals} decimals");
            assert!(large.remove_input_digit().is_none(), "{decimals} decimals");
        }

        let small = usd(0, 0).with_spec(Some(spec(9)));
        assert!(small.add_input_digit('1').is_none());
        assert!(small.remove_input_digit().is_none());

        // Eight is still fine
        let eight = usd(1_000_000_000_000, 0).with_spec(Some(spec(8)));
        let typed = eight.add_input_digit('7').unwrap();
        assert_eq!(typed, usd(10_000_000_000_000, 7));
    }
}
