//! # Amount Parsing
//!
//! Text to [`Amount`] conversion. Integer and fraction parts are handled as
//! integers end to end, so `"0.29"` is exactly 29_000_000 hundred-millionths.

use std::str::FromStr;

use crate::{
    check_fraction, check_value, Amount, Currency, FormatError, FormatResult,
    FRACTIONAL_BASE, MAX_FRACTION, MAX_FRACTION_LENGTH,
};

/// Convert 1-8 decimal digits after the point into hundred-millionths
///
/// With at most eight digits the scaled value is exact, no rounding needed.
fn parse_fraction_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() || digits.len() > MAX_FRACTION_LENGTH {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let raw: u32 = digits.parse().ok()?;
    let scale = 10u32.pow((MAX_FRACTION_LENGTH - digits.len()) as u32);
    Some(raw * scale)
}

impl Amount {
    /// Parse `value[.fraction]` text in the given currency
    ///
    /// # Examples
    /// ```
    /// use amount_math::Amount;
    ///
    /// let amount = Amount::from_string("EUR", "3.1415").unwrap();
    /// assert_eq!(amount.value(), 3);
    /// assert_eq!(amount.fraction(), 14_150_000);
    ///
    /// assert!(Amount::from_string("EUR", "1.123456789").is_err()); // fraction too long
    /// assert!(Amount::from_string("EUR", "abc").is_err());
    /// ```
    pub fn from_string(currency: &str, text: &str) -> FormatResult<Self> {
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text, None),
        };

        let value = check_value(integer.parse::<i64>().ok()).map_err(|e| {
            log::trace!("rejected amount value {integer:?}: {e}");
            e
        })?;

        let fraction = match fraction {
            Some(digits) => {
                if digits.len() > MAX_FRACTION_LENGTH {
                    log::trace!("rejected amount fraction {digits:?}: too long");
                    return Err(FormatError::FractionTooLong(digits.to_string()));
                }
                check_fraction(parse_fraction_digits(digits))?
            }
            None => 0,
        };

        let currency = Currency::new(currency)?;
        Ok(Self::from_parts(currency, value, fraction))
    }

    /// Parse the canonical `CURRENCY:value[.fraction]` form
    ///
    /// # Examples
    /// ```
    /// use amount_math::{Amount, FormatError};
    ///
    /// let amount = Amount::from_json_string("KUDOS:42.1337").unwrap();
    /// assert_eq!(amount.currency(), "KUDOS");
    /// assert_eq!(amount.value(), 42);
    /// assert_eq!(amount.fraction(), 13_370_000);
    ///
    /// assert!(matches!(
    ///     Amount::from_json_string("42.1337"),
    ///     Err(FormatError::BadAmountFormat(_))
    /// ));
    /// ```
    pub fn from_json_string(s: &str) -> FormatResult<Self> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(currency), Some(text), None) => Self::from_string(currency, text),
            _ => {
                log::trace!("rejected amount {s:?}: expected exactly one ':'");
                Err(FormatError::BadAmountFormat(s.to_string()))
            }
        }
    }

    /// Whether `text` would be accepted by [`Amount::from_string`]
    ///
    /// Meant for validating keypad or text-field input as it is typed.
    ///
    /// # Examples
    /// ```
    /// use amount_math::Amount;
    ///
    /// assert!(Amount::is_valid_amount_str("3.50"));
    /// assert!(Amount::is_valid_amount_str("4503599627370496"));
    /// assert!(!Amount::is_valid_amount_str("4503599627370497"));
    /// assert!(!Amount::is_valid_amount_str("1.2.3"));
    /// assert!(!Amount::is_valid_amount_str("0.123456789"));
    /// ```
    pub fn is_valid_amount_str(text: &str) -> bool {
        if text.matches('.').count() > 1 {
            return false;
        }
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text, None),
        };
        if check_value(integer.parse::<i64>().ok()).is_err() {
            return false;
        }
        match fraction {
            Some(digits) => parse_fraction_digits(digits).is_some_and(|f| f <= MAX_FRACTION),
            None => true,
        }
    }
}

impl FromStr for Amount {
    type Err = FormatError;

    fn from_str(s: &str) -> FormatResult<Self> {
        Self::from_json_string(s)
    }
}

// FRACTIONAL_BASE and the digit scaling above must agree.
const _: () = assert!(10u32.pow(MAX_FRACTION_LENGTH as u32) == FRACTIONAL_BASE);
