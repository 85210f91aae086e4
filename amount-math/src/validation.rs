//! # Amount Component Validation
//!
//! Validation functions for currency codes, whole-unit values and fractions.
//! Every [`crate::Amount`] is built through these checks.

use std::fmt;
use std::str::FromStr;

use crate::{FormatError, FormatResult, MAX_FRACTION, MAX_VALUE};

/// Maximum length of a currency code
pub const MAX_CURRENCY_LENGTH: usize = 12;

#[inline(always)]
fn is_currency_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '*')
}

/// Validate a currency code against `^[-_*A-Za-z0-9]{1,12}$`
///
/// # Examples
/// ```
/// use amount_math::check_currency;
///
/// assert!(check_currency("USD").is_ok());
/// assert!(check_currency("*LOCAL-TOKEN").is_ok());
/// assert!(check_currency("").is_err());
/// assert!(check_currency("US D").is_err());
/// ```
pub fn check_currency(currency: &str) -> FormatResult<&str> {
    let valid = (1..=MAX_CURRENCY_LENGTH).contains(&currency.len())
        && currency.chars().all(is_currency_char);
    if !valid {
        return Err(FormatError::InvalidCurrency(currency.to_string()));
    }
    Ok(currency)
}

/// Validate a whole-unit value
///
/// Signed input is accepted so that a parsed `"-5"` is reported as out of range
/// rather than slipping through.
///
/// # Examples
/// ```
/// use amount_math::{check_value, MAX_VALUE};
///
/// assert_eq!(check_value(Some(42)).unwrap(), 42);
/// assert!(check_value(Some(MAX_VALUE as i64)).is_ok());
/// assert!(check_value(Some(MAX_VALUE as i64 + 1)).is_err());
/// assert!(check_value(Some(-1)).is_err());
/// assert!(check_value(None).is_err());
/// ```
pub fn check_value(value: Option<i64>) -> FormatResult<u64> {
    match value {
        Some(v) if v >= 0 && v as u64 <= MAX_VALUE => Ok(v as u64),
        _ => Err(FormatError::ValueOutOfRange(value)),
    }
}

/// Validate a fraction in hundred-millionths of a unit
///
/// # Examples
/// ```
/// use amount_math::check_fraction;
///
/// assert_eq!(check_fraction(Some(50_000_000)).unwrap(), 50_000_000);
/// assert!(check_fraction(Some(100_000_000)).is_err());
/// assert!(check_fraction(None).is_err());
/// ```
pub fn check_fraction(fraction: Option<u32>) -> FormatResult<u32> {
    match fraction {
        Some(f) if f <= MAX_FRACTION => Ok(f),
        _ => Err(FormatError::FractionOutOfRange(fraction)),
    }
}

/// A validated currency code
///
/// Codes are compared case-sensitively: `usd` and `USD` are different currencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency(String);

impl Currency {
    /// Create a currency code, rejecting anything [`check_currency`] rejects
    pub fn new(code: &str) -> FormatResult<Self> {
        check_currency(code).map(|c| Self(c.to_string()))
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Currency {
    type Err = FormatError;

    fn from_str(s: &str) -> FormatResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = FormatError;

    fn try_from(code: String) -> FormatResult<Self> {
        check_currency(&code)?;
        Ok(Self(code))
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Currency {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Currency {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_validation() {
        // Valid codes
        assert!(check_currency("USD").is_ok());
        assert!(check_currency("KUDOS").is_ok());
        assert!(check_currency("a").is_ok());
        assert!(check_currency("ABCDEFGHIJKL").is_ok()); // 12 chars
        assert!(check_currency("*_-09az").is_ok());

        // Invalid codes
        assert!(check_currency("").is_err());
        assert!(check_currency("ABCDEFGHIJKLM").is_err()); // 13 chars
        assert!(check_currency("US:D").is_err());
        assert!(check_currency("EUR ").is_err());
        assert!(check_currency("€").is_err());
        assert_eq!(
            check_currency("a.b"),
            Err(FormatError::InvalidCurrency("a.b".to_string()))
        );
    }

    #[test]
    fn test_value_validation() {
        assert_eq!(check_value(Some(0)).unwrap(), 0);
        assert_eq!(check_value(Some(MAX_VALUE as i64)).unwrap(), MAX_VALUE);

        assert_eq!(
            check_value(Some(MAX_VALUE as i64 + 1)),
            Err(FormatError::ValueOutOfRange(Some(MAX_VALUE as i64 + 1)))
        );
        assert_eq!(check_value(Some(-5)), Err(FormatError::ValueOutOfRange(Some(-5))));
        assert_eq!(check_value(None), Err(FormatError::ValueOutOfRange(None)));
    }

    #[test]
    fn test_fraction_validation() {
        assert_eq!(check_fraction(Some(0)).unwrap(), 0);
        assert_eq!(check_fraction(Some(MAX_FRACTION)).unwrap(), MAX_FRACTION);

        assert!(check_fraction(Some(MAX_FRACTION + 1)).is_err());
        assert_eq!(check_fraction(None), Err(FormatError::FractionOutOfRange(None)));
    }

    #[test]
    fn test_currency_newtype() {
        let usd = Currency::new("USD").unwrap();
        assert_eq!(usd.as_str(), "USD");
        assert_eq!(usd, "USD");
        assert_eq!(usd.to_string(), "USD");
        assert_ne!(usd, Currency::new("usd").unwrap());

        assert!("US D".parse::<Currency>().is_err());
        assert!(Currency::try_from("KUDOS".to_string()).is_ok());
        assert!(Currency::try_from(String::new()).is_err());
    }
}
