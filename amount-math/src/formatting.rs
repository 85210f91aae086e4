//! # Amount Formatting
//!
//! The canonical, minimal decimal form of an amount and the seam where
//! display code plugs in.
//!
//! Only the canonical string is produced here. Locale punctuation, digit
//! grouping and symbol placement belong to a [`DisplayAdapter`];
//! [`PlainDisplay`] is a locale-free adapter for logs, tests and terminals.

use std::fmt;

use crate::{Amount, Currency, CurrencySpecification, FRACTIONAL_BASE, MAX_FRACTION_LENGTH};

impl Amount {
    /// Minimal decimal representation: no point for whole amounts, no trailing zeros
    ///
    /// # Examples
    /// ```
    /// use amount_math::Amount;
    ///
    /// assert_eq!(Amount::from_string("USD", "3.50").unwrap().amount_str(), "3.5");
    /// assert_eq!(Amount::from_string("USD", "2.00").unwrap().amount_str(), "2");
    /// assert_eq!(Amount::from_string("USD", "0.00000001").unwrap().amount_str(), "0.00000001");
    /// ```
    pub fn amount_str(&self) -> String {
        let mut out = self.value().to_string();
        let mut f = self.fraction();
        if f == 0 {
            return out;
        }

        out.reserve(1 + MAX_FRACTION_LENGTH);
        out.push('.');
        while f > 0 {
            let digit = f / (FRACTIONAL_BASE / 10);
            out.push(char::from(b'0' + digit as u8));
            f = (f * 10) % FRACTIONAL_BASE;
        }
        out
    }

    /// Canonical `CURRENCY:value[.fraction]` form, the inverse of [`Amount::from_json_string`]
    ///
    /// The display spec is not part of the string.
    pub fn to_json_string(&self) -> String {
        format!("{}:{}", self.currency(), self.amount_str())
    }

    /// Render for humans through a display adapter
    ///
    /// # Examples
    /// ```
    /// use amount_math::{Amount, PlainDisplay};
    ///
    /// let amount = Amount::from_json_string("KUDOS:42.1337").unwrap();
    /// assert_eq!(amount.render(&PlainDisplay::default(), false), "42.1337 KUDOS");
    /// assert_eq!(amount.render(&PlainDisplay::default(), true), "-42.1337 KUDOS");
    /// ```
    pub fn render<D: DisplayAdapter + ?Sized>(&self, adapter: &D, negative: bool) -> String {
        adapter.render(&self.amount_str(), negative, self.currency(), self.spec())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.currency(), self.amount_str())
    }
}

/// Turns an exact decimal string into display text
///
/// `amount_str` is always the output of [`Amount::amount_str`]: ASCII digits
/// with at most one `.` and no sign. `negative` asks for a minus sign.
pub trait DisplayAdapter {
    fn render(
        &self,
        amount_str: &str,
        negative: bool,
        currency: &Currency,
        spec: Option<&CurrencySpecification>,
    ) -> String;
}

/// Locale-free rendering: `.` as decimal point, no grouping
///
/// With a currency specification the fraction is padded to its trailing-zero
/// digit count and its symbol is used as a prefix. Without one the fraction
/// is padded to `min_fraction_digits` and the currency code is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainDisplay {
    /// Include the symbol or currency code
    pub show_symbol: bool,
    /// Fraction padding when no currency specification is attached
    pub min_fraction_digits: usize,
}

impl Default for PlainDisplay {
    fn default() -> Self {
        Self {
            show_symbol: true,
            min_fraction_digits: 2,
        }
    }
}

/// Pad the fractional part of `amount_str` with zeros up to `min_digits`
fn pad_fraction(amount_str: &str, min_digits: usize) -> String {
    let (integer, fraction) = amount_str.split_once('.').unwrap_or((amount_str, ""));
    let width = min_digits.min(MAX_FRACTION_LENGTH).max(fraction.len());
    if width == 0 {
        return integer.to_string();
    }
    format!("{integer}.{fraction:0<width$}")
}

impl DisplayAdapter for PlainDisplay {
    fn render(
        &self,
        amount_str: &str,
        negative: bool,
        currency: &Currency,
        spec: Option<&CurrencySpecification>,
    ) -> String {
        let min_digits = spec
            .map(|s| s.num_fractional_trailing_zero_digits as usize)
            .unwrap_or(self.min_fraction_digits);
        let number = pad_fraction(amount_str, min_digits);
        let sign = if negative { "-" } else { "" };

        match (self.show_symbol, spec.and_then(|s| s.symbol())) {
            (false, _) => format!("{sign}{number}"),
            (true, Some(symbol)) => format!("{sign}{symbol}{number}"),
            (true, None) => format!("{sign}{number} {currency}"),
        }
    }
}
