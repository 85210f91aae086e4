//! # Fixed-Point Conversions
//!
//! Convert between [`Amount`] and a single u128 count of hundred-millionths.
//! Storage layers index amounts this way:
//!
//! ```text
//! units    = value * 1e8 + fraction
//! value    = units / 1e8
//! fraction = units % 1e8
//! ```

use crate::{Amount, Currency, OverflowError, OverflowResult, FRACTIONAL_BASE, MAX_VALUE};

/// Largest unit count an amount can hold
pub const MAX_UNITS: u128 = MAX_VALUE as u128 * FRACTIONAL_BASE as u128 + (FRACTIONAL_BASE as u128 - 1);

impl Amount {
    /// The amount as a count of hundred-millionths
    ///
    /// # Examples
    /// ```
    /// use amount_math::Amount;
    ///
    /// let amount = Amount::from_json_string("USD:123.456789").unwrap();
    /// assert_eq!(amount.to_fixed_point(), 12_345_678_900u128);
    /// ```
    pub fn to_fixed_point(&self) -> u128 {
        u128::from(self.value()) * u128::from(FRACTIONAL_BASE) + u128::from(self.fraction())
    }

    /// Rebuild an amount from a count of hundred-millionths
    ///
    /// # Examples
    /// ```
    /// use amount_math::{Amount, Currency};
    ///
    /// let usd = Currency::new("USD").unwrap();
    /// let amount = Amount::from_fixed_point(usd.clone(), 350_000_000).unwrap();
    /// assert_eq!(amount.to_json_string(), "USD:3.5");
    ///
    /// assert!(Amount::from_fixed_point(usd, u128::MAX).is_err());
    /// ```
    pub fn from_fixed_point(currency: Currency, units: u128) -> OverflowResult<Self> {
        if units > MAX_UNITS {
            log::debug!("fixed-point amount {units} exceeds {MAX_UNITS}");
            return Err(OverflowError);
        }
        let base = u128::from(FRACTIONAL_BASE);
        Ok(Self::from_parts(currency, (units / base) as u64, (units % base) as u32))
    }
}
