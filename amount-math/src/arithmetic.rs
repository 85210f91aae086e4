//! # Amount Arithmetic
//!
//! Overflow-checked addition, subtraction, scaling and comparison.
//! Results never wrap, saturate or round: anything outside
//! `0..=MAX_VALUE.99999999` is an [`OverflowError`].
//!
//! Binary operations require both operands to share a currency. Mixing
//! currencies is a programming error and panics.

use std::cmp::Ordering;

use crate::{Amount, OverflowError, OverflowResult, FRACTIONAL_BASE, MAX_VALUE};

/// Whole-unit bound check shared by every operation
#[inline(always)]
fn check_total(value: u64) -> OverflowResult<u64> {
    if value > MAX_VALUE {
        log::debug!("amount overflow: value {value} exceeds {MAX_VALUE}");
        return Err(OverflowError);
    }
    Ok(value)
}

#[inline(always)]
fn assert_same_currency(a: &Amount, b: &Amount, op: &str) {
    assert!(
        a.same_currency(b),
        "Can only {op} amounts of the same currency ({} vs {})",
        a.currency(),
        b.currency()
    );
}

impl Amount {
    /// Add another amount of the same currency
    ///
    /// # Panics
    /// If the currencies differ.
    ///
    /// # Examples
    /// ```
    /// use amount_math::Amount;
    ///
    /// let a = Amount::from_json_string("USD:1").unwrap();
    /// let b = Amount::from_json_string("USD:0.99999999").unwrap();
    /// let c = Amount::from_json_string("USD:0.00000001").unwrap();
    ///
    /// let sum = a.checked_add(&b).unwrap().checked_add(&c).unwrap();
    /// assert_eq!(sum.to_json_string(), "USD:2");
    /// ```
    pub fn checked_add(&self, other: &Amount) -> OverflowResult<Amount> {
        assert_same_currency(self, other, "add");

        // Both fractions are below 1e8, so the carry is 0 or 1
        let fraction_sum = self.fraction() + other.fraction();
        let carry = u64::from(fraction_sum / FRACTIONAL_BASE);
        let value = self.value() + other.value() + carry;

        let value = check_total(value)?;
        Ok(self.derive(value, fraction_sum % FRACTIONAL_BASE))
    }

    /// Subtract another amount of the same currency
    ///
    /// Going below zero is reported as [`OverflowError`].
    ///
    /// # Panics
    /// If the currencies differ.
    ///
    /// # Examples
    /// ```
    /// use amount_math::Amount;
    ///
    /// let a = Amount::from_json_string("USD:1").unwrap();
    /// let b = Amount::from_json_string("USD:0.5").unwrap();
    /// assert_eq!(a.checked_sub(&b).unwrap().to_json_string(), "USD:0.5");
    /// assert!(b.checked_sub(&a).is_err());
    /// ```
    pub fn checked_sub(&self, other: &Amount) -> OverflowResult<Amount> {
        assert_same_currency(self, other, "subtract");

        let underflow = || {
            log::debug!("amount underflow: {} - {}", self, other);
            OverflowError
        };

        let mut value = self.value();
        let mut fraction = self.fraction();
        if fraction < other.fraction() {
            // Borrow one whole unit
            value = value.checked_sub(1).ok_or_else(underflow)?;
            fraction += FRACTIONAL_BASE;
        }
        let value = value.checked_sub(other.value()).ok_or_else(underflow)?;

        Ok(self.derive(value, fraction - other.fraction()))
    }

    /// Multiply by a non-negative integer factor
    ///
    /// Equal to adding `factor` copies of `self`. Overflow is judged on the
    /// final product only.
    ///
    /// # Examples
    /// ```
    /// use amount_math::Amount;
    ///
    /// let price = Amount::from_json_string("EUR:0.35").unwrap();
    /// assert_eq!(price.checked_mul(3).unwrap().to_json_string(), "EUR:1.05");
    /// assert!(price.checked_mul(0).unwrap().is_zero());
    /// ```
    pub fn checked_mul(&self, factor: u32) -> OverflowResult<Amount> {
        if factor == 0 {
            return Ok(self.derive(0, 0));
        }

        let base = u128::from(FRACTIONAL_BASE);
        let units = u128::from(self.value()) * base + u128::from(self.fraction());
        let total = units.checked_mul(u128::from(factor)).ok_or(OverflowError)?;

        let value = u64::try_from(total / base).map_err(|_| OverflowError)?;
        let value = check_total(value)?;
        Ok(self.derive(value, (total % base) as u32))
    }

    /// Order two amounts of the same currency by value, then fraction
    ///
    /// # Panics
    /// If the currencies differ. Use `partial_cmp` for a non-panicking check.
    pub fn compare(&self, other: &Amount) -> Ordering {
        assert_same_currency(self, other, "compare");
        self.value()
            .cmp(&other.value())
            .then(self.fraction().cmp(&other.fraction()))
    }

    pub fn is_zero(&self) -> bool {
        self.value() == 0 && self.fraction() == 0
    }

    /// New amount in this currency, carrying this amount's display spec
    fn derive(&self, value: u64, fraction: u32) -> Amount {
        Amount::from_parts(self.currency().clone(), value, fraction).with_spec(self.spec().cloned())
    }
}

/// `None` when the currencies differ
impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_currency(other).then(|| self.compare(other))
    }
}
