//! # Amount Value Type
//!
//! An immutable monetary amount: currency, whole units and hundred-millionths.
//! Construction always goes through validation, so a live [`Amount`] holds
//! `0 <= value <= MAX_VALUE` and `0 <= fraction <= MAX_FRACTION`.

use std::hash::{Hash, Hasher};

use crate::{
    check_fraction, check_value, Currency, CurrencySpecification, FormatResult, MAX_FRACTION,
    MAX_VALUE,
};

/// Exact monetary amount
///
/// Equality and hashing look at currency, value and fraction only; the
/// attached [`CurrencySpecification`] is display metadata.
#[derive(Debug, Clone)]
pub struct Amount {
    currency: Currency,
    value: u64,
    fraction: u32,
    spec: Option<CurrencySpecification>,
}

impl Amount {
    /// Create an amount from validated parts
    ///
    /// # Examples
    /// ```
    /// use amount_math::{Amount, Currency, MAX_VALUE};
    ///
    /// let usd = Currency::new("USD").unwrap();
    /// let amount = Amount::new(usd.clone(), 3, 50_000_000).unwrap();
    /// assert_eq!(amount.amount_str(), "3.5");
    ///
    /// assert!(Amount::new(usd.clone(), MAX_VALUE + 1, 0).is_err());
    /// assert!(Amount::new(usd, 0, 100_000_000).is_err());
    /// ```
    pub fn new(currency: Currency, value: u64, fraction: u32) -> FormatResult<Self> {
        let value = check_value(i64::try_from(value).ok())?;
        let fraction = check_fraction(Some(fraction))?;
        Ok(Self::from_parts(currency, value, fraction))
    }

    /// Parts must already satisfy the range invariants
    pub(crate) fn from_parts(currency: Currency, value: u64, fraction: u32) -> Self {
        debug_assert!(value <= MAX_VALUE && fraction <= MAX_FRACTION);
        Self {
            currency,
            value,
            fraction,
            spec: None,
        }
    }

    /// Zero in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self::from_parts(currency, 0, 0)
    }

    /// Smallest nonzero amount, one hundred-millionth of a unit
    pub fn min(currency: Currency) -> Self {
        Self::from_parts(currency, 0, 1)
    }

    /// Largest representable amount, `MAX_VALUE.99999999`
    pub fn max(currency: Currency) -> Self {
        Self::from_parts(currency, MAX_VALUE, MAX_FRACTION)
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Whole units
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Hundred-millionths of a unit
    pub fn fraction(&self) -> u32 {
        self.fraction
    }

    pub fn spec(&self) -> Option<&CurrencySpecification> {
        self.spec.as_ref()
    }

    /// Same value and fraction under another currency code
    ///
    /// # Examples
    /// ```
    /// use amount_math::Amount;
    ///
    /// let amount = Amount::from_json_string("USD:1.5").unwrap();
    /// let kudos = amount.with_currency("KUDOS").unwrap();
    /// assert_eq!(kudos.to_json_string(), "KUDOS:1.5");
    /// assert!(amount.with_currency("not valid").is_err());
    /// ```
    pub fn with_currency(&self, currency: &str) -> FormatResult<Self> {
        Ok(Self::from_parts(Currency::new(currency)?, self.value, self.fraction))
    }

    /// Same amount with display metadata attached or cleared
    pub fn with_spec(&self, spec: Option<CurrencySpecification>) -> Self {
        Self {
            spec,
            ..self.clone()
        }
    }

    pub(crate) fn same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency
            && self.value == other.value
            && self.fraction == other.fraction
    }
}

impl Eq for Amount {}

impl Hash for Amount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.hash(state);
        self.value.hash(state);
        self.fraction.hash(state);
    }
}

/// Amounts travel as their canonical `CURRENCY:value[.fraction]` string
#[cfg(feature = "serde")]
impl serde::Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_json_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Amount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Amount::from_json_string(&s).map_err(serde::de::Error::custom)
    }
}
