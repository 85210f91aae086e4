//! # Currency Specification
//!
//! Rendering metadata a wallet backend publishes per currency. It is attached
//! to amounts for display only and never takes part in arithmetic or equality.

use std::collections::BTreeMap;

/// How a currency is named and how many fractional digits to input and show
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencySpecification {
    /// Human readable name, e.g. "Euro"
    pub name: String,
    /// Fractional digits the input editor works with
    pub num_fractional_input_digits: u32,
    /// Fractional digits normally shown
    pub num_fractional_normal_digits: u32,
    /// Fractional digits always shown, padded with trailing zeros
    pub num_fractional_trailing_zero_digits: u32,
    /// Alternative unit names keyed by power of ten; 0 is the primary unit
    pub alt_unit_names: BTreeMap<i32, String>,
}

impl CurrencySpecification {
    /// Primary symbol, the alternative unit name at index 0
    ///
    /// # Examples
    /// ```
    /// use amount_math::CurrencySpecification;
    ///
    /// let spec = CurrencySpecification {
    ///     name: "Euro".into(),
    ///     num_fractional_input_digits: 2,
    ///     num_fractional_normal_digits: 2,
    ///     num_fractional_trailing_zero_digits: 2,
    ///     alt_unit_names: [(0, "€".to_string())].into_iter().collect(),
    /// };
    /// assert_eq!(spec.symbol(), Some("€"));
    /// ```
    pub fn symbol(&self) -> Option<&str> {
        self.alt_unit_names.get(&0).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn euro() -> CurrencySpecification {
        CurrencySpecification {
            name: "Euro".into(),
            num_fractional_input_digits: 2,
            num_fractional_normal_digits: 2,
            num_fractional_trailing_zero_digits: 2,
            alt_unit_names: [(0, "€".to_string()), (-2, "ct".to_string())]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn test_symbol() {
        assert_eq!(euro().symbol(), Some("€"));

        let mut spec = euro();
        spec.alt_unit_names.remove(&0);
        assert_eq!(spec.symbol(), None);
    }
}
