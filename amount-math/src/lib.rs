//! # Amount Math Library
//!
//! Exact monetary amounts using fixed-point integer arithmetic.
//! An [`Amount`] never touches binary floating point: it is a currency code,
//! a whole-unit `value` and a `fraction` counted in hundred-millionths of a unit.
//!
//! ## Key Features
//!
//! - **Strict parsing** of the canonical `CURRENCY:value[.fraction]` form
//! - **Overflow-checked arithmetic**: nothing is ever clamped or rounded
//! - **Minimal canonical formatting**: `3.50` is written back as `3.5`
//! - **Keypad-style input editing** on exact decimals
//!
//! ## Fixed-Point Representation
//!
//! ```rust
//! use amount_math::Amount;
//!
//! // USD 3.50 is stored as value = 3, fraction = 50_000_000 (8 decimal places)
//! let amount: Amount = "USD:3.50".parse().unwrap();
//! assert_eq!(amount.value(), 3);
//! assert_eq!(amount.fraction(), 50_000_000);
//! assert_eq!(amount.to_json_string(), "USD:3.5");
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize [`Amount`] as its canonical string and
//!   [`CurrencySpecification`] with snake_case fields. Its tests live in
//!   `tests/serde_format.rs` and run with `cargo test --features serde`.

pub mod validation;
pub mod amount;
pub mod parser;
pub mod arithmetic;
pub mod formatting;
pub mod currency_spec;
pub mod input;
pub mod conversions;

pub use validation::*;
pub use amount::*;
pub use formatting::*;
pub use currency_spec::*;

use thiserror::Error;

/// Maximum whole-unit value of an amount (2^52)
pub const MAX_VALUE: u64 = 1 << 52;

/// Maximum fractional value (99_999_999 hundred-millionths)
pub const MAX_FRACTION: u32 = 99_999_999;

/// Number of fractional units in one whole unit (1e8)
pub const FRACTIONAL_BASE: u32 = 100_000_000;

/// Maximum number of digits after the decimal point
pub const MAX_FRACTION_LENGTH: usize = 8;

/// Fractional digits accepted by the input editor when no currency specification is attached
pub const DEFAULT_INPUT_DECIMALS: u32 = 2;

/// Input that does not describe a valid amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Currency code is not 1-12 characters of `[-_*A-Za-z0-9]`
    #[error("Invalid currency: {0:?}")]
    InvalidCurrency(String),
    /// Whole-unit value is missing, negative or above [`MAX_VALUE`]
    #[error("Value {0:?} is not within 0..={}", MAX_VALUE)]
    ValueOutOfRange(Option<i64>),
    /// Fraction is missing or above [`MAX_FRACTION`]
    #[error("Fraction {0:?} is not within 0..={}", MAX_FRACTION)]
    FractionOutOfRange(Option<u32>),
    /// More than [`MAX_FRACTION_LENGTH`] digits after the decimal point
    #[error("Fraction {0:?} too long")]
    FractionTooLong(String),
    /// Not of the form `CURRENCY:VALUE`
    #[error("Invalid amount format: {0:?}")]
    BadAmountFormat(String),
}

/// Arithmetic result would leave `0..=MAX_VALUE.MAX_FRACTION`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Amount overflow")]
pub struct OverflowError;

/// Either kind of amount failure, for callers that handle both on one channel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Overflow(#[from] OverflowError),
}

/// Result type alias for parsing and validation
pub type FormatResult<T> = Result<T, FormatError>;

/// Result type alias for arithmetic
pub type OverflowResult<T> = Result<T, OverflowError>;

/// Result type alias for mixed parse/arithmetic pipelines
pub type AmountResult<T> = Result<T, AmountError>;
