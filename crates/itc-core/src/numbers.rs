//! Conversion between ITC and INTELLI, its smallest indivisible unit.
//!
//! All arithmetic is exact: values are held as [`BigDecimal`] and scaling by
//! 10^18 only moves the decimal exponent, so no precision is ever lost.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::FromPrimitive;

use crate::error::ConversionError;

/// Number of INTELLI in one ITC.
pub const INTELLI_PER_ITC: u64 = 1_000_000_000_000_000_000;

/// `INTELLI_PER_ITC` as a power of ten.
const SCALE_EXPONENT: i64 = 18;

// ==============================================================================
// Quantity Input
// ==============================================================================

/// A numeric value as callers tend to have it: text, integer, float, or an
/// exact decimal.
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity {
    Text(String),
    Integer(BigInt),
    Float(f64),
    Decimal(BigDecimal),
}

impl Quantity {
    /// Exact decimal value of a non-float quantity.
    fn into_exact(self) -> Result<BigDecimal, ConversionError> {
        match self {
            Self::Text(text) => BigDecimal::from_str(text.trim())
                .map_err(|_| ConversionError::InvalidNumber(text)),
            Self::Integer(n) => Ok(BigDecimal::new(n, 0)),
            Self::Decimal(d) => Ok(d),
            Self::Float(f) => float_via_text(f),
        }
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Quantity {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<BigDecimal> for Quantity {
    fn from(value: BigDecimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&BigDecimal> for Quantity {
    fn from(value: &BigDecimal) -> Self {
        Self::Decimal(value.clone())
    }
}

impl From<BigInt> for Quantity {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

macro_rules! quantity_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Quantity {
            fn from(value: $t) -> Self {
                Self::Integer(BigInt::from(value))
            }
        })*
    };
}

quantity_from_int!(i32, i64, i128, u32, u64, u128);

// ==============================================================================
// Conversions
// ==============================================================================

/// Convert an amount in INTELLI to ITC.
///
/// Floats are truncated to an integer first: INTELLI is the atomic unit, so
/// `1e18 + 0.6` INTELLI is exactly 1 ITC.
pub fn intelli_to_itc(intelli: impl Into<Quantity>) -> Result<BigDecimal, ConversionError> {
    let intelli = match intelli.into() {
        Quantity::Float(f) => truncate_float(f)?,
        other => other.into_exact()?,
    };
    Ok(shift_exponent(&intelli, SCALE_EXPONENT))
}

/// Convert an amount in ITC to INTELLI.
///
/// Floats go through their shortest decimal representation, so `1.5` maps to
/// exactly `1.5 * 10^18` rather than the nearest binary fraction.
pub fn itc_to_intelli(itc: impl Into<Quantity>) -> Result<BigDecimal, ConversionError> {
    let itc = itc.into().into_exact()?;
    Ok(shift_exponent(&itc, -SCALE_EXPONENT))
}

/// Divide by `10^places` (multiply when negative) without rounding.
fn shift_exponent(value: &BigDecimal, places: i64) -> BigDecimal {
    let (digits, scale) = value.as_bigint_and_exponent();
    BigDecimal::new(digits, scale + places)
}

fn truncate_float(value: f64) -> Result<BigDecimal, ConversionError> {
    let truncated = BigInt::from_f64(value.trunc()).ok_or(ConversionError::NonFinite(value))?;
    Ok(BigDecimal::new(truncated, 0))
}

fn float_via_text(value: f64) -> Result<BigDecimal, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::NonFinite(value));
    }
    let text = value.to_string();
    BigDecimal::from_str(&text).map_err(|_| ConversionError::InvalidNumber(text))
}

// ==============================================================================
// Formatting
// ==============================================================================

/// Widest exponent [`to_plain_string`] will expand into digits.
pub const MAX_PLAIN_EXPONENT: u64 = 1024;

/// Render without exponent notation or trailing fractional zeros,
/// e.g. `1.5`, `1500000000000000000`, `0.000000000000000001`.
///
/// Values whose normalized exponent exceeds [`MAX_PLAIN_EXPONENT`] in either
/// direction are rejected rather than expanded.
pub fn to_plain_string(value: &BigDecimal) -> Result<String, ConversionError> {
    let normalized = value.normalized();
    let (digits, scale) = normalized.as_bigint_and_exponent();
    if scale.unsigned_abs() > MAX_PLAIN_EXPONENT {
        return Err(ConversionError::OutOfRange(format!("{digits}e{}", -scale)));
    }
    Ok(normalized.to_plain_string())
}
