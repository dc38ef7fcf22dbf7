//! # Decimal conversions
//!
//! The wide decimal domain used by fraction construction and arithmetic. A decimal
//! value is digested into an integer numerator/denominator pair by rounding it into the
//! safe precision band and reading the digits on either side of the decimal point. The
//! derived pair shares no power of ten, but may still share other prime factors;
//! stripping those is the job of fraction construction, not of this module.
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::FractionError;
use crate::fraction::Fraction;

pub mod notation;

/// Largest magnitude that is still given fractional precision. Values beyond it are
/// truncated to their whole part before conversion.
const PRECISION_BAND: i32 = 100_000_000;

/// Number of decimal places a value is rounded to before its digits are read.
const SAFE_PLACES: u32 = 9;

/// Conversion of a decimal value into a fraction.
pub trait ToFraction {
    /// Convert into an exactly or approximately equivalent fraction.
    ///
    /// # Errors
    ///
    /// `Overflow` when the value lies outside the safety margin around the 32-bit
    /// integer range.
    fn to_fraction(&self) -> Result<Fraction, FractionError>;
}

impl ToFraction for Decimal {
    fn to_fraction(&self) -> Result<Fraction, FractionError> {
        let (numerator, denominator) = numerator_and_denominator(*self)?;

        Fraction::new(numerator, denominator)
    }
}

/// Derive an integer numerator and denominator representing the decimal value.
///
/// The value is rounded to [`SAFE_PLACES`] decimal places, or truncated to its whole
/// part when its magnitude exceeds [`PRECISION_BAND`]. If the remaining digits would not
/// fit a 32-bit numerator, the value is rounded again to however many places do fit.
///
/// The returned denominator is the power of ten matching the fractional digit count and
/// the sign sits on the numerator.
///
/// # Errors
///
/// `Overflow` when the value lies outside `(i32::MIN - 1, i32::MAX + 1)`.
pub fn numerator_and_denominator(value: Decimal) -> Result<(i32, i32), FractionError> {
    let lower = Decimal::from(i32::MIN) - Decimal::ONE;
    let upper = Decimal::from(i32::MAX) + Decimal::ONE;
    if value <= lower || value >= upper {
        return Err(FractionError::Overflow);
    }

    let band = Decimal::from(PRECISION_BAND);
    let mut value = if value < -band || value > band {
        value.trunc()
    } else {
        value.round_dp(SAFE_PLACES)
    };
    value = value.normalize();

    if value.is_integer() {
        return Ok((value.to_i32().ok_or(FractionError::Overflow)?, 1));
    }

    let negative = value.is_sign_negative();
    value = value.abs();

    let mut text = value.to_string();
    let concatenated: i128 = text
        .replace('.', "")
        .parse()
        .map_err(|_| FractionError::Overflow)?;
    if concatenated > i128::from(i32::MAX) {
        let whole_digits = text.find('.').unwrap_or(text.len());
        value = value
            .round_dp((SAFE_PLACES as usize).saturating_sub(whole_digits) as u32)
            .normalize();
        text = value.to_string();
    }

    let (whole, fractional) = match text.split_once('.') {
        Some((whole, fractional)) => (whole, fractional),
        None => (text.as_str(), ""),
    };

    let denominator = 10_i32.pow(fractional.len() as u32);
    let whole: i64 = whole.parse().map_err(|_| FractionError::Overflow)?;
    let fractional: i64 = if fractional.is_empty() {
        0
    } else {
        fractional.parse().map_err(|_| FractionError::Overflow)?
    };
    let numerator = i32::try_from(whole * i64::from(denominator) + fractional)
        .map_err(|_| FractionError::Overflow)?;

    Ok((if negative { -numerator } else { numerator }, denominator))
}
