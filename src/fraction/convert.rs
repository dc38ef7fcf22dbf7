//! # Conversions
//!
//! Numeric conversions in and out of the fraction type. All of them are centralized:
//! conversions from integers funnel through `i32`, conversions to integers funnel
//! through the truncated decimal quotient. Each direction has a checked family that
//! reports `Overflow` and a single named wrapping entry point that keeps the low bits.
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use crate::decimal::ToFraction;
use crate::error::FractionError;
use crate::fraction::Fraction;

impl Fraction {
    /// The whole part of the quotient, truncated toward zero.
    ///
    /// This is the core every conversion to an integer width goes through; narrower
    /// widths are range checked against it, and wrapping casts are the caller's `as`
    /// over it.
    ///
    /// # Errors
    ///
    /// `Overflow` when the whole part does not fit an `i32`; unreachable for values
    /// built through the public constructors, whose quotients stay in range.
    pub fn to_whole(&self) -> Result<i32, FractionError> {
        self.to_decimal()
            .trunc()
            .to_i32()
            .ok_or(FractionError::Overflow)
    }

    /// Keep only the low 32 bits of an integer and take them as the numerator.
    ///
    /// The wrapping counterpart of the `TryFrom` conversions; values outside the `i32`
    /// range are not reported but wrapped, matching unchecked narrowing casts.
    #[must_use]
    pub fn from_wrapping(value: i128) -> Self {
        Self::from(value as i32)
    }
}

macro_rules! from_narrow_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fraction {
                /// A whole number of units: the denominator is 1, no simplification is
                /// needed.
                fn from(integer: $t) -> Self {
                    Self { numerator: i32::from(integer), denominator: 1 }
                }
            }
        )*
    };
}

from_narrow_integer!(i8, u8, i16, u16, i32);

macro_rules! try_from_wide_integer {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Fraction {
                type Error = FractionError;

                /// # Errors
                ///
                /// `Overflow` when the value does not fit an `i32` numerator.
                fn try_from(integer: $t) -> Result<Self, Self::Error> {
                    i32::try_from(integer)
                        .map(Self::from)
                        .map_err(|_| FractionError::Overflow)
                }
            }
        )*
    };
}

try_from_wide_integer!(i64, u32, u64, i128, u128, isize, usize);

macro_rules! try_into_integer {
    ($($t:ty),*) => {
        $(
            impl TryFrom<Fraction> for $t {
                type Error = FractionError;

                /// # Errors
                ///
                /// `Overflow` when the truncated quotient does not fit the target width.
                fn try_from(fraction: Fraction) -> Result<Self, Self::Error> {
                    <$t>::try_from(fraction.to_whole()?).map_err(|_| FractionError::Overflow)
                }
            }
        )*
    };
}

try_into_integer!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);

impl From<Fraction> for Decimal {
    fn from(fraction: Fraction) -> Self {
        fraction.to_decimal()
    }
}

impl TryFrom<Decimal> for Fraction {
    type Error = FractionError;

    /// # Errors
    ///
    /// `Overflow` when the value lies outside the safety margin around the 32-bit
    /// integer range.
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        value.to_fraction()
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;

    use crate::error::FractionError;
    use crate::frac;
    use crate::fraction::Fraction;

    #[test]
    fn from_narrow_integers() {
        assert_eq!(Fraction::from(-3_i8), frac!(-3));
        assert_eq!(Fraction::from(250_u8), frac!(250));
        assert_eq!(Fraction::from(-30_000_i16), frac!(-30_000));
        assert_eq!(Fraction::from(60_000_u16), frac!(60_000));
        assert_eq!(Fraction::from(i32::MIN), Fraction::MIN);

        let seven = Fraction::from(7);
        assert_eq!(seven.numerator(), 7);
        assert_eq!(seven.denominator(), 1);
    }

    #[test]
    fn try_from_wide_integers() {
        assert_eq!(Fraction::try_from(7_i64), Ok(frac!(7)));
        assert_eq!(Fraction::try_from(7_u64), Ok(frac!(7)));
        assert_eq!(Fraction::try_from(i64::from(i32::MAX)), Ok(Fraction::MAX));
        assert_eq!(
            Fraction::try_from(i64::from(i32::MAX) + 1),
            Err(FractionError::Overflow),
        );
        assert_eq!(Fraction::try_from(u32::MAX), Err(FractionError::Overflow));
        assert_eq!(
            Fraction::try_from(i128::from(i32::MIN) - 1),
            Err(FractionError::Overflow),
        );
        assert_eq!(Fraction::try_from(u128::MAX), Err(FractionError::Overflow));
    }

    #[test]
    fn from_wrapping_keeps_low_bits() {
        assert_eq!(Fraction::from_wrapping(7), frac!(7));
        assert_eq!(
            Fraction::from_wrapping(i128::from(i32::MAX) + 1),
            Fraction::MIN,
        );
        assert_eq!(Fraction::from_wrapping(1 << 32), frac!(0));
    }

    #[test]
    fn into_integers_truncate_toward_zero() {
        assert_eq!(i32::try_from(frac!(7, 2)), Ok(3));
        assert_eq!(i32::try_from(frac!(-7, 2)), Ok(-3));
        assert_eq!(i64::try_from(frac!(42)), Ok(42_i64));
        assert_eq!(u8::try_from(frac!(255)), Ok(255_u8));
        assert_eq!(u128::try_from(frac!(3, 4)), Ok(0_u128));
    }

    #[test]
    fn into_integers_report_overflow() {
        assert_eq!(u8::try_from(frac!(256)), Err(FractionError::Overflow));
        assert_eq!(i8::try_from(frac!(-129)), Err(FractionError::Overflow));
        assert_eq!(u32::try_from(frac!(-1)), Err(FractionError::Overflow));
        assert_eq!(i16::try_from(Fraction::MAX), Err(FractionError::Overflow));
    }

    #[test]
    fn to_whole() {
        assert_eq!(frac!(9, 4).to_whole(), Ok(2));
        assert_eq!(frac!(-9, 4).to_whole(), Ok(-2));
        assert_eq!(Fraction::MIN.to_whole(), Ok(i32::MIN));
    }

    #[test]
    fn decimal_round_trip() {
        assert_eq!(Decimal::from(frac!(1, 2)).to_string(), "0.5");
        assert_eq!(Fraction::try_from(Decimal::new(25, 2)), Ok(frac!(1, 4)));
        assert_eq!(
            Fraction::try_from(Decimal::from(i64::from(i32::MAX) + 1)),
            Err(FractionError::Overflow),
        );
    }
}
