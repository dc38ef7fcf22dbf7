//! # Parsing
//!
//! Fractions are read from text as either a bare integer or `integer / integer`, with
//! optional whitespace around every part and an optional minus sign on either component.
//! Any other shape is a format failure; a well-formed component outside the `i32` range
//! is an overflow, and a zero denominator is rejected by construction.
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::error::FractionError;
use crate::fraction::Fraction;

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match bare_integer(text) {
            Ok(value) => Ok(Self::from(value)),
            Err(FractionError::Format(_)) => match text.split_once('/') {
                Some((numerator, denominator)) => Self::new(
                    component(numerator, text)?,
                    component(denominator, text)?,
                ),
                None => Err(format_error(text)),
            },
            Err(other) => Err(other),
        }
    }
}

impl Fraction {
    /// Parse, folding every failure into `None`.
    ///
    /// The conversion fails when the text does not have the accepted shape, when a
    /// component overflows the 32-bit range, or when the denominator is zero.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

/// The whole text as one integer, whitespace and sign allowed.
fn bare_integer(text: &str) -> Result<i32, FractionError> {
    text.trim().parse().map_err(|error| integer_error(error, text))
}

/// One side of the slash form: surrounding whitespace, an optional minus sign, digits.
fn component(part: &str, text: &str) -> Result<i32, FractionError> {
    let trimmed = part.trim();
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(format_error(text));
    }

    trimmed.parse().map_err(|error| integer_error(error, text))
}

fn integer_error(error: ParseIntError, text: &str) -> FractionError {
    match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => FractionError::Overflow,
        _ => format_error(text),
    }
}

fn format_error(text: &str) -> FractionError {
    FractionError::Format(format!(
        "\"{text}\" is neither an integer nor an `integer / integer` pair",
    ))
}

#[cfg(test)]
mod test {
    use crate::error::FractionError;
    use crate::frac;
    use crate::fraction::Fraction;

    #[test]
    fn bare_integers() {
        assert_eq!("7".parse(), Ok(frac!(7)));
        assert_eq!("-7".parse(), Ok(frac!(-7)));
        assert_eq!(" 42 ".parse(), Ok(frac!(42)));
        assert_eq!("2147483647".parse(), Ok(Fraction::MAX));
    }

    #[test]
    fn slash_form() {
        assert_eq!("3/4".parse(), Ok(frac!(3, 4)));
        assert_eq!("2/4".parse(), Ok(frac!(1, 2)));
        assert_eq!(" 3 / 4 ".parse(), Ok(frac!(3, 4)));
        assert_eq!("-3/4".parse(), Ok(frac!(-3, 4)));
        assert_eq!("3/-4".parse(), Ok(frac!(-3, 4)));
        assert_eq!("-3/-4".parse(), Ok(frac!(3, 4)));
    }

    #[test]
    fn format_failures() {
        for text in ["abc", "", "3/", "/4", "3//4", "1/2/3", "3.5", "a/2", "+1/2"] {
            assert!(
                matches!(text.parse::<Fraction>(), Err(FractionError::Format(_))),
                "{text:?} should be a format failure",
            );
        }
    }

    #[test]
    fn overflow_failures() {
        assert_eq!(
            "2147483648".parse::<Fraction>(),
            Err(FractionError::Overflow),
        );
        assert_eq!(
            "99999999999/2".parse::<Fraction>(),
            Err(FractionError::Overflow),
        );
        assert_eq!(
            "1/-2147483649".parse::<Fraction>(),
            Err(FractionError::Overflow),
        );
    }

    #[test]
    fn zero_denominator() {
        assert_eq!("1/0".parse::<Fraction>(), Err(FractionError::DivideByZero));
    }

    #[test]
    fn try_parse_folds_failures() {
        assert_eq!(Fraction::try_parse("3/4"), Some(frac!(3, 4)));
        assert_eq!(Fraction::try_parse("7"), Some(frac!(7)));
        assert_eq!(Fraction::try_parse("abc"), None);
        assert_eq!(Fraction::try_parse("1/0"), None);
        assert_eq!(Fraction::try_parse("99999999999"), None);
    }

    #[test]
    fn round_trip_through_display() {
        for fraction in [frac!(3, 4), frac!(-3, 4), frac!(7), frac!(0), Fraction::MIN] {
            assert_eq!(fraction.to_string().parse(), Ok(fraction));
        }
    }
}
