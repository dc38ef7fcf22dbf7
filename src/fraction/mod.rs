//! # The fraction type
//!
//! A rational number stored as an `i32` numerator/denominator pair. Construction
//! normalizes the quotient through the decimal domain and strips common prime factors
//! at a bounded cost; values are immutable afterwards.
//!
//! Simplification is deliberately incomplete: pairs failing the complexity guard are
//! stored unreduced, and factors beyond the reach of the trial division survive. Every
//! observable behavior is therefore defined on the rational value rather than on the
//! stored pair, equality and hashing included.
use std::fmt;

use rust_decimal::Decimal;

use crate::decimal;
use crate::error::FractionError;
use crate::prime::PrimeGenerator;

mod arithmetic;
mod compare;
mod convert;
mod macros;
mod parse;

/// A rational number expressed in fractional form.
///
/// The denominator is never zero and the reported denominator is never negative; the
/// sign of the value sits on the numerator. Two fractions are equal when their quotients
/// are equal, regardless of how the pairs are stored.
#[derive(Clone, Copy, Debug)]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
}

impl Fraction {
    /// Zero whole units, 0 / 1.
    pub const ZERO: Self = Self { numerator: 0, denominator: 1 };
    /// The smallest value larger than zero, 1 / 1000000000.
    pub const EPSILON: Self = Self { numerator: 1, denominator: 1_000_000_000 };
    /// The largest representable value, `i32::MAX` / 1.
    pub const MAX: Self = Self { numerator: i32::MAX, denominator: 1 };
    /// The smallest representable value, `i32::MIN` / 1.
    pub const MIN: Self = Self { numerator: i32::MIN, denominator: 1 };
    /// One quarter, 1 / 4.
    pub const ONE_QUARTER: Self = Self { numerator: 1, denominator: 4 };
    /// One whole unit, 1 / 1.
    pub const ONE: Self = Self { numerator: 1, denominator: 1 };
    /// One half, 1 / 2.
    pub const ONE_HALF: Self = Self { numerator: 1, denominator: 2 };
    /// One third, 1 / 3.
    pub const ONE_THIRD: Self = Self { numerator: 1, denominator: 3 };

    /// Prime factors are only stripped when the denominator stays below this bound, or
    /// the numerator stays below [`Self::GUARD_NUMERATOR`].
    const GUARD_DENOMINATOR: i32 = 100_000;
    /// Companion bound of [`Self::GUARD_DENOMINATOR`] on the numerator side.
    const GUARD_NUMERATOR: i32 = 10_110;

    /// Create a fraction from a numerator and a denominator, simplifying where feasible.
    ///
    /// The quotient is first normalized through the decimal domain. When that round trip
    /// produces a denominator larger in magnitude than the one supplied, the raw pair is
    /// kept instead. A pair whose denominator is not 1 afterwards has its sign
    /// consolidated onto the numerator and, if the complexity guard allows, its common
    /// prime factors stripped by trial division; each stripped factor restarts the prime
    /// sequence, since dividing both components may expose smaller common factors.
    ///
    /// # Errors
    ///
    /// * `DivideByZero` when `denominator` is 0.
    /// * `Overflow` when the quotient cannot be represented, which of all valid pairs
    ///   only `i32::MIN / -1` triggers.
    pub fn new(numerator: i32, denominator: i32) -> Result<Self, FractionError> {
        if denominator == 0 {
            return Err(FractionError::DivideByZero);
        }

        let quotient = Decimal::from(numerator) / Decimal::from(denominator);
        let (mut n, mut d) = decimal::numerator_and_denominator(quotient)?;

        if denominator != i32::MIN && d > denominator.abs() {
            // The round trip made the denominator worse; the raw pair is the better form.
            n = numerator;
            d = denominator;
        }
        if d != 1 {
            let negative = (n < 0) != (d < 0);
            n = n.checked_abs().ok_or(FractionError::Overflow)?;
            d = d.checked_abs().ok_or(FractionError::Overflow)?;

            if d < Self::GUARD_DENOMINATOR || n < Self::GUARD_NUMERATOR {
                let mut primes = PrimeGenerator::new();

                let mut divisor = primes.next_prime();
                while divisor <= n && divisor <= d {
                    if n % divisor == 0 && d % divisor == 0 {
                        n /= divisor;
                        d /= divisor;
                        primes.reset();
                    }
                    divisor = primes.next_prime();
                }
            }
            if negative {
                n = -n;
            }
        }

        Ok(Self { numerator: n, denominator: d })
    }

    /// The numerator, in its simplified form if simplification was possible.
    #[must_use]
    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    /// The denominator, in its simplified form if simplification was possible.
    ///
    /// A degenerate internal denominator of 0 is reported as 1. Such a state cannot be
    /// reached through the public constructors; the contract is kept regardless.
    #[must_use]
    pub fn denominator(&self) -> i32 {
        if self.denominator == 0 {
            1
        } else {
            self.denominator
        }
    }

    /// The quotient in the wide decimal domain.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from(self.numerator()) / Decimal::from(self.denominator())
    }

    /// Whether the value is a whole number.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator() == 1
    }

    /// Whether the value is an even whole number.
    #[must_use]
    pub fn is_even_integer(&self) -> bool {
        self.is_integer() && self.numerator % 2 == 0
    }

    /// Whether the value is an odd whole number.
    #[must_use]
    pub fn is_odd_integer(&self) -> bool {
        self.is_integer() && self.numerator % 2 != 0
    }

    /// Whether the value is smaller than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        *self < Self::ZERO
    }

    /// Whether the value is zero or larger.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.is_negative()
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// `DivideByZero` for a zero-valued fraction.
    pub fn reciprocal(self) -> Result<Self, FractionError> {
        Self::new(self.denominator(), self.numerator())
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} / {}", self.numerator(), self.denominator())
    }
}
