//! # Numeric helper traits
//!
//! Small traits shared by the numeric types of this crate. The contracts are
//! mathematically exact, the implementations are not: finite representation limits what
//! the names promise, which is a fundamental restriction rather than an oversight.
use std::ops::Neg;

use num_traits::Zero;

/// Absolute value of a number.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Abs: Neg<Output = Self> + Ord + Zero {
    /// The absolute value of a number.
    ///
    /// Compute the additive inverse if the number is smaller than the additive identity.
    fn abs(self) -> Self {
        if self < Self::zero() {
            -self
        } else {
            self
        }
    }
}

impl<T: Neg<Output = Self> + Ord + Zero> Abs for T {
}
