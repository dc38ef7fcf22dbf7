//! # Comparisons
//!
//! Equality, ordering and hashing are all defined on the decimal quotient: fractions
//! compare by rational value, independent of how the pair happens to be stored. This
//! matters for pairs the complexity guard left unreduced, which must still compare and
//! hash equal to their reduced counterparts.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::fraction::Fraction;

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.to_decimal() == other.to_decimal()
    }
}

impl Eq for Fraction {
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_decimal().cmp(&other.to_decimal())
    }
}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_decimal().hash(state);
    }
}
