//! Magnitude and signed comparison.

use std::cmp::Ordering;

use super::magnitude;
use crate::{BigInt, Sign};

impl BigInt {
    /// Compare magnitudes, ignoring signs. Zero is below every non-zero
    /// magnitude.
    pub fn compare_abs(&self, other: &Self) -> Ordering {
        magnitude::cmp(self.digits(), other.digits())
    }

    /// Signed comparison.
    ///
    /// Differing signs (including zero against non-zero) decide on their own;
    /// otherwise the magnitudes decide, reversed when both are negative.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.sign(), other.sign()) {
            (a, b) if a != b => a.cmp(&b),
            (Sign::Zero, _) => Ordering::Equal,
            (Sign::Positive, _) => self.compare_abs(other),
            (Sign::Negative, _) => self.compare_abs(other).reverse(),
        }
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
