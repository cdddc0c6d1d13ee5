//! Addition and subtraction.
//!
//! Mixed-sign cases reduce to one routine, `magnitude_difference`,
//! so there is a single borrow loop to get right.

use super::magnitude;
use crate::{BigInt, Sign};
use std::cmp::Ordering;

impl BigInt {
    /// `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        if self.sign() == other.sign() {
            Self::from_parts(magnitude::add(self.digits(), other.digits()), self.sign())
        } else {
            // a + (-b) == a - b
            Self::magnitude_difference(self, other, self.sign())
        }
    }

    /// `self - other`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.negate();
        }
        if self.sign() == other.sign() {
            Self::magnitude_difference(self, other, self.sign())
        } else {
            // a - (-b) == a + b
            Self::from_parts(magnitude::add(self.digits(), other.digits()), self.sign())
        }
    }

    /// `sign * (|a| - |b|)`.
    fn magnitude_difference(a: &Self, b: &Self, sign: Sign) -> Self {
        match a.compare_abs(b) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::from_parts(magnitude::sub(a.digits(), b.digits()), sign),
            Ordering::Less => {
                Self::from_parts(magnitude::sub(b.digits(), a.digits()), sign.negate())
            }
        }
    }
}
