//! Multiplication.

use super::magnitude;
use crate::BigInt;

impl BigInt {
    /// `self * other`.
    ///
    /// Zero and unit operands short-circuit; everything else goes through
    /// the O(n·m) schoolbook kernel.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let sign = self.sign().product(other.sign());
        if self.is_unit() {
            return other.with_sign(sign);
        }
        if other.is_unit() {
            return self.with_sign(sign);
        }
        Self::from_parts(magnitude::mul(self.digits(), other.digits()), sign)
    }

    /// `self * self`.
    #[must_use]
    pub fn square(&self) -> Self {
        self.multiply(self)
    }
}
