//! Truncating division: quotient and remainder.
//!
//! The quotient rounds toward zero and the remainder takes the dividend's
//! sign, so `q * b + r == a` and `|r| < |b|` always hold.

use std::cmp::Ordering;

use super::magnitude;
use crate::error::{BigIntError, BigIntResult};
use crate::small::small;
use crate::value::{trim, Digits};
use crate::BigInt;

impl BigInt {
    /// `(self / divisor, self % divisor)`.
    ///
    /// # Errors
    ///
    /// [`BigIntError::DivideByZero`] when `divisor` is zero.
    pub fn div_mod(&self, divisor: &Self) -> BigIntResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(BigIntError::DivideByZero);
        }
        if self.is_zero() {
            return Ok((Self::zero(), Self::zero()));
        }
        let quotient_sign = self.sign().product(divisor.sign());
        if divisor.is_unit() {
            return Ok((self.with_sign(quotient_sign), Self::zero()));
        }
        match self.compare_abs(divisor) {
            Ordering::Equal => return Ok((Self::unit(quotient_sign), Self::zero())),
            Ordering::Less => return Ok((Self::zero(), self.clone())),
            Ordering::Greater => {}
        }

        let (quotient, remainder) = long_division(self.digits(), divisor.digits());
        Ok((
            Self::from_parts(quotient, quotient_sign),
            Self::from_parts(remainder, self.sign()),
        ))
    }

    /// Truncated quotient.
    ///
    /// # Errors
    ///
    /// [`BigIntError::DivideByZero`] when `divisor` is zero.
    pub fn divide(&self, divisor: &Self) -> BigIntResult<Self> {
        self.div_mod(divisor).map(|(quotient, _)| quotient)
    }

    /// Remainder of truncated division; zero or the dividend's sign.
    ///
    /// # Errors
    ///
    /// [`BigIntError::DivideByZero`] when `divisor` is zero.
    pub fn modulo(&self, divisor: &Self) -> BigIntResult<Self> {
        self.div_mod(divisor).map(|(_, remainder)| remainder)
    }
}

/// Schoolbook long division of magnitudes, `dividend > divisor > 1`.
///
/// Walks the dividend from its most-significant digit, bringing each digit
/// down into a running remainder. Each quotient digit is the largest `d` in
/// `9..=1` with `divisor * d <= remainder`, or `0` while the remainder is
/// still below the divisor. Returns little-endian `(quotient, remainder)`.
fn long_division(dividend: &[u8], divisor: &[u8]) -> (Digits, Digits) {
    tracing::trace!(
        dividend_digits = dividend.len(),
        divisor_digits = divisor.len(),
        "long division"
    );

    // Most-significant digit first; reversed before returning.
    let mut quotient = Digits::with_capacity(dividend.len());
    let mut part = Digits::with_capacity(divisor.len() + 1);

    for &digit in dividend.iter().rev() {
        part.insert(0, digit);
        trim(&mut part);

        if magnitude::cmp(&part, divisor) == Ordering::Less {
            quotient.push(0);
            continue;
        }

        let mut guess = 9;
        let mut check = magnitude::mul(divisor, small(guess).digits());
        trim(&mut check);
        // `part >= divisor`, so the probe stops at 1 at the latest.
        while guess > 1 && magnitude::cmp(&check, &part) == Ordering::Greater {
            guess -= 1;
            check = magnitude::mul(divisor, small(guess).digits());
            trim(&mut check);
        }

        quotient.push(guess);
        part = magnitude::sub(&part, &check);
        trim(&mut part);
    }

    quotient.reverse();
    (quotient, part)
}
