//! Exponentiation and modular exponentiation by square-and-multiply.

use std::cmp::Ordering;

use crate::error::{BigIntError, BigIntResult};
use crate::small::small;
use crate::BigInt;

/// Largest exponent magnitude [`BigInt::pow`] accepts (`2^31 - 1`).
pub const MAX_EXPONENT: u32 = 0x7FFF_FFFF;

impl BigInt {
    /// `self` raised to `exponent`.
    ///
    /// `0^0 == 1`. A negative exponent yields `0` unless the base is a unit,
    /// in which case `1^n == 1` and `(-1)^n` alternates with the parity of
    /// `n`.
    ///
    /// # Errors
    ///
    /// [`BigIntError::ExponentTooLarge`] for a positive exponent above
    /// `MAX_EXPONENT` when the base is neither zero nor a unit.
    #[tracing::instrument(level = "trace", skip_all, fields(base_digits = self.digit_count()))]
    pub fn pow(&self, exponent: &Self) -> BigIntResult<Self> {
        if self.is_unit() {
            return Ok(if self.is_positive() || exponent.is_even() {
                Self::one()
            } else {
                self.clone()
            });
        }
        if exponent.is_zero() {
            return Ok(Self::one());
        }
        if self.is_zero() || exponent.is_negative() {
            return Ok(Self::zero());
        }
        if exponent.is_unit() {
            return Ok(self.clone());
        }
        if exponent.compare_abs(&Self::from(MAX_EXPONENT)) == Ordering::Greater {
            return Err(BigIntError::ExponentTooLarge);
        }

        let two = small(2);
        let mut base = self.clone();
        let mut exponent = exponent.clone();
        let mut accumulator = Self::one();
        while exponent.is_positive() {
            if exponent.is_odd() {
                accumulator = accumulator.multiply(&base);
                if exponent.is_unit() {
                    // Skip the final, unused squaring.
                    break;
                }
            }
            base = base.square();
            exponent = exponent.divide(two)?;
        }
        Ok(accumulator)
    }

    /// [`pow`](Self::pow) with a native exponent.
    ///
    /// # Errors
    ///
    /// [`BigIntError::ExponentTooLarge`] when `exponent > MAX_EXPONENT`.
    pub fn pow_u32(&self, exponent: u32) -> BigIntResult<Self> {
        self.pow(&Self::from(exponent))
    }

    /// `self^exponent mod modulus`, reducing after every multiplication.
    ///
    /// The result follows [`modulo`](Self::modulo): it is zero or carries the
    /// sign of `self^exponent`. A zero exponent gives `1 mod modulus`.
    ///
    /// # Errors
    ///
    /// - [`BigIntError::DivideByZero`] when `modulus` is zero.
    /// - [`BigIntError::NegativeExponent`] when `exponent` is negative.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(exponent_digits = exponent.digit_count(), modulus_digits = modulus.digit_count())
    )]
    pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> BigIntResult<Self> {
        if modulus.is_zero() {
            return Err(BigIntError::DivideByZero);
        }
        if exponent.is_negative() {
            return Err(BigIntError::NegativeExponent);
        }

        let two = small(2);
        let mut result = Self::one().modulo(modulus)?;
        let mut base = self.modulo(modulus)?;
        let mut exponent = exponent.clone();
        while exponent.is_positive() {
            if exponent.is_odd() {
                result = result.multiply(&base).modulo(modulus)?;
            }
            exponent = exponent.divide(two)?;
            if exponent.is_positive() {
                base = base.square().modulo(modulus)?;
            }
        }
        Ok(result)
    }
}
