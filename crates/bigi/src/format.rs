//! [`BigInt`] to text in any radix.
//!
//! Radix 10 reads the stored digits directly (see the `Display` impl in
//! `value.rs`); every other radix peels digits off with repeated division.

use crate::error::BigIntResult;
use crate::radix::{self, NUMERALS};
use crate::small::small;
use crate::BigInt;

impl BigInt {
    /// Canonical text in `radix`: uppercase letters for digits above 9, a
    /// leading `-` for negative values, and `"0"` for zero in every radix.
    ///
    /// # Errors
    ///
    /// [`BigIntError::InvalidRadix`](crate::BigIntError::InvalidRadix) for a
    /// radix outside `2..=36`.
    pub fn to_string_radix(&self, radix: u32) -> BigIntResult<String> {
        let radix = radix::check(radix)?;
        if self.is_zero() {
            return Ok(String::from("0"));
        }
        if radix == 10 {
            return Ok(self.to_string());
        }

        tracing::trace!(radix, digits = self.digit_count(), "radix formatting");
        let divisor = small(radix);
        let mut magnitude = self.abs();
        let mut text = Vec::new();
        while !magnitude.is_zero() {
            let (quotient, remainder) = magnitude.div_mod(divisor)?;
            text.push(NUMERALS[remainder_index(&remainder)]);
            magnitude = quotient;
        }
        if self.is_negative() {
            text.push(b'-');
        }
        text.reverse();
        Ok(text.into_iter().map(char::from).collect())
    }
}

/// A remainder below the radix, at most two decimal digits, as a table index.
fn remainder_index(remainder: &BigInt) -> usize {
    remainder
        .digits()
        .iter()
        .rev()
        .fold(0, |acc, &d| acc * 10 + usize::from(d))
}

#[cfg(test)]
mod tests;
