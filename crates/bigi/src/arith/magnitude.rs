//! Digit-slice kernels over unsigned magnitudes.
//!
//! Inputs are canonical little-endian decimal digit slices (no
//! most-significant zeros). Outputs may carry most-significant zeros; the
//! caller trims them, usually through `BigInt::from_parts`.

use std::cmp::Ordering;

use smallvec::smallvec;

use crate::value::Digits;

/// Compare two canonical magnitudes.
///
/// A longer slice is larger because neither carries leading zeros; equal
/// lengths compare from the most-significant digit down.
pub(crate) fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// `a + b`.
pub(crate) fn add(a: &[u8], b: &[u8]) -> Digits {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = Digits::with_capacity(long.len() + 1);
    let mut carry = 0u8;
    for (i, &digit) in long.iter().enumerate() {
        let total = digit + short.get(i).copied().unwrap_or(0) + carry;
        sum.push(total % 10);
        carry = total / 10;
    }
    if carry != 0 {
        sum.push(carry);
    }
    sum
}

/// `a - b`, requiring `a >= b`.
pub(crate) fn sub(a: &[u8], b: &[u8]) -> Digits {
    debug_assert!(cmp(a, b) != Ordering::Less, "magnitude subtraction underflow");
    let mut diff = Digits::with_capacity(a.len());
    let mut borrow = false;
    for (i, &digit) in a.iter().enumerate() {
        let subtrahend = b.get(i).copied().unwrap_or(0) + u8::from(borrow);
        if digit >= subtrahend {
            diff.push(digit - subtrahend);
            borrow = false;
        } else {
            diff.push(digit + 10 - subtrahend);
            borrow = true;
        }
    }
    debug_assert!(!borrow, "borrow out of the most-significant digit");
    diff
}

/// `a * b`, grade-school.
///
/// Partial products accumulate in place in a buffer of `len(a) + len(b)`
/// digits. Each cell stays below 100 (`9 + 9 * 9 + 9`), so `u8` never
/// overflows.
pub(crate) fn mul(a: &[u8], b: &[u8]) -> Digits {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut product: Digits = smallvec![0; long.len() + short.len()];
    for (i, &multiplier) in short.iter().enumerate() {
        if multiplier == 0 {
            continue;
        }
        let mut carry = 0u8;
        for (j, &digit) in long.iter().enumerate() {
            let total = product[i + j] + multiplier * digit + carry;
            product[i + j] = total % 10;
            carry = total / 10;
        }
        let mut k = i + long.len();
        while carry != 0 {
            let total = product[k] + carry;
            product[k] = total % 10;
            carry = total / 10;
            k += 1;
        }
    }
    product
}
