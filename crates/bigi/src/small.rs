//! Process-wide table of the values `0..=36`.
//!
//! Division probes trial quotient digits `1..=9` against it, and the parser
//! and formatter use it for radix values and per-digit values up to base 36.
//! The table is built once on first use and never written again.

use std::sync::OnceLock;

use crate::BigInt;

/// Largest magnitude held by the table.
pub const SMALL_MAX: u8 = 36;

const SMALL_COUNT: usize = SMALL_MAX as usize + 1;

static SMALL_VALUES: OnceLock<[BigInt; SMALL_COUNT]> = OnceLock::new();

fn table() -> &'static [BigInt; SMALL_COUNT] {
    SMALL_VALUES.get_or_init(|| std::array::from_fn(|i: usize| BigInt::from(i)))
}

/// Shared value for `n`. `n` must be at most [`SMALL_MAX`].
#[inline]
pub(crate) fn small(n: u8) -> &'static BigInt {
    debug_assert!(n <= SMALL_MAX, "{n} is outside the small-value table");
    &table()[usize::from(n)]
}

impl BigInt {
    /// Shared table entry for `n`, or `None` when `n > 36`.
    pub fn small(n: u32) -> Option<&'static BigInt> {
        usize::try_from(n).ok().and_then(|i| table().get(i))
    }
}

#[cfg(test)]
mod tests;
