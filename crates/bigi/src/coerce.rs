//! Explicit conversion of loosely typed input into [`BigInt`].
//!
//! [`ToBigInt`] is the single entry point for "anything number-like": an
//! existing value passes through borrowed, text goes through the parser,
//! and native numbers convert directly. Types without an impl are rejected
//! at compile time.

use std::borrow::Cow;

use crate::error::BigIntResult;
use crate::small::small;
use crate::BigInt;

/// Conversion into a [`BigInt`], borrowing when the input already is one.
pub trait ToBigInt {
    /// # Errors
    ///
    /// Parser errors for text, and
    /// [`BigIntError::InvalidFormat`](crate::BigIntError::InvalidFormat) for
    /// non-finite floats. Integer conversions never fail.
    fn to_bigint(&self) -> BigIntResult<Cow<'_, BigInt>>;
}

impl ToBigInt for BigInt {
    #[inline]
    fn to_bigint(&self) -> BigIntResult<Cow<'_, BigInt>> {
        Ok(Cow::Borrowed(self))
    }
}

impl ToBigInt for str {
    fn to_bigint(&self) -> BigIntResult<Cow<'_, BigInt>> {
        BigInt::parse(self).map(Cow::Owned)
    }
}

impl ToBigInt for String {
    fn to_bigint(&self) -> BigIntResult<Cow<'_, BigInt>> {
        self.as_str().to_bigint()
    }
}

impl ToBigInt for f64 {
    fn to_bigint(&self) -> BigIntResult<Cow<'_, BigInt>> {
        BigInt::from_f64(*self).map(Cow::Owned)
    }
}

impl ToBigInt for f32 {
    fn to_bigint(&self) -> BigIntResult<Cow<'_, BigInt>> {
        BigInt::from_f64(f64::from(*self)).map(Cow::Owned)
    }
}

macro_rules! impl_to_bigint_native {
    ($($t:ty),*) => {
        $(
            impl ToBigInt for $t {
                #[inline]
                fn to_bigint(&self) -> BigIntResult<Cow<'_, BigInt>> {
                    Ok(Cow::Owned(BigInt::from(*self)))
                }
            }
        )*
    };
}

impl_to_bigint_native!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Convert optional input. A missing value is zero.
///
/// # Errors
///
/// Whatever [`ToBigInt::to_bigint`] reports for the input.
pub fn coerce<T: ToBigInt + ?Sized>(input: Option<&T>) -> BigIntResult<Cow<'_, BigInt>> {
    match input {
        Some(value) => value.to_bigint(),
        None => Ok(Cow::Borrowed(small(0))),
    }
}
