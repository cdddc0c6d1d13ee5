//! The canonical signed big-integer value.
//!
//! A [`BigInt`] is a sign plus a little-endian sequence of decimal digits.
//! Every value that leaves a constructor is canonical:
//!
//! - the sign is [`Sign::Zero`] exactly when the digit sequence is empty
//! - the most-significant stored digit is never `0`
//! - every stored digit is in `0..=9`
//!
//! Because the form is canonical, structural equality is numeric equality,
//! so `Eq` and `Hash` are derived. Values are never mutated after
//! construction; every arithmetic operation builds a fresh value.

use std::fmt;

use smallvec::{smallvec, SmallVec};

use crate::error::{BigIntError, BigIntResult};

/// Inline capacity covers every value that fits a `u64` and then some.
pub(crate) type Digits = SmallVec<[u8; 24]>;

/// Sign of a [`BigInt`], encoded as `-1`, `0`, `1`.
///
/// Variant order matches numeric order, so the derived `Ord` compares signs
/// the way the values they describe compare.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i8)]
pub enum Sign {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl Sign {
    /// The `-1`/`0`/`1` encoding.
    #[inline]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// Opposite sign; zero stays zero.
    #[inline]
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }

    /// Sign of a product of two values with these signs.
    #[inline]
    pub(crate) const fn product(self, other: Self) -> Self {
        match (self, other) {
            (Self::Zero, _) | (_, Self::Zero) => Self::Zero,
            (Self::Positive, Self::Positive) | (Self::Negative, Self::Negative) => Self::Positive,
            _ => Self::Negative,
        }
    }
}

/// Arbitrary-precision signed integer.
///
/// Obtain values through the parser ([`BigInt::parse`], `str::parse`),
/// native conversions (`BigInt::from(42_i64)`), the small-value table
/// ([`BigInt::small`]), or the result of an arithmetic operation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    /// Little-endian decimal digits, no most-significant zeros.
    digits: Digits,
}

impl BigInt {
    /// Build a value from little-endian digits and a sign.
    ///
    /// Trailing most-significant zeros are trimmed, and the sign is forced to
    /// [`Sign::Zero`] when nothing is left.
    pub(crate) fn from_parts(mut digits: Digits, sign: Sign) -> Self {
        trim(&mut digits);
        debug_assert!(digits.iter().all(|&d| d <= 9), "digit out of range");
        if digits.is_empty() {
            return Self::zero();
        }
        debug_assert!(sign != Sign::Zero, "non-empty digits with zero sign");
        Self { sign, digits }
    }

    /// Same magnitude, different sign.
    pub(crate) fn with_sign(&self, sign: Sign) -> Self {
        Self::from_parts(self.digits.clone(), sign)
    }

    /// The value `0`.
    #[inline]
    pub fn zero() -> Self {
        Self {
            sign: Sign::Zero,
            digits: Digits::new(),
        }
    }

    /// The value `1`.
    pub fn one() -> Self {
        Self {
            sign: Sign::Positive,
            digits: smallvec![1],
        }
    }

    /// The value `-1`.
    pub fn minus_one() -> Self {
        Self {
            sign: Sign::Negative,
            digits: smallvec![1],
        }
    }

    /// `1` or `-1` for a non-zero sign, `0` for [`Sign::Zero`].
    pub(crate) fn unit(sign: Sign) -> Self {
        match sign {
            Sign::Zero => Self::zero(),
            Sign::Positive => Self::one(),
            Sign::Negative => Self::minus_one(),
        }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Magnitude digits, least-significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of decimal digits in the magnitude (`0` for zero).
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Zero counts as even.
    #[inline]
    pub fn is_even(&self) -> bool {
        self.digits.first().map_or(true, |&d| d % 2 == 0)
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// True when the magnitude is exactly `1`.
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.digits.as_slice() == [1]
    }

    /// Absolute value. Never negative.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.negate()
        } else {
            self.clone()
        }
    }

    /// Additive inverse. Zero stays zero.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            sign: self.sign.negate(),
            digits: self.digits.clone(),
        }
    }

    /// Lossy conversion to a native float.
    ///
    /// Goes through the decimal text, so magnitudes beyond `f64` range become
    /// infinite and precision ends at 53 bits.
    pub fn to_f64(&self) -> f64 {
        // Decimal text from `Display` is always a valid float literal.
        self.to_string().parse().unwrap_or(f64::NAN)
    }

    /// Exact conversion to `i64`, `None` when out of range.
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(self).ok()
    }

    /// Magnitude as `u128`, `None` on overflow.
    fn magnitude_u128(&self) -> Option<u128> {
        self.digits.iter().rev().try_fold(0u128, |acc, &d| {
            acc.checked_mul(10)?.checked_add(u128::from(d))
        })
    }

    /// Exact value as `i128`, `None` on overflow.
    fn to_i128(&self) -> Option<i128> {
        let magnitude = self.magnitude_u128()?;
        if self.is_negative() {
            0i128.checked_sub_unsigned(magnitude)
        } else {
            i128::try_from(magnitude).ok()
        }
    }

    fn out_of_range(&self, target: &'static str) -> BigIntError {
        BigIntError::OutOfRange {
            value: self.to_string(),
            target,
        }
    }
}

/// Drop most-significant zero digits.
#[inline]
pub(crate) fn trim(digits: &mut Digits) {
    while digits.last() == Some(&0) {
        digits.pop();
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

// Conversions from native integers

fn from_magnitude(mut magnitude: u128, sign: Sign) -> BigInt {
    let mut digits = Digits::new();
    while magnitude > 0 {
        // `magnitude % 10` is below 10
        #[allow(clippy::cast_possible_truncation, reason = "remainder is a single digit")]
        digits.push((magnitude % 10) as u8);
        magnitude /= 10;
    }
    BigInt::from_parts(digits, sign)
}

impl From<u128> for BigInt {
    fn from(value: u128) -> Self {
        from_magnitude(value, Sign::Positive)
    }
}

impl From<i128> for BigInt {
    fn from(value: i128) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        from_magnitude(value.unsigned_abs(), sign)
    }
}

macro_rules! impl_from_native {
    ($wide:ty => $($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from(<$wide>::from(value))
                }
            }
        )*
    };
}

impl_from_native!(u128 => u8, u16, u32, u64);
impl_from_native!(i128 => i8, i16, i32, i64);

impl From<usize> for BigInt {
    fn from(value: usize) -> Self {
        Self::from(value as u128)
    }
}

impl From<isize> for BigInt {
    fn from(value: isize) -> Self {
        Self::from(value as i128)
    }
}

// Conversions to native integers

macro_rules! impl_try_into_native {
    ($($t:ty),*) => {
        $(
            impl TryFrom<&BigInt> for $t {
                type Error = BigIntError;

                fn try_from(value: &BigInt) -> BigIntResult<Self> {
                    value
                        .to_i128()
                        .and_then(|v| <$t>::try_from(v).ok())
                        .ok_or_else(|| value.out_of_range(stringify!($t)))
                }
            }
        )*
    };
}

impl_try_into_native!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl TryFrom<&BigInt> for u128 {
    type Error = BigIntError;

    fn try_from(value: &BigInt) -> BigIntResult<Self> {
        if value.is_negative() {
            return Err(value.out_of_range("u128"));
        }
        value
            .magnitude_u128()
            .ok_or_else(|| value.out_of_range("u128"))
    }
}

// Formatting

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.is_zero() {
            String::from("0")
        } else {
            self.digits
                .iter()
                .rev()
                .map(|&d| char::from(b'0' + d))
                .collect()
        };
        f.pad_integral(!self.is_negative(), "", &text)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
