//! Error types for parsing, formatting, and arithmetic.
//!
//! Every failure is raised at the point of detection and propagated with `?`.
//! Nothing is retried or recovered inside the crate.

use thiserror::Error;

/// Result of a fallible `bigi` operation.
pub type BigIntResult<T> = Result<T, BigIntError>;

/// Typed error category for every failure the crate can report.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum BigIntError {
    /// Numeral text that does not match the accepted grammar, or a native
    /// float that is not finite.
    #[error("invalid integer format: {input:?}")]
    InvalidFormat { input: String },

    /// A digit character outside the alphabet of the resolved radix
    /// (e.g. `G` in base 10).
    #[error("bad digit {digit:?} for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    /// Radix outside `2..=36` requested for parsing or formatting.
    #[error("illegal radix {radix}")]
    InvalidRadix { radix: u32 },

    /// Division or reduction by a zero divisor/modulus.
    #[error("divide by zero")]
    DivideByZero,

    /// Exponent magnitude beyond [`MAX_EXPONENT`](crate::MAX_EXPONENT).
    #[error("exponent too large")]
    ExponentTooLarge,

    /// Negative exponent passed to modular exponentiation.
    #[error("negative exponent in modular exponentiation")]
    NegativeExponent,

    /// The value does not fit the requested native integer type.
    #[error("value {value} out of range for {target}")]
    OutOfRange { value: String, target: &'static str },
}

impl BigIntError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
        }
    }

    /// True for malformed numeral text, including a digit that the resolved
    /// radix does not allow.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. } | Self::InvalidDigit { .. })
    }
}
