//! bigi - arbitrary-precision signed integers.
//!
//! This crate provides:
//! - The canonical value type (`BigInt`, `Sign`)
//! - Parsing in radix 2-36, with prefix detection and exponential notation
//! - Formatting in radix 2-36
//! - Arithmetic: comparison, add, subtract, multiply, truncating division,
//!   exponentiation, modular exponentiation
//! - Explicit conversion from loosely typed input (`ToBigInt`, `coerce`)
//!
//! # Representation
//!
//! A value is a sign plus little-endian decimal digits. Decimal text is
//! therefore a direct copy in either direction, and every other radix goes
//! through repeated multiplication (parse) or division (format).
//!
//! Values are immutable. Every operation borrows its operands and returns a
//! fresh value, so a `BigInt` can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use bigi::BigInt;
//!
//! let base = BigInt::parse("0x10")?;
//! let big = base.pow_u32(20)?;
//! assert_eq!(big.to_string(), "1208925819614629174706176");
//! assert_eq!(big.to_string_radix(16)?, "100000000000000000000");
//! # Ok::<(), bigi::BigIntError>(())
//! ```

mod arith;
mod coerce;
mod error;
mod format;
mod ops;
mod parse;
mod radix;
mod small;
mod value;

#[cfg(feature = "serde")]
mod serde_support;

pub use arith::MAX_EXPONENT;
pub use coerce::{coerce, ToBigInt};
pub use error::{BigIntError, BigIntResult};
pub use radix::{DECIMAL_RADIX, MAX_RADIX, MIN_RADIX};
pub use small::SMALL_MAX;
pub use value::{BigInt, Sign};
