//! Text to [`BigInt`].
//!
//! Accepted grammar, after optional exponential expansion:
//!
//! ```text
//! numeral  = [sign] [prefix] digits [ "." decimal* ]
//! sign     = "+" | "-"
//! prefix   = "0x" | "0X" | "0b" | "0B" | "0"
//! digits   = (0-9 | a-z | A-Z)*
//! ```
//!
//! Without an explicit radix, the prefix picks it: `0x` hex, `0b` binary, a
//! bare leading `0` octal (a lone `0` is decimal zero), otherwise decimal.
//! A trailing fraction is accepted and dropped.
//!
//! Decimal input may also use exponential notation (`1.5e3`, `-2E-1`,
//! `1.5*10^3`, `1.5 x 10**3`). The decimal point is shifted by the exponent
//! and any fractional remainder is truncated.

use std::str::FromStr;

use crate::error::{BigIntError, BigIntResult};
use crate::radix::{self, DECIMAL_RADIX};
use crate::small::small;
use crate::value::{Digits, Sign};
use crate::{BigInt, MAX_EXPONENT};

impl BigInt {
    /// Parse with the radix inferred from the prefix.
    ///
    /// # Errors
    ///
    /// [`BigIntError::InvalidFormat`] or [`BigIntError::InvalidDigit`] for
    /// malformed text; [`BigIntError::ExponentTooLarge`] for exponential
    /// notation whose exponent exceeds [`MAX_EXPONENT`].
    pub fn parse(text: &str) -> BigIntResult<Self> {
        parse(text, None)
    }

    /// Parse in an explicit radix (`2..=36`).
    ///
    /// A `0x`/`0b` prefix is dropped in every radix, and the digits after
    /// it are read in `radix` (`"0b1"` in radix 16 is `1`).
    ///
    /// # Errors
    ///
    /// [`BigIntError::InvalidRadix`] for a radix outside `2..=36`, plus the
    /// errors of [`parse`](Self::parse).
    pub fn parse_radix(text: &str, radix: u32) -> BigIntResult<Self> {
        parse(text, Some(radix))
    }

    /// Convert a native float, truncating any fraction toward zero.
    ///
    /// # Errors
    ///
    /// [`BigIntError::InvalidFormat`] for NaN or an infinity.
    pub fn from_f64(value: f64) -> BigIntResult<Self> {
        if !value.is_finite() {
            return Err(BigIntError::invalid_format(&value.to_string()));
        }
        // `{:e}` always yields `[-]d[.ddd]e[-]d`
        parse(&format!("{value:e}"), Some(DECIMAL_RADIX))
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> BigIntResult<Self> {
        Self::parse(s)
    }
}

fn parse(text: &str, radix: Option<u32>) -> BigIntResult<BigInt> {
    let radix = radix.map(radix::check).transpose()?;

    let expanded;
    let (text, radix) = match radix {
        None | Some(10) => match expand_exponential(text)? {
            // Expanded text is always decimal, leading zeros included.
            Some(plain) => {
                expanded = plain;
                (expanded.as_str(), Some(10))
            }
            None => (text, radix),
        },
        Some(_) => (text, radix),
    };

    let numeral = Numeral::split(text, radix)?;
    numeral.value()
}

// ─── Scanner ────────────────────────────────────────────────────────────

/// Byte cursor over numeral text.
///
/// [`Copy`], so a snapshot is just a saved scanner when a branch needs to
/// backtrack.
#[derive(Clone, Copy, Debug)]
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    #[inline]
    fn current(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos + 1).copied()
    }

    #[inline]
    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Consume `byte` if it is next.
    fn eat(&mut self, byte: u8) -> bool {
        if self.current() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the run of bytes matching `pred` and return it.
    ///
    /// Only ASCII predicates are used, so the slice boundaries are always
    /// character boundaries.
    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.current().is_some_and(&pred) {
            self.pos += 1;
        }
        &self.text[start..self.pos]
    }

    /// Consume an optional `+`/`-`. Returns true for `-`.
    fn eat_sign(&mut self) -> bool {
        if self.eat(b'-') {
            return true;
        }
        self.eat(b'+');
        false
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(|b| b.is_ascii_whitespace());
    }

    /// Consume an exponent marker: `e`, `E`, or `*10^`, `*10**`, `x10^`,
    /// `X10**` with optional whitespace around each part.
    fn eat_exponent_marker(&mut self) -> bool {
        if matches!(self.current(), Some(b'e' | b'E')) {
            self.pos += 1;
            return true;
        }

        let mut s = *self;
        s.skip_whitespace();
        if !matches!(s.current(), Some(b'*' | b'x' | b'X')) {
            return false;
        }
        s.pos += 1;
        s.skip_whitespace();
        if !(s.eat(b'1') && s.eat(b'0')) {
            return false;
        }
        s.skip_whitespace();
        let caret = s.eat(b'^');
        if !caret && !(s.eat(b'*') && s.eat(b'*')) {
            return false;
        }
        s.skip_whitespace();
        *self = s;
        true
    }
}

// ─── Exponential Notation ───────────────────────────────────────────────

/// Rewrite `[sign] int [. frac] marker [sign] exp` as a plain decimal
/// integer string.
///
/// Returns `Ok(None)` when `text` is not in exponential form, leaving it to
/// the numeral grammar.
fn expand_exponential(text: &str) -> BigIntResult<Option<String>> {
    let mut s = Scanner::new(text);
    let negative = s.eat_sign();
    let int_part = s.eat_while(|b| b.is_ascii_digit());
    if int_part.is_empty() {
        return Ok(None);
    }
    let frac_part = if s.eat(b'.') {
        s.eat_while(|b| b.is_ascii_digit())
    } else {
        ""
    };
    if !s.eat_exponent_marker() {
        return Ok(None);
    }
    let exp_negative = s.eat_sign();
    let exp_digits = s.eat_while(|b| b.is_ascii_digit());
    if exp_digits.is_empty() || !s.is_eof() {
        return Ok(None);
    }

    let Some(magnitude) = exp_digits.bytes().try_fold(0i64, |acc, b| {
        acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))
    }) else {
        if exp_negative {
            // Past every digit, whatever its size.
            return Ok(Some(String::from("0")));
        }
        return Err(BigIntError::invalid_format(text));
    };
    if !exp_negative && magnitude > i64::from(MAX_EXPONENT) {
        return Err(BigIntError::ExponentTooLarge);
    }
    let exponent = if exp_negative { -magnitude } else { magnitude };

    // Integer digits left of the shifted point.
    let mantissa_len = int_part.len() + frac_part.len();
    let point = i64::try_from(int_part.len())
        .ok()
        .and_then(|len| len.checked_add(exponent))
        .ok_or_else(|| BigIntError::invalid_format(text))?;
    let Ok(point) = usize::try_from(point) else {
        // Shifted entirely into the fraction.
        return Ok(Some(String::from("0")));
    };

    let mut plain = String::with_capacity(point.max(mantissa_len) + 1);
    if negative {
        plain.push('-');
    }
    let mantissa = int_part.chars().chain(frac_part.chars());
    if point >= mantissa_len {
        plain.extend(mantissa);
        plain.extend(std::iter::repeat('0').take(point - mantissa_len));
    } else {
        plain.extend(mantissa.take(point));
    }
    if point == 0 {
        plain.push('0');
    }
    Ok(Some(plain))
}

// ─── Numeral Grammar ────────────────────────────────────────────────────

/// A numeral split into its parts, digits not yet validated.
#[derive(Debug, PartialEq, Eq)]
struct Numeral<'a> {
    negative: bool,
    radix: u8,
    digits: &'a str,
}

impl<'a> Numeral<'a> {
    fn split(text: &'a str, explicit_radix: Option<u8>) -> BigIntResult<Self> {
        let mut s = Scanner::new(text);
        let negative = s.eat_sign();

        let radix = match explicit_radix {
            Some(radix) => {
                // Any `0x`/`0b` prefix is dropped; the digits after it are
                // read in the explicit radix.
                if let (Some(b'0'), Some(b'x' | b'X' | b'b' | b'B')) = (s.current(), s.peek()) {
                    s.advance_n(2);
                }
                radix
            }
            None => match (s.current(), s.peek()) {
                (Some(b'0'), Some(b'x' | b'X')) => {
                    s.advance_n(2);
                    16
                }
                (Some(b'0'), Some(b'b' | b'B')) => {
                    s.advance_n(2);
                    2
                }
                (Some(b'0'), Some(next)) if next.is_ascii_alphanumeric() => {
                    s.advance_n(1);
                    8
                }
                _ => 10,
            },
        };

        let digits = s.eat_while(|b| b.is_ascii_alphanumeric());
        if s.eat(b'.') {
            s.eat_while(|b| b.is_ascii_digit());
        }
        if !s.is_eof() {
            return Err(BigIntError::invalid_format(text));
        }

        Ok(Self {
            negative,
            radix,
            digits,
        })
    }

    fn value(&self) -> BigIntResult<BigInt> {
        // Validate the whole run before dropping leading zeros.
        let values = self
            .digits
            .bytes()
            .map(|b| {
                radix::digit_value(b, self.radix).ok_or(BigIntError::InvalidDigit {
                    digit: char::from(b),
                    radix: u32::from(self.radix),
                })
            })
            .collect::<BigIntResult<Digits>>()?;

        let significant = values
            .iter()
            .position(|&d| d != 0)
            .map_or(&values[..0], |first| &values[first..]);
        if significant.is_empty() {
            return Ok(BigInt::zero());
        }

        let sign = if self.negative {
            Sign::Negative
        } else {
            Sign::Positive
        };

        if self.radix == 10 {
            let digits = significant.iter().rev().copied().collect();
            return Ok(BigInt::from_parts(digits, sign));
        }

        tracing::trace!(radix = self.radix, digits = significant.len(), "radix conversion");
        let radix_value = small(self.radix);
        let magnitude = significant.iter().fold(BigInt::zero(), |acc, &d| {
            acc.multiply(radix_value).add(small(d))
        });
        Ok(magnitude.with_sign(sign))
    }
}
