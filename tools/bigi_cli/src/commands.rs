//! Command handlers for the bigi CLI.
//!
//! Each command takes a fixed number of operands, converts them through
//! the library's conversion layer, and renders the result as text.

use std::cmp::Ordering;

use bigi::{BigInt, ToBigInt};

use crate::{CliConfig, CliError};

/// Every operation the CLI exposes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    Sub,
    Mul,
    Square,
    Div,
    Mod,
    DivMod,
    Cmp,
    CmpAbs,
    Pow,
    ModPow,
    Abs,
    Neg,
    IsZero,
    IsEven,
    IsOdd,
    IsPositive,
    IsNegative,
    IsUnit,
    Convert,
    ToNative,
}

impl Command {
    /// Look up a command word.
    pub fn parse(word: &str) -> Option<Self> {
        Some(match word {
            "add" => Self::Add,
            "sub" => Self::Sub,
            "mul" => Self::Mul,
            "square" => Self::Square,
            "div" => Self::Div,
            "mod" => Self::Mod,
            "divmod" => Self::DivMod,
            "cmp" => Self::Cmp,
            "cmpabs" => Self::CmpAbs,
            "pow" => Self::Pow,
            "modpow" => Self::ModPow,
            "abs" => Self::Abs,
            "neg" => Self::Neg,
            "is-zero" => Self::IsZero,
            "is-even" => Self::IsEven,
            "is-odd" => Self::IsOdd,
            "is-positive" => Self::IsPositive,
            "is-negative" => Self::IsNegative,
            "is-unit" => Self::IsUnit,
            "convert" => Self::Convert,
            "to-native" => Self::ToNative,
            _ => return None,
        })
    }

    /// Operand usage line, without the leading `bigi`.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Add => "add <a> <b>",
            Self::Sub => "sub <a> <b>",
            Self::Mul => "mul <a> <b>",
            Self::Square => "square <a>",
            Self::Div => "div <a> <b>",
            Self::Mod => "mod <a> <b>",
            Self::DivMod => "divmod <a> <b>",
            Self::Cmp => "cmp <a> <b>",
            Self::CmpAbs => "cmpabs <a> <b>",
            Self::Pow => "pow <base> <exponent>",
            Self::ModPow => "modpow <base> <exponent> <modulus>",
            Self::Abs => "abs <a>",
            Self::Neg => "neg <a>",
            Self::IsZero => "is-zero <a>",
            Self::IsEven => "is-even <a>",
            Self::IsOdd => "is-odd <a>",
            Self::IsPositive => "is-positive <a>",
            Self::IsNegative => "is-negative <a>",
            Self::IsUnit => "is-unit <a>",
            Self::Convert => "convert <a> [--radix=N] [--input-radix=N]",
            Self::ToNative => "to-native <a>",
        }
    }

    fn arity(self) -> usize {
        match self {
            Self::ModPow => 3,
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::Mod
            | Self::DivMod
            | Self::Cmp
            | Self::CmpAbs
            | Self::Pow => 2,
            Self::Square
            | Self::Abs
            | Self::Neg
            | Self::IsZero
            | Self::IsEven
            | Self::IsOdd
            | Self::IsPositive
            | Self::IsNegative
            | Self::IsUnit
            | Self::Convert
            | Self::ToNative => 1,
        }
    }

    /// Run the command and return what should be printed.
    ///
    /// # Errors
    ///
    /// [`CliError::Usage`] on the wrong operand count, otherwise whatever
    /// the library reports for parsing, arithmetic or formatting.
    pub fn execute(self, operands: &[String], config: &CliConfig) -> Result<String, CliError> {
        if operands.len() != self.arity() {
            return Err(CliError::Usage {
                usage: self.usage(),
            });
        }
        tracing::debug!(command = ?self, ?config, "executing");

        let values = operands
            .iter()
            .map(|text| operand(text, config))
            .collect::<Result<Vec<_>, _>>()?;
        let render = |value: &BigInt| value.to_string_radix(config.radix);

        let output = match (self, values.as_slice()) {
            (Self::Add, [a, b]) => render(&a.add(b))?,
            (Self::Sub, [a, b]) => render(&a.subtract(b))?,
            (Self::Mul, [a, b]) => render(&a.multiply(b))?,
            (Self::Div, [a, b]) => render(&a.divide(b)?)?,
            (Self::Mod, [a, b]) => render(&a.modulo(b)?)?,
            (Self::DivMod, [a, b]) => {
                let (quotient, remainder) = a.div_mod(b)?;
                format!("{}\n{}", render(&quotient)?, render(&remainder)?)
            }
            (Self::Cmp, [a, b]) => ordering(a.compare(b)),
            (Self::CmpAbs, [a, b]) => ordering(a.compare_abs(b)),
            (Self::Pow, [a, b]) => render(&a.pow(b)?)?,
            (Self::ModPow, [a, e, m]) => render(&a.mod_pow(e, m)?)?,
            (Self::Square, [a]) => render(&a.square())?,
            (Self::Abs, [a]) => render(&a.abs())?,
            (Self::Neg, [a]) => render(&a.negate())?,
            (Self::IsZero, [a]) => a.is_zero().to_string(),
            (Self::IsEven, [a]) => a.is_even().to_string(),
            (Self::IsOdd, [a]) => a.is_odd().to_string(),
            (Self::IsPositive, [a]) => a.is_positive().to_string(),
            (Self::IsNegative, [a]) => a.is_negative().to_string(),
            (Self::IsUnit, [a]) => a.is_unit().to_string(),
            (Self::Convert, [a]) => render(a)?,
            (Self::ToNative, [a]) => a.to_f64().to_string(),
            _ => {
                return Err(CliError::Usage {
                    usage: self.usage(),
                })
            }
        };
        Ok(output)
    }
}

/// Every command, in the order `help` lists them.
pub fn all() -> impl Iterator<Item = Command> {
    [
        Command::Add,
        Command::Sub,
        Command::Mul,
        Command::Square,
        Command::Div,
        Command::Mod,
        Command::DivMod,
        Command::Cmp,
        Command::CmpAbs,
        Command::Pow,
        Command::ModPow,
        Command::Abs,
        Command::Neg,
        Command::IsZero,
        Command::IsEven,
        Command::IsOdd,
        Command::IsPositive,
        Command::IsNegative,
        Command::IsUnit,
        Command::Convert,
        Command::ToNative,
    ]
    .into_iter()
}

fn operand(text: &str, config: &CliConfig) -> Result<BigInt, CliError> {
    let value = match config.input_radix {
        Some(radix) => BigInt::parse_radix(text, radix)?,
        None => text.to_bigint()?.into_owned(),
    };
    Ok(value)
}

fn ordering(ordering: Ordering) -> String {
    (ordering as i8).to_string()
}
