//! Command-line options.

use bigi::DECIMAL_RADIX;

use crate::CliError;

/// Options shared by every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Radix for printed values.
    pub radix: u32,
    /// Radix for operands; `None` infers it per operand from the prefix.
    pub input_radix: Option<u32>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            radix: DECIMAL_RADIX,
            input_radix: None,
        }
    }
}

impl CliConfig {
    /// Split `args` into options and operands.
    ///
    /// Only `--`-prefixed words are options, so negative operands such as
    /// `-5` pass through untouched. Radix values are range-checked later by
    /// the library.
    pub fn from_args(args: &[String]) -> Result<(Self, Vec<String>), CliError> {
        let mut config = Self::default();
        let mut operands = Vec::new();

        for arg in args {
            if let Some(value) = arg.strip_prefix("--radix=") {
                config.radix = parse_flag("--radix", value)?;
            } else if let Some(value) = arg.strip_prefix("--input-radix=") {
                config.input_radix = Some(parse_flag("--input-radix", value)?);
            } else if arg.starts_with("--") {
                return Err(CliError::UnknownOption(arg.clone()));
            } else {
                operands.push(arg.clone());
            }
        }

        Ok((config, operands))
    }
}

fn parse_flag(flag: &'static str, value: &str) -> Result<u32, CliError> {
    value.parse().map_err(|_| CliError::InvalidFlagValue {
        flag,
        value: value.to_owned(),
    })
}
