//! CLI errors: bad invocations plus anything the library reports.

use bigi::BigIntError;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value for {flag}: {value:?}")]
    InvalidFlagValue { flag: &'static str, value: String },

    /// Wrong number of operands for a command.
    #[error("usage: bigi {usage}")]
    Usage { usage: &'static str },

    #[error(transparent)]
    BigInt(#[from] BigIntError),
}
