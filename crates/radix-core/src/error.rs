//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("Invalid digit '{digit}' at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },

    #[error("Unsupported base {0}: expected 2, 8, 10 or 16")]
    UnsupportedBase(u32),
}

impl ConvertError {
    /// Short machine-friendly tag, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidDigit { .. } => "invalid_digit",
            Self::UnsupportedBase(_) => "unsupported_base",
        }
    }
}
