//! Number systems: the four supported bases and their descriptors.
//!
//! | Base | Name | Digits |
//! |------|------|--------|
//! | 2 | binary | 0-1 |
//! | 8 | octal | 0-7 |
//! | 10 | decimal | 0-9 |
//! | 16 | hexadecimal | 0-9, A-F |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::ConvertError;

/// Immutable descriptor for a supported number system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberSystem {
    /// Machine name (ex: "hexadecimal")
    pub name: &'static str,
    /// Radix
    pub base: u32,
    /// Display label (ex: "Hexadecimal")
    pub label: &'static str,
    /// Sample input shown in an empty field
    pub placeholder: &'static str,
}

/// The fixed set of number systems, in display order.
pub const NUMBER_SYSTEMS: [NumberSystem; 4] = [
    NumberSystem { name: "binary", base: 2, label: "Binary", placeholder: "1010" },
    NumberSystem { name: "octal", base: 8, label: "Octal", placeholder: "755" },
    NumberSystem { name: "decimal", base: 10, label: "Decimal", placeholder: "123" },
    NumberSystem { name: "hexadecimal", base: 16, label: "Hexadecimal", placeholder: "ABC" },
];

/// Display digits for values 0-15.
pub const DIGIT_ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

/// A supported base. Only obtainable from an integer through `TryFrom<u32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    /// All bases, in the same order as `NUMBER_SYSTEMS`.
    pub const ALL: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hexadecimal];

    pub fn radix(self) -> u32 {
        self.system().base
    }

    pub fn system(self) -> &'static NumberSystem {
        let idx = match self {
            Base::Binary => 0,
            Base::Octal => 1,
            Base::Decimal => 2,
            Base::Hexadecimal => 3,
        };
        &NUMBER_SYSTEMS[idx]
    }

    /// Value of `c` as a digit in this base, case-insensitive.
    pub fn digit_value(self, c: char) -> Option<u32> {
        c.to_digit(self.radix())
    }

    /// Uppercase display character for a digit value below the radix.
    pub fn digit_char(self, value: u32) -> Option<char> {
        if value < self.radix() {
            Some(DIGIT_ALPHABET[value as usize] as char)
        } else {
            None
        }
    }
}

impl TryFrom<u32> for Base {
    type Error = ConvertError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            2 => Ok(Base::Binary),
            8 => Ok(Base::Octal),
            10 => Ok(Base::Decimal),
            16 => Ok(Base::Hexadecimal),
            other => Err(ConvertError::UnsupportedBase(other)),
        }
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> Self {
        base.radix()
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.system().label)
    }
}

/// Error for base names that are neither a supported radix nor a known name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown base '{0}': use 2, 8, 10, 16 or binary, octal, decimal, hexadecimal")]
pub struct ParseBaseError(pub String);

impl FromStr for Base {
    type Err = ParseBaseError;

    /// Accepts a radix ("16") or a name ("hex", "Hexadecimal").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(radix) = trimmed.parse::<u32>() {
            return Base::try_from(radix).map_err(|_| ParseBaseError(trimmed.to_string()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "bin" | "binary" => Ok(Base::Binary),
            "oct" | "octal" => Ok(Base::Octal),
            "dec" | "decimal" => Ok(Base::Decimal),
            "hex" | "hexadecimal" => Ok(Base::Hexadecimal),
            _ => Err(ParseBaseError(trimmed.to_string())),
        }
    }
}

/// An ordered from/to pair, as offered in a quick-pick list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionPair {
    pub from: NumberSystem,
    pub to: NumberSystem,
    pub label: String,
}

/// Every ordered pair of distinct number systems (12 in total).
pub fn conversion_pairs() -> Vec<ConversionPair> {
    NUMBER_SYSTEMS
        .iter()
        .flat_map(|from| {
            NUMBER_SYSTEMS
                .iter()
                .filter(move |to| to.base != from.base)
                .map(move |to| ConversionPair {
                    from: *from,
                    to: *to,
                    label: format!("{} to {}", from.label, to.label),
                })
        })
        .collect()
}
