//! Data Model: results handed to the presentation layer
//!
//! Field names serialize in camelCase (`isValid`, `errorMessage`) so the
//! JSON form matches what front ends already consume.
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Digits in the target base, uppercase
    pub result: String,
    /// Step trace (Header / Blank / Detail lines)
    pub steps: Vec<String>,
    pub is_valid: bool,
    pub error_message: String,
}

impl ConversionResult {
    pub fn valid(result: String, steps: Vec<String>) -> Self {
        Self {
            result,
            steps,
            is_valid: true,
            error_message: String::new(),
        }
    }

    pub fn invalid(error: &ConvertError) -> Self {
        Self {
            result: String::new(),
            steps: Vec::new(),
            is_valid: false,
            error_message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllConversionsResult {
    pub binary: String,
    pub octal: String,
    pub decimal: String,
    pub hexadecimal: String,
    pub is_valid: bool,
    pub error_message: String,
}

impl AllConversionsResult {
    pub fn invalid(error: &ConvertError) -> Self {
        Self {
            binary: String::new(),
            octal: String::new(),
            decimal: String::new(),
            hexadecimal: String::new(),
            is_valid: false,
            error_message: error.to_string(),
        }
    }
}
