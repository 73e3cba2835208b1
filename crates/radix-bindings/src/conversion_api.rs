//! NAPI bindings for the two conversion calls.
//!
//! Neither function throws: invalid input comes back with `isValid: false`
//! and an `errorMessage`, exactly like the Rust result types.

use napi::bindgen_prelude::*;

/// Result of converting one value to one base
#[napi(object)]
pub struct ConversionResult {
    pub result: String,
    pub steps: Vec<String>,
    pub is_valid: bool,
    pub error_message: String,
}

/// Result of converting one value to every base
#[napi(object)]
pub struct AllConversionsResult {
    pub binary: String,
    pub octal: String,
    pub decimal: String,
    pub hexadecimal: String,
    pub is_valid: bool,
    pub error_message: String,
}

impl From<radix_core::ConversionResult> for ConversionResult {
    fn from(r: radix_core::ConversionResult) -> Self {
        ConversionResult {
            result: r.result,
            steps: r.steps,
            is_valid: r.is_valid,
            error_message: r.error_message,
        }
    }
}

impl From<radix_core::AllConversionsResult> for AllConversionsResult {
    fn from(r: radix_core::AllConversionsResult) -> Self {
        AllConversionsResult {
            binary: r.binary,
            octal: r.octal,
            decimal: r.decimal,
            hexadecimal: r.hexadecimal,
            is_valid: r.is_valid,
            error_message: r.error_message,
        }
    }
}

/// Convert `value` from `from_base` to `to_base` with step-by-step explanation
#[napi]
pub fn convert_number(value: String, from_base: u32, to_base: u32) -> ConversionResult {
    radix_core::convert_number(&value, from_base, to_base).into()
}

/// Convert `value` from `from_base` into binary, octal, decimal and hexadecimal
#[napi]
pub fn convert_to_all_systems(value: String, from_base: u32) -> AllConversionsResult {
    radix_core::convert_to_all_systems(&value, from_base).into()
}
