//! RADIX-OUT: conversion results to terminal text
//!
//! Renders the engine's result structures with Handlebars templates. The
//! step trace is styled line by line according to its category
//! (`Step` header, blank separator, indented detail).
//!
//! # Example
//!
//! ```ignore
//! use radix_core::{convert_number, Base};
//! use radix_out::{render_conversion, ConversionInput, RenderOptions};
//!
//! let result = convert_number("FF", 16, 10);
//! let input = ConversionInput { value: "FF", from: Base::Hexadecimal, to: Base::Decimal };
//! println!("{}", render_conversion(&result, &input, &RenderOptions::default())?);
//! ```

pub mod renderer;
pub mod templates;

use radix_core::{AllConversionsResult, Base, ConversionPair, ConversionResult, NumberSystem};
use renderer::TemplateRenderer;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
}

/// Presentation switches
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// ANSI styling for step headers
    pub color: bool,
    /// Include the step trace
    pub show_steps: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            color: false,
            show_steps: true,
        }
    }
}

/// What the user asked for, echoed in the output
#[derive(Debug, Clone, Copy)]
pub struct ConversionInput<'a> {
    pub value: &'a str,
    pub from: Base,
    pub to: Base,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConversionView<'a> {
    #[serde(flatten)]
    result: &'a ConversionResult,
    input: &'a str,
    from: &'static str,
    to: &'static str,
    color: bool,
    show_steps: bool,
}

#[derive(Serialize)]
struct Row<'a> {
    label: &'static str,
    digits: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AllView<'a> {
    is_valid: bool,
    error_message: &'a str,
    input: &'a str,
    from: &'static str,
    rows: Vec<Row<'a>>,
}

#[derive(Serialize)]
struct SystemsView<'a> {
    systems: &'a [NumberSystem],
    pairs: &'a [ConversionPair],
}

/// Render a single conversion, with its steps unless disabled.
pub fn render_conversion(
    result: &ConversionResult,
    input: &ConversionInput<'_>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let view = ConversionView {
        result,
        input: input.value.trim(),
        from: input.from.system().label,
        to: input.to.system().label,
        color: options.color,
        show_steps: options.show_steps,
    };
    render_trimmed(templates::CONVERSION, &view)
}

/// Render a value in every base.
pub fn render_all(
    result: &AllConversionsResult,
    value: &str,
    from: Base,
) -> Result<String, RenderError> {
    let digits = [
        &result.binary,
        &result.octal,
        &result.decimal,
        &result.hexadecimal,
    ];
    let rows = Base::ALL
        .iter()
        .zip(digits)
        .map(|(base, digits)| Row {
            label: base.system().label,
            digits: digits.as_str(),
        })
        .collect();

    let view = AllView {
        is_valid: result.is_valid,
        error_message: &result.error_message,
        input: value.trim(),
        from: from.system().label,
        rows,
    };
    render_trimmed(templates::ALL_CONVERSIONS, &view)
}

/// Render the supported number systems and conversion pairs.
pub fn render_systems(
    systems: &[NumberSystem],
    pairs: &[ConversionPair],
) -> Result<String, RenderError> {
    render_trimmed(templates::SYSTEMS, &SystemsView { systems, pairs })
}

fn render_trimmed<T: Serialize>(template: &str, view: &T) -> Result<String, RenderError> {
    let renderer = TemplateRenderer::new()?;
    let output = renderer.render(template, view)?;
    Ok(output.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix_core::convert_number;

    #[test]
    fn test_render_invalid() {
        let result = convert_number("G", 16, 10);
        let input = ConversionInput { value: "G", from: Base::Hexadecimal, to: Base::Decimal };
        let out = render_conversion(&result, &input, &RenderOptions::default()).unwrap();
        assert_eq!(out, "error: Invalid digit 'G' at position 0 for base 16");
    }

    #[test]
    fn test_render_without_steps() {
        let result = convert_number("1010", 2, 16);
        let input = ConversionInput { value: "1010", from: Base::Binary, to: Base::Hexadecimal };
        let options = RenderOptions { color: false, show_steps: false };
        let out = render_conversion(&result, &input, &options).unwrap();
        assert_eq!(out, "1010 (Binary) = A (Hexadecimal)");
    }
}
