//! Input validation.
//!
//! Embedded whitespace is stripped before any digit is checked, so
//! "1010 1111" is accepted as binary. Nothing else is normalized.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ConvertError;
use crate::number_system::Base;

lazy_static! {
    /// Any run of whitespace, including inside the numeral
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// A digit string known to be legal for its base.
///
/// Digits are stored uppercase with whitespace removed. Construct through
/// [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    digits: String,
    base: Base,
}

impl Validated {
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn base(&self) -> Base {
        self.base
    }
}

/// Remove all whitespace from the input
pub fn strip_whitespace(input: &str) -> String {
    WHITESPACE.replace_all(input, "").into_owned()
}

/// Check every character of `input` against the digit set of `base`.
///
/// Reports the first offending character with its zero-based position in
/// the whitespace-stripped input.
pub fn validate(input: &str, base: Base) -> Result<Validated, ConvertError> {
    let stripped = strip_whitespace(input);
    if stripped.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    if let Some((position, digit)) = stripped
        .chars()
        .enumerate()
        .find(|(_, c)| base.digit_value(*c).is_none())
    {
        return Err(ConvertError::InvalidDigit {
            digit,
            position,
            base: base.radix(),
        });
    }

    Ok(Validated {
        digits: stripped.to_ascii_uppercase(),
        base,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_legal_digits() {
        let v = validate("1011", Base::Binary).unwrap();
        assert_eq!(v.digits(), "1011");
        assert_eq!(v.base(), Base::Binary);
        assert!(validate("01234567", Base::Octal).is_ok());
        assert!(validate("9876543210", Base::Decimal).is_ok());
        assert!(validate("DEADbeef", Base::Hexadecimal).is_ok());
    }

    #[test]
    fn test_uppercases_hex() {
        let v = validate("ff", Base::Hexadecimal).unwrap();
        assert_eq!(v.digits(), "FF");
    }

    #[test]
    fn test_strips_embedded_whitespace() {
        let v = validate(" 1010 1111\t0000 ", Base::Binary).unwrap();
        assert_eq!(v.digits(), "101011110000");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(validate("", Base::Decimal), Err(ConvertError::EmptyInput));
        assert_eq!(validate("  \t\n ", Base::Decimal), Err(ConvertError::EmptyInput));
    }

    #[test]
    fn test_invalid_digit_position() {
        assert_eq!(
            validate("G", Base::Hexadecimal),
            Err(ConvertError::InvalidDigit { digit: 'G', position: 0, base: 16 })
        );
        assert_eq!(
            validate("10 12", Base::Binary),
            Err(ConvertError::InvalidDigit { digit: '2', position: 3, base: 2 })
        );
        assert_eq!(
            validate("778", Base::Octal),
            Err(ConvertError::InvalidDigit { digit: '8', position: 2, base: 8 })
        );
    }

    #[test]
    fn test_rejects_signs_and_points() {
        assert!(matches!(
            validate("-5", Base::Decimal),
            Err(ConvertError::InvalidDigit { digit: '-', .. })
        ));
        assert!(matches!(
            validate("1.5", Base::Decimal),
            Err(ConvertError::InvalidDigit { digit: '.', position: 1, .. })
        ));
    }
}
