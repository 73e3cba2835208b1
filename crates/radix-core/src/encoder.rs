//! Encoder: magnitude to target-base digits by repeated division.
//!
//! Each division yields one remainder, least significant first; the final
//! string reads the remainders bottom to top.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::decoder::Magnitude;
use crate::number_system::{Base, DIGIT_ALPHABET};
use crate::trace::{Step, StepTrace};

/// Explanation used when there is nothing to divide.
pub const ZERO_NOTE: &str = "The value is 0, which is written as 0 in every base";

/// Digits of a magnitude in one base, with the derivation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub digits: String,
    pub trace: StepTrace,
}

impl Encoded {
    /// Narrative lines, numbered from `Step 1`
    pub fn steps(&self) -> Vec<String> {
        self.trace.lines()
    }
}

/// Encode `magnitude` in `target`, uppercase.
pub fn encode(magnitude: &Magnitude, target: Base) -> Encoded {
    if magnitude.is_zero() {
        return Encoded {
            digits: "0".to_string(),
            trace: StepTrace::note(ZERO_NOTE),
        };
    }

    let radix = target.radix();
    let divisor = BigUint::from(radix);
    let mut step = Step::new(format!("Convert {} (decimal) to base {}", magnitude, radix));

    let mut current = magnitude.as_biguint().clone();
    let mut remainders: Vec<char> = Vec::new();
    while !current.is_zero() {
        let (quotient, remainder) = current.div_rem(&divisor);
        // remainder < radix <= 16
        let value = remainder.to_u32_digits().first().copied().unwrap_or(0);
        let digit = DIGIT_ALPHABET[value as usize] as char;
        step.push_detail(format!(
            "{} ÷ {} = {} remainder {}",
            current, radix, quotient, digit
        ));
        remainders.push(digit);
        current = quotient;
    }

    let digits: String = remainders.iter().rev().collect();
    step.push_detail(format!("Reading remainders from bottom to top: {}", digits));

    let mut trace = StepTrace::new();
    trace.push(step);
    Encoded { digits, trace }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::StepLine;

    #[test]
    fn test_zero_is_single_note() {
        for base in Base::ALL {
            let encoded = encode(&Magnitude::zero(), base);
            assert_eq!(encoded.digits, "0");
            assert_eq!(encoded.steps(), vec![ZERO_NOTE]);
        }
    }

    #[test]
    fn test_encode_hex() {
        let encoded = encode(&Magnitude::from(255u64), Base::Hexadecimal);
        assert_eq!(encoded.digits, "FF");
        assert_eq!(
            encoded.steps(),
            vec![
                "Step 1: Convert 255 (decimal) to base 16",
                "   255 ÷ 16 = 15 remainder F",
                "   15 ÷ 16 = 0 remainder F",
                "   Reading remainders from bottom to top: FF",
            ]
        );
    }

    #[test]
    fn test_encode_binary() {
        let encoded = encode(&Magnitude::from(10u64), Base::Binary);
        assert_eq!(encoded.digits, "1010");
        let lines = encoded.steps();
        // header + 4 divisions + reading line
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "   10 ÷ 2 = 5 remainder 0");
        assert_eq!(lines[4], "   1 ÷ 2 = 0 remainder 1");
    }

    #[test]
    fn test_encode_decimal_still_divides() {
        let encoded = encode(&Magnitude::from(123u64), Base::Decimal);
        assert_eq!(encoded.digits, "123");
        assert_eq!(encoded.steps()[1], "   123 ÷ 10 = 12 remainder 3");
    }

    #[test]
    fn test_lines_follow_protocol() {
        let encoded = encode(&Magnitude::from(493u64), Base::Octal);
        assert_eq!(encoded.digits, "755");
        let kinds: Vec<StepLine> = encoded.steps().iter().map(String::as_str).map(StepLine::classify).collect();
        assert_eq!(kinds[0], StepLine::Header);
        assert!(kinds[1..].iter().all(|k| *k == StepLine::Detail));
    }

    #[test]
    fn test_idempotent() {
        let m = Magnitude::from(u64::MAX);
        assert_eq!(encode(&m, Base::Octal), encode(&m, Base::Octal));
    }
}
