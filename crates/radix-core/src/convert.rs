//! Fan-out orchestration: validate → decode once → encode per target.
use tracing::{debug, trace};

use crate::data_model::{AllConversionsResult, ConversionResult};
use crate::decoder::{self, Magnitude};
use crate::encoder::{self, Encoded};
use crate::error::ConvertError;
use crate::number_system::Base;
use crate::trace::StepTrace;
use crate::validator::{self, Validated};

/// A successful single conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub from: Base,
    pub to: Base,
    pub magnitude: Magnitude,
    pub digits: String,
    pub trace: StepTrace,
}

impl Conversion {
    pub fn steps(&self) -> Vec<String> {
        self.trace.lines()
    }
}

/// One value encoded in every supported base, from a single magnitude
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllConversions {
    pub from: Base,
    pub magnitude: Magnitude,
    pub binary: Encoded,
    pub octal: Encoded,
    pub decimal: Encoded,
    pub hexadecimal: Encoded,
}

impl AllConversions {
    pub fn get(&self, base: Base) -> &Encoded {
        match base {
            Base::Binary => &self.binary,
            Base::Octal => &self.octal,
            Base::Decimal => &self.decimal,
            Base::Hexadecimal => &self.hexadecimal,
        }
    }
}

/// Stateless conversion engine. Cheap to copy and safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Converter
    }

    /// Convert `value` from one base to another with a full step trace.
    ///
    /// The trace explains the weighted-sum decode first (skipped for decimal
    /// input), then the repeated division into `to`.
    pub fn convert(&self, value: &str, from: Base, to: Base) -> Result<Conversion, ConvertError> {
        let validated = self.validate(value, from)?;
        debug!(
            from = from.radix(),
            to = to.radix(),
            digits = validated.digits().len(),
            "converting"
        );

        let magnitude = decoder::decode(&validated);
        let encoded = encoder::encode(&magnitude, to);

        let trace = if magnitude.is_zero() || from == Base::Decimal {
            encoded.trace
        } else {
            let mut trace = decoder::narrate(&validated, &magnitude);
            trace.append(encoded.trace);
            trace
        };

        Ok(Conversion {
            from,
            to,
            magnitude,
            digits: encoded.digits,
            trace,
        })
    }

    /// Encode `value` in all four bases from one decoded magnitude.
    pub fn convert_all(&self, value: &str, from: Base) -> Result<AllConversions, ConvertError> {
        let validated = self.validate(value, from)?;
        debug!(
            from = from.radix(),
            digits = validated.digits().len(),
            "converting to all bases"
        );

        let magnitude = decoder::decode(&validated);
        Ok(AllConversions {
            from,
            binary: encoder::encode(&magnitude, Base::Binary),
            octal: encoder::encode(&magnitude, Base::Octal),
            decimal: encoder::encode(&magnitude, Base::Decimal),
            hexadecimal: encoder::encode(&magnitude, Base::Hexadecimal),
            magnitude,
        })
    }

    fn validate(&self, value: &str, base: Base) -> Result<Validated, ConvertError> {
        let validated = validator::validate(value, base).map_err(|e| {
            debug!(kind = e.kind(), base = base.radix(), "input rejected");
            e
        })?;
        trace!(input = validated.digits(), "validated");
        Ok(validated)
    }
}

fn bases(from_base: u32, to_base: u32) -> Result<(Base, Base), ConvertError> {
    Ok((Base::try_from(from_base)?, Base::try_from(to_base)?))
}

/// Convert `value` from `from_base` to `to_base`. Never fails: problems are
/// reported through `is_valid` / `error_message`.
pub fn convert_number(value: &str, from_base: u32, to_base: u32) -> ConversionResult {
    let outcome = bases(from_base, to_base)
        .and_then(|(from, to)| Converter::new().convert(value, from, to));

    match outcome {
        Ok(conversion) => {
            let steps = conversion.steps();
            ConversionResult::valid(conversion.digits, steps)
        }
        Err(e) => {
            debug!(kind = e.kind(), "conversion invalid");
            ConversionResult::invalid(&e)
        }
    }
}

/// Convert `value` from `from_base` into every supported base.
pub fn convert_to_all_systems(value: &str, from_base: u32) -> AllConversionsResult {
    let outcome = Base::try_from(from_base)
        .and_then(|from| Converter::new().convert_all(value, from));

    match outcome {
        Ok(all) => AllConversionsResult {
            binary: all.binary.digits,
            octal: all.octal.digits,
            decimal: all.decimal.digits,
            hexadecimal: all.hexadecimal.digits,
            is_valid: true,
            error_message: String::new(),
        },
        Err(e) => {
            debug!(kind = e.kind(), "conversion invalid");
            AllConversionsResult::invalid(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::ZERO_NOTE;

    #[test]
    fn test_convert_hex_to_decimal() {
        let r = convert_number("FF", 16, 10);
        assert!(r.is_valid);
        assert_eq!(r.result, "255");
        assert!(r.error_message.is_empty());
        assert_eq!(r.steps[0], "Step 1: Convert FF (base 16) to decimal");
        assert!(r.steps.contains(&"Step 2: Convert 255 (decimal) to base 10".to_string()));
    }

    #[test]
    fn test_decimal_source_skips_decode_step() {
        let c = Converter::new().convert("10", Base::Decimal, Base::Binary).unwrap();
        assert_eq!(c.digits, "1010");
        assert_eq!(c.trace.steps().len(), 1);
        assert_eq!(c.steps()[0], "Step 1: Convert 10 (decimal) to base 2");
    }

    #[test]
    fn test_blank_between_steps() {
        let steps = convert_number("1010", 2, 16).steps;
        let blank = steps.iter().position(String::is_empty).unwrap();
        assert!(steps[blank + 1].starts_with("Step 2"));
        assert!(!steps.last().unwrap().is_empty());
    }

    #[test]
    fn test_zero_single_line() {
        let r = convert_number("000", 8, 16);
        assert_eq!(r.result, "0");
        assert_eq!(r.steps, vec![ZERO_NOTE]);
    }

    #[test]
    fn test_unsupported_base() {
        let r = convert_number("10", 3, 10);
        assert!(!r.is_valid);
        assert!(r.result.is_empty());
        assert!(r.steps.is_empty());
        assert_eq!(r.error_message, "Unsupported base 3: expected 2, 8, 10 or 16");

        let r = convert_number("10", 10, 36);
        assert_eq!(r.error_message, "Unsupported base 36: expected 2, 8, 10 or 16");

        let all = convert_to_all_systems("10", 5);
        assert!(!all.is_valid);
        assert!(all.binary.is_empty());
    }

    #[test]
    fn test_all_conversions_share_magnitude() {
        let all = Converter::new().convert_all("7B", Base::Hexadecimal).unwrap();
        assert_eq!(all.magnitude, Magnitude::from(123u64));
        assert_eq!(all.get(Base::Binary).digits, "1111011");
        assert_eq!(all.get(Base::Octal).digits, "173");
        assert_eq!(all.get(Base::Decimal).digits, "123");
        assert_eq!(all.get(Base::Hexadecimal).digits, "7B");
    }
}
