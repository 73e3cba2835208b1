//! Decoder: validated digits to an arbitrary-precision magnitude.
//!
//! Uses the positional weighted sum, left to right:
//! `m = m * base + digit`. Leading zeros contribute nothing.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;

use crate::trace::{Step, StepTrace};
use crate::validator::Validated;

/// Base-independent non-negative integer value of a numeral
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Magnitude(BigUint);

impl Magnitude {
    pub fn zero() -> Self {
        Magnitude(BigUint::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_biguint(self) -> BigUint {
        self.0
    }
}

impl From<BigUint> for Magnitude {
    fn from(value: BigUint) -> Self {
        Magnitude(value)
    }
}

impl From<u64> for Magnitude {
    fn from(value: u64) -> Self {
        Magnitude(BigUint::from(value))
    }
}

impl fmt::Display for Magnitude {
    /// Decimal digits
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Decode a validated numeral.
pub fn decode(validated: &Validated) -> Magnitude {
    let base = validated.base();
    let radix = base.radix();
    let value = validated
        .digits()
        .chars()
        .filter_map(|c| base.digit_value(c))
        .fold(BigUint::zero(), |acc, digit| acc * radix + digit);
    Magnitude(value)
}

/// Explain the weighted sum as a single step:
///
/// ```text
/// Step N: Convert 1010 (base 2) to decimal
///    1 × 2^3 = 8 + 0 × 2^2 = 0 + 1 × 2^1 = 2 + 0 × 2⁰ = 0
///    = 10 (decimal)
/// ```
pub fn narrate(validated: &Validated, magnitude: &Magnitude) -> StepTrace {
    let base = validated.base();
    let radix = base.radix();

    // Walk right to left so each weight is one multiply away from the last.
    let mut weight = BigUint::one();
    let mut terms: Vec<String> = Vec::with_capacity(validated.digits().len());
    for (position, c) in validated.digits().chars().rev().enumerate() {
        let digit = base.digit_value(c).unwrap_or(0);
        if position == 0 {
            terms.push(format!("{} × {}⁰ = {}", digit, radix, digit));
        } else {
            terms.push(format!(
                "{} × {}^{} = {}",
                digit,
                radix,
                position,
                &weight * digit
            ));
        }
        weight *= radix;
    }
    terms.reverse();

    let step = Step::new(format!(
        "Convert {} (base {}) to decimal",
        validated.digits(),
        radix
    ))
    .detail(terms.join(" + "))
    .detail(format!("= {} (decimal)", magnitude));

    let mut trace = StepTrace::new();
    trace.push(step);
    trace
}

/// Decode and narrate together.
pub fn decode_with_trace(validated: &Validated) -> (Magnitude, StepTrace) {
    let magnitude = decode(validated);
    let trace = narrate(validated, &magnitude);
    (magnitude, trace)
}
