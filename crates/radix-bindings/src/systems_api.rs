//! NAPI bindings for the number-system catalogue

use napi::bindgen_prelude::*;

#[napi(object)]
pub struct NumberSystem {
    pub name: String,
    pub base: u32,
    pub label: String,
    pub placeholder: String,
}

#[napi(object)]
pub struct ConversionPair {
    pub from: NumberSystem,
    pub to: NumberSystem,
    pub label: String,
}

impl From<&radix_core::NumberSystem> for NumberSystem {
    fn from(s: &radix_core::NumberSystem) -> Self {
        NumberSystem {
            name: s.name.to_string(),
            base: s.base,
            label: s.label.to_string(),
            placeholder: s.placeholder.to_string(),
        }
    }
}

/// The four supported number systems, in display order
#[napi]
pub fn number_systems() -> Vec<NumberSystem> {
    radix_core::NUMBER_SYSTEMS.iter().map(NumberSystem::from).collect()
}

/// Every ordered pair of distinct number systems
#[napi]
pub fn conversion_pairs() -> Vec<ConversionPair> {
    radix_core::conversion_pairs()
        .into_iter()
        .map(|p| ConversionPair {
            from: NumberSystem::from(&p.from),
            to: NumberSystem::from(&p.to),
            label: p.label,
        })
        .collect()
}
