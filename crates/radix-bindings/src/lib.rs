use napi::bindgen_prelude::*;

#[macro_use]
extern crate napi_derive;

pub mod conversion_api;
pub mod systems_api;

#[napi]
pub fn version() -> String {
    radix_core::RADIX_VERSION.to_string()
}
