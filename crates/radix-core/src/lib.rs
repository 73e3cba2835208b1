//! radix-core: explained conversion between bases 2, 8, 10 and 16
//!
//! # Pipeline Flow
//!
//! ```text
//! input + from ──► validator ──► decoder ──► Magnitude ──► encoder(to) ──► digits + steps
//!                                                 └──────► encoder(each base) ──► all four
//! ```
//!
//! Values are arbitrary precision; nothing is limited to a native integer.
//! Every entry point is a pure function and may be called from any thread.
//!
//! # Example
//!
//! ```
//! use radix_core::convert_number;
//!
//! let r = convert_number("1010", 2, 16);
//! assert!(r.is_valid);
//! assert_eq!(r.result, "A");
//! ```

pub mod convert;
pub mod data_model;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod number_system;
pub mod trace;
pub mod validator;

pub use convert::{convert_number, convert_to_all_systems, AllConversions, Conversion, Converter};
pub use data_model::{AllConversionsResult, ConversionResult};
pub use decoder::{decode, Magnitude};
pub use encoder::{encode, Encoded};
pub use error::ConvertError;
pub use number_system::{
    conversion_pairs, Base, ConversionPair, NumberSystem, ParseBaseError, NUMBER_SYSTEMS,
};
pub use trace::{Step, StepLine, StepTrace};
pub use validator::{validate, Validated};

/// Engine version
pub const RADIX_VERSION: &str = env!("CARGO_PKG_VERSION");
