//! Checksum machinery shared by the number engines.
//!
//! Provides the modulus-11 schemes used by BSN and Loonheffingennummer,
//! the mod-97 reduction used by IBAN, and the common error type.

mod error;
pub mod mod11;
pub mod mod97;

pub use error::*;
pub(crate) use mod11::{digits_to_string, parse_digits};
pub use mod11::{
    CheckDigitScheme, DerivedDigitMod11, ELFPROEF_WEIGHTS, MAX_DRAWS, ZeroSumMod11, draw_digits,
    weighted_sum,
};
pub use mod97::{alphanumeric_mod97, letters_to_numbers, mod97};
