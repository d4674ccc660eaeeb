//! Loonheffingennummer (payroll tax number) generation and validation.
//!
//! The canonical form is nine digits where the ninth equals the weighted sum
//! of the first eight (weights 9..2) mod 11. Prefixes whose sum leaves
//! remainder 10 have no valid check digit and are never generated.
//!
//! The `L01` suffix seen on payroll documents is a presentation affix:
//! [`with_suffix`] adds it and [`is_valid_suffixed_loonheffingennummer`]
//! accepts it, while the plain validator only takes the nine digits.

mod number;

pub use number::{
    LOONHEFFINGEN_LEN, LOONHEFFINGEN_SCHEME, LOONHEFFINGEN_SUFFIX, generate_loonheffingennummer,
    generate_loonheffingennummer_with, generate_multiple_loonheffingennummer,
    generate_multiple_loonheffingennummer_with, is_valid_loonheffingennummer,
    is_valid_suffixed_loonheffingennummer, validate_loonheffingennummer,
    validate_suffixed_loonheffingennummer, with_suffix,
};
