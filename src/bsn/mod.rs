//! BSN (burgerservicenummer) generation and validation.
//!
//! A BSN is nine digits that pass the zero-sum elfproef: with weights
//! `[9, 8, 7, 6, 5, 4, 3, 2, -1]` the weighted sum is divisible by 11.
//!
//! # Example
//!
//! ```
//! use testnummers::bsn::*;
//!
//! assert!(is_valid_bsn("123456782"));
//! assert!(!is_valid_bsn("123456789"));
//!
//! let bsn = generate_bsn().unwrap();
//! assert!(is_valid_bsn(&bsn));
//! ```

mod number;

pub use number::{
    BSN_LEN, BSN_SCHEME, generate_bsn, generate_bsn_with, generate_multiple_bsn,
    generate_multiple_bsn_with, is_valid_bsn, validate_bsn,
};
