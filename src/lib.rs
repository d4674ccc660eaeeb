//! # testnummers
//!
//! Generate and validate Dutch test numbers:
//! BSN (burgerservicenummer), IBAN and Loonheffingennummer.
//!
//! Every generator has a `*_with` variant taking an explicit [`rand::Rng`],
//! so seeded sources give reproducible test data. Validators are total over
//! all strings: `is_valid_*` never panics and returns `false` for anything
//! outside the exact grammar, while `validate_*` says why.
//!
//! ## Quick Start
//!
//! ```rust
//! use testnummers::*;
//!
//! assert!(is_valid_bsn("123456782"));
//! assert!(is_valid_iban("NL91 ABNA 0417 1643 00"));
//! assert!(is_valid_loonheffingennummer("111111110"));
//!
//! let bsn = generate_bsn().unwrap();
//! assert!(is_valid_bsn(&bsn));
//!
//! let iban = generate_iban(Some(BankCode::Rabo));
//! assert_eq!(format_iban(&iban).len(), 22);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Modulus-11 and mod-97 checksum machinery, error type |
//! | `bsn` | BSN generation and validation |
//! | `iban` | Dutch IBAN generation, validation, formatting |
//! | `loonheffingen` | Loonheffingennummer generation and validation |
//! | `cli` | The `testnummers` command-line binary |
//! | `all` | Everything (also the default) |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "bsn")]
pub mod bsn;

#[cfg(feature = "iban")]
pub mod iban;

#[cfg(feature = "loonheffingen")]
pub mod loonheffingen;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export engine APIs at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "bsn")]
pub use crate::bsn::*;

#[cfg(feature = "iban")]
pub use crate::iban::*;

#[cfg(feature = "loonheffingen")]
pub use crate::loonheffingen::*;
