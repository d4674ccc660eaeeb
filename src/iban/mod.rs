//! Dutch IBAN generation, validation and formatting.
//!
//! A Dutch IBAN is `NL` + 2 check digits + 4-letter bank code + 10-digit
//! account number. Validity follows ISO 7064 mod-97-10: moving the first
//! four characters to the end and expanding letters (A=10 … Z=35) yields a
//! number that leaves remainder 1 when divided by 97.
//!
//! # Example
//!
//! ```
//! use testnummers::iban::*;
//!
//! assert!(is_valid_iban("NL91 ABNA 0417 1643 00"));
//! assert_eq!(format_iban("NL91ABNA0417164300"), "NL91 ABNA 0417 1643 00");
//!
//! let iban = generate_iban(Some(BankCode::Ingb));
//! assert_eq!(&iban[4..8], "INGB");
//! assert!(is_valid_iban(&iban));
//! ```

mod bank;
mod number;

pub use bank::{BankCode, DUTCH_BANK_CODES};
pub use number::{
    COUNTRY_CODE, IBAN_LEN, format_iban, generate_iban, generate_iban_with, generate_multiple_iban,
    generate_multiple_iban_with, is_valid_iban, validate_iban,
};
