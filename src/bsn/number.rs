use rand::Rng;

use crate::core::{
    CheckDigitScheme, ELFPROEF_WEIGHTS, NummerError, ZeroSumMod11, digits_to_string, draw_digits,
    parse_digits,
};

/// Number of digits in a BSN.
pub const BSN_LEN: usize = 9;

/// The BSN elfproef: weights 9..2 on the prefix, −1 on the check digit.
pub const BSN_SCHEME: ZeroSumMod11 = ZeroSumMod11::new(&ELFPROEF_WEIGHTS);

/// Validate a BSN.
///
/// The input must be exactly nine ASCII digits, no separators or whitespace.
///
/// # Errors
///
/// Returns `NummerError::Malformed` on wrong length or non-digit characters,
/// `NummerError::ChecksumMismatch` if the elfproef fails.
pub fn validate_bsn(bsn: &str) -> Result<(), NummerError> {
    let digits = parse_digits(bsn, BSN_LEN)?;
    if BSN_SCHEME.is_valid(&digits) {
        Ok(())
    } else {
        Err(NummerError::checksum(bsn))
    }
}

/// Whether `bsn` is nine digits that pass the elfproef.
pub fn is_valid_bsn(bsn: &str) -> bool {
    validate_bsn(bsn).is_ok()
}

/// Generate a BSN using the thread-local random source.
pub fn generate_bsn() -> Result<String, NummerError> {
    generate_bsn_with(&mut rand::thread_rng())
}

/// Generate a BSN from `rng`. The leading digit is never 0.
pub fn generate_bsn_with<R: Rng + ?Sized>(rng: &mut R) -> Result<String, NummerError> {
    let digits = draw_digits(rng, &BSN_SCHEME, 1..=9)?;
    Ok(digits_to_string(&digits))
}

/// Generate `count` BSNs. Duplicates are possible.
pub fn generate_multiple_bsn(count: usize) -> Result<Vec<String>, NummerError> {
    generate_multiple_bsn_with(&mut rand::thread_rng(), count)
}

/// Generate `count` BSNs from `rng`.
pub fn generate_multiple_bsn_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<String>, NummerError> {
    (0..count).map(|_| generate_bsn_with(rng)).collect()
}
