use rand::Rng;

use crate::core::{
    CheckDigitScheme, DerivedDigitMod11, ELFPROEF_WEIGHTS, NummerError, digits_to_string,
    draw_digits, parse_digits,
};

/// Number of digits in a Loonheffingennummer.
pub const LOONHEFFINGEN_LEN: usize = 9;

/// Presentation suffix appended after the nine digits.
pub const LOONHEFFINGEN_SUFFIX: &str = "L01";

/// Weights 9..2 on the first eight digits; the ninth equals the sum mod 11.
pub const LOONHEFFINGEN_SCHEME: DerivedDigitMod11 = DerivedDigitMod11::new(&ELFPROEF_WEIGHTS);

/// Validate a Loonheffingennummer in its canonical nine-digit form.
///
/// # Errors
///
/// Returns `NummerError::Malformed` on wrong length or non-digit characters,
/// `NummerError::ChecksumMismatch` if the ninth digit is not the weighted
/// sum of the first eight mod 11.
pub fn validate_loonheffingennummer(number: &str) -> Result<(), NummerError> {
    let digits = parse_digits(number, LOONHEFFINGEN_LEN)?;
    if LOONHEFFINGEN_SCHEME.is_valid(&digits) {
        Ok(())
    } else {
        Err(NummerError::checksum(number))
    }
}

/// Whether `number` is nine digits with a correct derived check digit.
pub fn is_valid_loonheffingennummer(number: &str) -> bool {
    validate_loonheffingennummer(number).is_ok()
}

/// Validate the suffixed presentation form, e.g. "111111110L01".
///
/// # Errors
///
/// Returns `NummerError::Malformed` if the `L01` suffix is missing, otherwise
/// whatever [`validate_loonheffingennummer`] returns for the digits.
pub fn validate_suffixed_loonheffingennummer(number: &str) -> Result<(), NummerError> {
    let digits = number.strip_suffix(LOONHEFFINGEN_SUFFIX).ok_or_else(|| {
        NummerError::malformed(number, format!("expected suffix '{LOONHEFFINGEN_SUFFIX}'"))
    })?;
    validate_loonheffingennummer(digits)
}

/// Whether `number` is a valid Loonheffingennummer followed by `L01`.
pub fn is_valid_suffixed_loonheffingennummer(number: &str) -> bool {
    validate_suffixed_loonheffingennummer(number).is_ok()
}

/// Append the `L01` presentation suffix.
pub fn with_suffix(number: &str) -> String {
    format!("{number}{LOONHEFFINGEN_SUFFIX}")
}

/// Generate a Loonheffingennummer using the thread-local random source.
pub fn generate_loonheffingennummer() -> Result<String, NummerError> {
    generate_loonheffingennummer_with(&mut rand::thread_rng())
}

/// Generate a Loonheffingennummer from `rng`. The leading digit is never 0.
pub fn generate_loonheffingennummer_with<R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<String, NummerError> {
    let digits = draw_digits(rng, &LOONHEFFINGEN_SCHEME, 1..=9)?;
    Ok(digits_to_string(&digits))
}

/// Generate `count` Loonheffingennummers. Duplicates are possible.
pub fn generate_multiple_loonheffingennummer(count: usize) -> Result<Vec<String>, NummerError> {
    generate_multiple_loonheffingennummer_with(&mut rand::thread_rng(), count)
}

/// Generate `count` Loonheffingennummers from `rng`.
pub fn generate_multiple_loonheffingennummer_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<String>, NummerError> {
    (0..count)
        .map(|_| generate_loonheffingennummer_with(rng))
        .collect()
}
