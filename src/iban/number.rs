use rand::Rng;

use super::bank::BankCode;
use crate::core::{NummerError, alphanumeric_mod97};

/// Number of characters in a Dutch IBAN.
pub const IBAN_LEN: usize = 18;

/// Country prefix of Dutch IBANs.
pub const COUNTRY_CODE: &str = "NL";

const ACCOUNT_LEN: usize = 10;

/// Strip all whitespace and uppercase.
fn normalize(iban: &str) -> String {
    iban.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Positional grammar: 2 letters, 2 digits, 4 letters, 10 digits.
fn check_grammar(iban: &str) -> Result<(), NummerError> {
    if iban.len() != IBAN_LEN || !iban.is_ascii() {
        return Err(NummerError::malformed(
            iban,
            format!("expected {IBAN_LEN} characters after removing whitespace"),
        ));
    }
    let b = iban.as_bytes();
    let letters = |r: std::ops::Range<usize>| b[r].iter().all(u8::is_ascii_uppercase);
    let digits = |r: std::ops::Range<usize>| b[r].iter().all(u8::is_ascii_digit);

    if !letters(0..2) {
        return Err(NummerError::malformed(iban, "country code must be 2 letters"));
    }
    if !digits(2..4) {
        return Err(NummerError::malformed(iban, "check digits must be 2 digits"));
    }
    if !letters(4..8) {
        return Err(NummerError::malformed(iban, "bank code must be 4 letters"));
    }
    if !digits(8..IBAN_LEN) {
        return Err(NummerError::malformed(iban, "account number must be 10 digits"));
    }
    Ok(())
}

/// Validate a Dutch-format IBAN.
///
/// Whitespace is ignored and letters are uppercased before checking.
///
/// # Errors
///
/// Returns `NummerError::Malformed` if the input does not match
/// `[A-Z]{2}[0-9]{2}[A-Z]{4}[0-9]{10}`, `NummerError::ChecksumMismatch`
/// if the mod-97 remainder of the rearranged string is not 1.
pub fn validate_iban(iban: &str) -> Result<(), NummerError> {
    let iban = normalize(iban);
    check_grammar(&iban)?;

    let rearranged = format!("{}{}", &iban[4..], &iban[..4]);
    match alphanumeric_mod97(&rearranged) {
        Some(1) => Ok(()),
        _ => Err(NummerError::checksum(iban)),
    }
}

/// Whether `iban` is a well-formed Dutch-format IBAN with valid check digits.
pub fn is_valid_iban(iban: &str) -> bool {
    validate_iban(iban).is_ok()
}

/// Format an IBAN in groups of four, e.g. "NL91 ABNA 0417 1643 00".
///
/// Existing whitespace is removed first, so formatting is idempotent.
pub fn format_iban(iban: &str) -> String {
    let compact: Vec<char> = iban.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check digits for a Dutch IBAN with the given bank code and account number.
pub(crate) fn check_digits(bank: BankCode, account: &str) -> String {
    let check_string = format!("{bank}{account}{COUNTRY_CODE}00");
    // bank letters, account digits and "NL00" always reduce
    let remainder = alphanumeric_mod97(&check_string).unwrap_or_default();
    format!("{:02}", 98 - remainder)
}

/// Generate a Dutch IBAN using the thread-local random source.
///
/// With `None` the bank code is picked uniformly at random.
pub fn generate_iban(bank: Option<BankCode>) -> String {
    generate_iban_with(&mut rand::thread_rng(), bank)
}

/// Generate a Dutch IBAN from `rng`.
pub fn generate_iban_with<R: Rng + ?Sized>(rng: &mut R, bank: Option<BankCode>) -> String {
    let bank = bank.unwrap_or_else(|| BankCode::random(rng));
    let account: String = (0..ACCOUNT_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..=9u8)))
        .collect();
    let check = check_digits(bank, &account);
    format!("{COUNTRY_CODE}{check}{bank}{account}")
}

/// Generate `count` IBANs, all with `bank` if given. Duplicates are possible.
pub fn generate_multiple_iban(count: usize, bank: Option<BankCode>) -> Vec<String> {
    generate_multiple_iban_with(&mut rand::thread_rng(), count, bank)
}

/// Generate `count` IBANs from `rng`.
pub fn generate_multiple_iban_with<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    bank: Option<BankCode>,
) -> Vec<String> {
    (0..count).map(|_| generate_iban_with(rng, bank)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn known_valid() {
        assert!(is_valid_iban("NL91ABNA0417164300"));
        assert!(is_valid_iban("NL20INGB0001234567"));
        assert!(is_valid_iban("NL39RABO0300065264"));
    }

    #[test]
    fn whitespace_and_case_insensitive() {
        assert!(is_valid_iban("NL91 ABNA 0417 1643 00"));
        assert!(is_valid_iban("nl91abna0417164300"));
        assert!(is_valid_iban("\tNL91ABNA 041716\n4300 "));
    }

    #[test]
    fn checksum_mismatch() {
        assert_eq!(
            validate_iban("NL00ABNA0417164300"),
            Err(NummerError::checksum("NL00ABNA0417164300"))
        );
        assert!(!is_valid_iban("NL91ABNA0000000000"));
        // grammar matches, country changes the remainder
        assert!(matches!(
            validate_iban("DE91ABNA0417164300"),
            Err(NummerError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn malformed() {
        for iban in [
            "",
            "NLABNA0417164300",
            "NL91ABNA041716430",
            "NL91ABNA04171643000",
            "N191ABNA0417164300",
            "NL9AABNA0417164300",
            "NL91AB1A0417164300",
            "NL91ABNA04171643X0",
            "NL91ABNÄ0417164300",
        ] {
            assert!(
                matches!(validate_iban(iban), Err(NummerError::Malformed { .. })),
                "{iban:?} should be malformed"
            );
        }
    }

    #[test]
    fn check_digits_known() {
        assert_eq!(check_digits(BankCode::Abna, "0417164300"), "91");
        assert_eq!(check_digits(BankCode::Ingb, "0000000000"), "55");
        assert_eq!(check_digits(BankCode::Rabo, "0000000000"), "30");
    }

    #[test]
    fn format_groups_of_four() {
        assert_eq!(format_iban("NL91ABNA0417164300"), "NL91 ABNA 0417 1643 00");
        assert_eq!(format_iban("NL91 ABNA 0417 1643 00"), "NL91 ABNA 0417 1643 00");
        assert_eq!(format_iban("NL91"), "NL91");
        assert_eq!(format_iban(""), "");
    }

    #[test]
    fn generated_values_validate() {
        let mut rng = StdRng::seed_from_u64(97);
        for _ in 0..1000 {
            let iban = generate_iban_with(&mut rng, None);
            assert_eq!(iban.len(), IBAN_LEN);
            assert!(iban.starts_with("NL"));
            assert!(is_valid_iban(&iban), "{iban} fails mod 97");
        }
    }

    #[test]
    fn generated_with_bank() {
        let mut rng = StdRng::seed_from_u64(5);
        for bank in BankCode::ALL {
            let iban = generate_iban_with(&mut rng, Some(bank));
            assert_eq!(&iban[4..8], bank.as_str());
            assert!(is_valid_iban(&iban));
        }
    }

    #[test]
    fn multiple_with_bank() {
        let ibans = generate_multiple_iban(5, Some(BankCode::Rabo));
        assert_eq!(ibans.len(), 5);
        for iban in &ibans {
            assert_eq!(&iban[4..8], "RABO");
            assert!(is_valid_iban(iban));
        }
    }
}
