#![cfg(feature = "loonheffingen")]

use rand::SeedableRng;
use rand::rngs::StdRng;
use testnummers::core::NummerError;
use testnummers::loonheffingen::*;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn valid_known_numbers() {
    assert!(is_valid_loonheffingennummer("111111110"));
    assert!(is_valid_loonheffingennummer("123456782"));
}

#[test]
fn invalid_known_numbers() {
    assert!(!is_valid_loonheffingennummer("123456789"));
    assert!(!is_valid_loonheffingennummer("987654321"));
    assert!(!is_valid_loonheffingennummer("111111111"));
}

#[test]
fn wrong_shape_rejected() {
    assert!(!is_valid_loonheffingennummer("12345678"));
    assert!(!is_valid_loonheffingennummer("1234567890"));
    assert!(!is_valid_loonheffingennummer("abcdefghi"));
    assert!(!is_valid_loonheffingennummer(""));
}

#[test]
fn remainder_ten_prefix_never_valid() {
    // 1*9 + 6*2 = 21 ≡ 10 (mod 11)
    for check in '0'..='9' {
        let number = format!("10000006{check}");
        assert!(!is_valid_loonheffingennummer(&number), "{number}");
    }
}

// ---------------------------------------------------------------------------
// L01 suffix
// ---------------------------------------------------------------------------

#[test]
fn suffix_is_presentation_only() {
    assert!(!is_valid_loonheffingennummer("111111110L01"));
    assert!(is_valid_suffixed_loonheffingennummer("111111110L01"));
    assert!(!is_valid_suffixed_loonheffingennummer("111111110"));
}

#[test]
fn suffixed_checksum_still_applies() {
    assert!(matches!(
        validate_suffixed_loonheffingennummer("123456789L01"),
        Err(NummerError::ChecksumMismatch { .. })
    ));
}

#[test]
fn missing_suffix_explained() {
    insta::assert_snapshot!(
        validate_suffixed_loonheffingennummer("111111110").unwrap_err(),
        @"malformed input '111111110': expected suffix 'L01'"
    );
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

#[test]
fn generated_numbers_are_valid() {
    for _ in 0..100 {
        let n = generate_loonheffingennummer().unwrap();
        assert!(is_valid_loonheffingennummer(&n), "{n}");
    }
}

#[test]
fn generated_numbers_have_no_leading_zero() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let n = generate_loonheffingennummer_with(&mut rng).unwrap();
        assert_eq!(n.len(), LOONHEFFINGEN_LEN);
        assert!(!n.starts_with('0'));
    }
}

#[test]
fn generate_multiple_returns_count() {
    let all = generate_multiple_loonheffingennummer(5).unwrap();
    assert_eq!(all.len(), 5);
    let ten = generate_multiple_loonheffingennummer(10).unwrap();
    assert!(ten.iter().all(|n| is_valid_loonheffingennummer(n)));
}
