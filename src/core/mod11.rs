//! Modulus-11 weighted-sum checks ("elfproef").
//!
//! Two schemes share the weighted-sum machinery but differ in how the check
//! digit relates to the sum:
//!
//! - [`ZeroSumMod11`]: the check digit carries weight −1 and the full sum
//!   must be ≡ 0 (mod 11). Used for the BSN.
//! - [`DerivedDigitMod11`]: the check digit must equal the prefix sum
//!   mod 11 exactly. Used for the Loonheffingennummer.
//!
//! In both schemes a remainder of 10 has no single-digit representation, so
//! generation discards the prefix and draws again (see [`draw_digits`]).

use std::ops::RangeInclusive;

use rand::Rng;

use super::error::NummerError;

/// Weights applied to the first eight digits of a BSN or Loonheffingennummer.
pub const ELFPROEF_WEIGHTS: [i32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

/// Weight of the check digit in the zero-sum scheme.
pub const ZERO_SUM_CHECK_WEIGHT: i32 = -1;

/// Upper bound on prefix draws in [`draw_digits`].
pub const MAX_DRAWS: usize = 10_000;

/// Σ digit[i]·weight[i] over the zipped pairs.
///
/// Extra digits or weights beyond the shorter of the two are ignored.
pub fn weighted_sum(digits: &[u8], weights: &[i32]) -> i32 {
    digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| i32::from(d) * w)
        .sum()
}

/// A modulus-11 check digit rule over a fixed-length digit string.
pub trait CheckDigitScheme {
    /// Weights applied to the prefix (every digit but the check digit).
    fn prefix_weights(&self) -> &[i32];

    /// The check digit completing `prefix`, or `None` if no single digit does.
    fn check_digit(&self, prefix: &[u8]) -> Option<u8>;

    /// Whether `digits` (prefix followed by check digit) satisfies the rule.
    fn is_valid(&self, digits: &[u8]) -> bool;

    /// Total length including the check digit.
    fn digit_count(&self) -> usize {
        self.prefix_weights().len() + 1
    }
}

/// Zero-sum modulus-11: Σ prefix·w − check ≡ 0 (mod 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroSumMod11 {
    weights: &'static [i32],
}

impl ZeroSumMod11 {
    /// Scheme with the given prefix weights; the check digit weighs −1.
    pub const fn new(weights: &'static [i32]) -> Self {
        Self { weights }
    }
}

impl CheckDigitScheme for ZeroSumMod11 {
    fn prefix_weights(&self) -> &[i32] {
        self.weights
    }

    fn check_digit(&self, prefix: &[u8]) -> Option<u8> {
        if prefix.len() != self.weights.len() {
            return None;
        }
        // With a check weight of −1 the congruence solves to d ≡ Σ (mod 11).
        let d = weighted_sum(prefix, self.weights).rem_euclid(11);
        u8::try_from(d).ok().filter(|&d| d <= 9)
    }

    fn is_valid(&self, digits: &[u8]) -> bool {
        let Some((&check, prefix)) = digits.split_last() else {
            return false;
        };
        if prefix.len() != self.weights.len() {
            return false;
        }
        let sum = weighted_sum(prefix, self.weights) + i32::from(check) * ZERO_SUM_CHECK_WEIGHT;
        sum.rem_euclid(11) == 0
    }
}

/// Derived-digit modulus-11: check digit = Σ prefix·w mod 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedDigitMod11 {
    weights: &'static [i32],
}

impl DerivedDigitMod11 {
    /// Scheme with the given prefix weights.
    pub const fn new(weights: &'static [i32]) -> Self {
        Self { weights }
    }
}

impl CheckDigitScheme for DerivedDigitMod11 {
    fn prefix_weights(&self) -> &[i32] {
        self.weights
    }

    fn check_digit(&self, prefix: &[u8]) -> Option<u8> {
        if prefix.len() != self.weights.len() {
            return None;
        }
        let remainder = weighted_sum(prefix, self.weights).rem_euclid(11);
        u8::try_from(remainder).ok().filter(|&d| d <= 9)
    }

    fn is_valid(&self, digits: &[u8]) -> bool {
        match digits.split_last() {
            Some((&check, prefix)) => self.check_digit(prefix) == Some(check),
            None => false,
        }
    }
}

/// Draw a random digit string that satisfies `scheme`.
///
/// The leading digit comes from `leading`, the rest of the prefix is uniform
/// 0–9. When the prefix has no representable check digit the whole prefix is
/// discarded, since the prefix alone fixes the remainder.
pub fn draw_digits<R, S>(
    rng: &mut R,
    scheme: &S,
    leading: RangeInclusive<u8>,
) -> Result<Vec<u8>, NummerError>
where
    R: Rng + ?Sized,
    S: CheckDigitScheme + ?Sized,
{
    draw_digits_capped(rng, scheme, leading, MAX_DRAWS)
}

fn draw_digits_capped<R, S>(
    rng: &mut R,
    scheme: &S,
    leading: RangeInclusive<u8>,
    max_draws: usize,
) -> Result<Vec<u8>, NummerError>
where
    R: Rng + ?Sized,
    S: CheckDigitScheme + ?Sized,
{
    let prefix_len = scheme.prefix_weights().len();
    let mut digits = Vec::with_capacity(prefix_len + 1);

    for attempt in 1..=max_draws {
        digits.clear();
        if prefix_len > 0 {
            digits.push(rng.gen_range(leading.clone()));
        }
        while digits.len() < prefix_len {
            digits.push(rng.gen_range(0..=9));
        }

        if let Some(check) = scheme.check_digit(&digits) {
            digits.push(check);
            return Ok(digits);
        }
        tracing::trace!(attempt, "prefix has no single-digit check value, redrawing");
    }

    tracing::warn!(max_draws, "gave up drawing a prefix with a representable check digit");
    Err(NummerError::UnreachableCheckDigit {
        attempts: max_draws,
    })
}

/// Parse a string of exactly `len` ASCII digits into digit values.
pub(crate) fn parse_digits(value: &str, len: usize) -> Result<Vec<u8>, NummerError> {
    if value.len() != len {
        return Err(NummerError::malformed(
            value,
            format!("expected {len} digits, got {} characters", value.chars().count()),
        ));
    }
    value
        .bytes()
        .map(|b| {
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(NummerError::malformed(value, "only digits 0-9 are allowed"))
            }
        })
        .collect()
}

/// Render digit values as an ASCII string.
pub(crate) fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}
