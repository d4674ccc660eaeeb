//! ISO 7064 mod-97-10 over alphanumeric strings.
//!
//! Letters are expanded to two-digit numbers (A=10 … Z=35) and the
//! resulting numeral string is reduced digit by digit, so inputs of any
//! length are handled without big-integer arithmetic.

/// Expand uppercase ASCII letters to their two-digit values (A=10 … Z=35).
///
/// Every other character is passed through unchanged.
pub fn letters_to_numbers(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            let value = u32::from(c) - u32::from('A') + 10;
            out.push_str(&value.to_string());
        } else {
            out.push(c);
        }
    }
    out
}

/// Reduce a decimal numeral string modulo 97.
///
/// Folds left to right with `r = (r * 10 + digit) % 97`, starting at 0.
/// Returns `None` if any character is not an ASCII digit.
pub fn mod97(numerals: &str) -> Option<u32> {
    numerals.chars().try_fold(0u32, |remainder, c| {
        c.to_digit(10).map(|d| (remainder * 10 + d) % 97)
    })
}

/// Letter expansion followed by the mod-97 reduction.
pub fn alphanumeric_mod97(s: &str) -> Option<u32> {
    mod97(&letters_to_numbers(s))
}
