//! CPF check-digit validation.
//!
//! A CPF has nine base digits followed by two check digits. Each check digit
//! is a weighted sum modulo 11 over the digits before it: weights 10..2 for
//! the first, 11..2 for the second, and a remainder below 2 maps to 0.

/// Sequences that pass the checksum but are never issued.
const BLOCKLIST: &[&str] = &["12345678909"];

/// Returns whether `id` is a valid CPF. Accepts masked (`111.444.777-35`) or
/// bare (`11144477735`) input.
///
/// # Examples
/// ```
/// use clientreg::national_id::is_valid;
///
/// assert!(is_valid("111.444.777-35"));
/// assert!(is_valid("35413515006"));
///
/// assert!(!is_valid("111.111.111-11"));
/// assert!(!is_valid("12345678909"));
/// assert!(!is_valid("texto-cpf"));
/// assert!(!is_valid(""));
/// ```
pub fn is_valid(id: &str) -> bool {
    let cleaned: String = id.chars().filter(|c| *c != '.' && *c != '-').collect();

    let digits: Vec<u32> = cleaned.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 11 || cleaned.len() != 11 {
        return false;
    }

    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    if BLOCKLIST.contains(&cleaned.as_str()) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Computes the check digit that follows `base`, weighting the first digit
/// with `base.len() + 1` down to 2 for the last.
fn check_digit(base: &[u32]) -> u32 {
    let top = base.len() as u32 + 1;
    let sum: u32 = base
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top - i as u32))
        .sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}
