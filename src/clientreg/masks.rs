//! # Input Masks
//!
//! Format-as-you-type transforms for the masked client fields. Every `mask_*`
//! function accepts partial input (whatever the user has typed so far) and
//! returns the best-effort masked prefix, so it can run on every keystroke.
//! Every `unmask_*` function strips the formatting back out.
//!
//! | Field | Masked form | Max raw length |
//! |-------|-------------|----------------|
//! | phone | `(11) 98765-4321` or `(11) 3333-4444` | 11 digits |
//! | CPF | `111.444.777-35` | 11 digits |
//! | plate | `ABC-1234` | 7 characters |
//!
//! None of these functions panic, and all of them map `""` to `""`.

use crate::model::Field;

fn digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a phone number: `(DD) DDDDD-DDDD` for mobiles, `(DD) DDDD-DDDD`
/// for landlines.
pub fn mask_phone(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    // Only ASCII digits survive, so byte slicing below is on char boundaries.
    let cleaned = digits(value);
    let n = cleaned.len();

    if n <= 2 {
        return format!("({}", cleaned);
    }
    if n <= 6 {
        return format!("({}) {}", &cleaned[..2], &cleaned[2..]);
    }
    if n <= 10 {
        return format!("({}) {}-{}", &cleaned[..2], &cleaned[2..6], &cleaned[6..]);
    }
    format!(
        "({}) {}-{}",
        &cleaned[..2],
        &cleaned[2..7],
        &cleaned[7..11]
    )
}

pub fn unmask_phone(value: &str) -> String {
    digits(value)
}

/// Formats a CPF as `DDD.DDD.DDD-DD`.
pub fn mask_national_id(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let cleaned = digits(value);
    let n = cleaned.len();

    if n <= 3 {
        return cleaned;
    }
    if n <= 6 {
        return format!("{}.{}", &cleaned[..3], &cleaned[3..]);
    }
    if n <= 9 {
        return format!("{}.{}.{}", &cleaned[..3], &cleaned[3..6], &cleaned[6..]);
    }
    format!(
        "{}.{}.{}-{}",
        &cleaned[..3],
        &cleaned[3..6],
        &cleaned[6..9],
        &cleaned[9..11]
    )
}

pub fn unmask_national_id(value: &str) -> String {
    digits(value)
}

/// Formats a license plate as `LLL-DDDD`, uppercasing as it goes.
pub fn mask_plate(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let cleaned: String = value
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect();

    if cleaned.len() <= 3 {
        return cleaned;
    }
    let end = cleaned.len().min(7);
    format!("{}-{}", &cleaned[..3], &cleaned[3..end])
}

pub fn unmask_plate(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_uppercase()
}

/// Applies the mask that belongs to `field`. Names are free text and pass
/// through untouched.
pub fn mask_field(field: Field, value: &str) -> String {
    match field {
        Field::Name => value.to_string(),
        Field::Phone => mask_phone(value),
        Field::NationalId => mask_national_id(value),
        Field::Plate => mask_plate(value),
    }
}
